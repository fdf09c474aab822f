use numshift::{BufferSurface, Command, Selection, Settings, run_command};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn convert(cmd: Command, text: &str) -> (String, usize) {
    let mut surface =
        BufferSurface::with_selections(text, vec![Selection::new(0, text.chars().count())]);
    let skipped = run_command(cmd, &mut surface, &Settings::new());
    (surface.text(), skipped)
}

#[quickcheck]
fn prop_bin_to_hex_matches_reference(bits: Vec<bool>) -> TestResult {
    // i128 parsing caps the usable width.
    if bits.is_empty() || bits.len() > 100 {
        return TestResult::discard();
    }
    let text: String = bits.iter().map(|b| if *b { '1' } else { '0' }).collect();
    let value = bits.iter().fold(0u128, |acc, b| (acc << 1) | *b as u128);

    let (converted, skipped) = convert(Command::BinToHex, &text);
    TestResult::from_bool(skipped == 0 && converted == format!("{value:#x}"))
}

#[quickcheck]
fn prop_dec_hex_round_trip(n: u32) -> bool {
    let (hex, s1) = convert(Command::DecToHex, &n.to_string());
    let (back, s2) = convert(Command::HexToDec, &hex);
    s1 == 0 && s2 == 0 && back == n.to_string()
}

#[quickcheck]
fn prop_dec_bin_round_trip(n: u32) -> bool {
    let (bin, s1) = convert(Command::DecToBin, &n.to_string());
    let (back, s2) = convert(Command::BinToDec, &bin);
    s1 == 0 && s2 == 0 && back == n.to_string()
}

#[quickcheck]
fn prop_non_matching_selection_is_left_alone(seed: Vec<u8>) -> TestResult {
    if seed.is_empty() {
        return TestResult::discard();
    }
    // Letters outside every source alphabet, so no command can match.
    let text: String = seed
        .iter()
        .map(|b| char::from(b'g' + b % 20))
        .collect();
    for cmd in [
        Command::BinToDec,
        Command::BinToHex,
        Command::DecToBin,
        Command::DecToHex,
        Command::HexToBin,
        Command::HexToDec,
        Command::ExpToDec,
        Command::DecToExp,
    ] {
        let (converted, skipped) = convert(cmd, &text);
        if converted != text || skipped != 1 {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}
