use serde::{Deserialize, Serialize};

use crate::engine::config::{
    DST_BIN_KEY, DST_EXP_KEY, DST_HEX_KEY, SRC_BIN_KEY, SRC_EXP_KEY, SRC_HEX_KEY, Settings,
};

/// Represents the structure of the `numshift` config file.
/// All fields are optional, so users only need to specify the patterns they
/// want to override; everything else keeps its built-in default.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub convert_src_bin: Option<String>,
    pub convert_dst_bin: Option<String>,
    pub convert_src_hex: Option<String>,
    pub convert_dst_hex: Option<String>,
    pub convert_src_exp: Option<String>,
    pub convert_dst_exp: Option<String>,
}

impl ConfigFile {
    /// Copies every configured pattern into the settings store.
    pub fn apply(&self, settings: &mut Settings) {
        let pairs = [
            (SRC_BIN_KEY, &self.convert_src_bin),
            (DST_BIN_KEY, &self.convert_dst_bin),
            (SRC_HEX_KEY, &self.convert_src_hex),
            (DST_HEX_KEY, &self.convert_dst_hex),
            (SRC_EXP_KEY, &self.convert_src_exp),
            (DST_EXP_KEY, &self.convert_dst_exp),
        ];
        for (key, value) in pairs {
            if let Some(v) = value {
                settings.set(key, v.clone());
            }
        }
    }
}
