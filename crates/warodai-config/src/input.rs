use std::env;

use serde::{Deserialize, Serialize};

fn default_encoding() -> String {
    "utf-16le".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// WHATWG label of the source text encoding
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl InputConfig {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(encoding) = env::var("WARODAI_ENCODING") {
            self.encoding = encoding;
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
        }
    }
}
