use std::env;

use serde::{Deserialize, Serialize};

fn default_pretty() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Spaces per nesting level when pretty printing
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl OutputConfig {
    pub fn apply_env_overrides(&mut self) {
        if let Some(indent) = env::var("WARODAI_INDENT").ok().and_then(|v| v.parse().ok()) {
            self.indent = indent;
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}
