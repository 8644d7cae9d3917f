use serde::{Deserialize, Serialize};

use self::input::InputConfig;
use self::output::OutputConfig;
use self::parser::ParserConfig;

pub mod input;
pub mod output;
pub mod parser;

pub use self::parser::OrphanExamplePolicy;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// `WARODAI_ENCODING`, `WARODAI_INDENT`, `WARODAI_SKIP_LEADING_BLOCKS`
    pub fn apply_env_overrides(&mut self) {
        self.input.apply_env_overrides();
        self.parser.apply_env_overrides();
        self.output.apply_env_overrides();
    }
}
