pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::StdConsole, toml_config::TomlConfig};
pub use core::engine::{render, CalcEngine};
pub use core::evaluator::{apply, Evaluator};
pub use core::roman::{arabic_to_roman, is_valid_roman, parse_roman, roman_to_arabic};
pub use core::tokenizer::tokenize;
pub use domain::model::{Evaluation, Notation, Operator};
pub use domain::ports::{ConfigProvider, Console, DefaultConfig};
pub use utils::error::{CalcError, Result};
