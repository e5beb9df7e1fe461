use crate::core::ConfigProvider;
use crate::core::roman::{MAX_ROMAN, MIN_ROMAN};
use crate::domain::ports::{DEFAULT_MAX_OPERAND, DEFAULT_MIN_OPERAND, DEFAULT_PROMPT};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub min_operand: Option<i64>,
    pub max_operand: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CALC_PROMPT})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles")
        });

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn min_operand(&self) -> i64 {
        self.evaluator.min_operand.unwrap_or(DEFAULT_MIN_OPERAND)
    }

    pub fn max_operand(&self) -> i64 {
        self.evaluator.max_operand.unwrap_or(DEFAULT_MAX_OPERAND)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_format(&self) -> &str {
        self.logging.format.as_deref().unwrap_or(LOG_FORMATS[0])
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("evaluator.min_operand", self.min_operand(), MIN_ROMAN, MAX_ROMAN)?;
        validation::validate_range(
            "evaluator.max_operand",
            self.max_operand(),
            self.min_operand(),
            MAX_ROMAN,
        )?;

        if let Some(prompt) = &self.console.prompt {
            validation::validate_non_empty_string("console.prompt", prompt)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        validation::validate_one_of("logging.format", self.log_format(), &LOG_FORMATS)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn prompt(&self) -> &str {
        self.console.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    fn operand_range(&self) -> RangeInclusive<i64> {
        self.min_operand()..=self.max_operand()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[evaluator]
min_operand = 1
max_operand = 20

[console]
prompt = "> "

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.operand_range(), 1..=20);
        assert_eq!(config.prompt(), "> ");
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), "json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.operand_range(), 1..=10);
        assert_eq!(config.prompt(), DEFAULT_PROMPT);
        assert_eq!(config.log_format(), "compact");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_CALC_TEST_PROMPT", "calc> ");

        let toml_content = r#"
[console]
prompt = "${ROMAN_CALC_TEST_PROMPT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.prompt(), "calc> ");

        std::env::remove_var("ROMAN_CALC_TEST_PROMPT");
    }

    #[test]
    fn test_config_validation() {
        let inverted = TomlConfig::from_toml_str("[evaluator]\nmin_operand = 5\nmax_operand = 2\n").unwrap();
        assert!(inverted.validate().is_err());

        let beyond_roman = TomlConfig::from_toml_str("[evaluator]\nmax_operand = 4000\n").unwrap();
        assert!(beyond_roman.validate().is_err());

        let zero = TomlConfig::from_toml_str("[evaluator]\nmin_operand = 0\n").unwrap();
        assert!(zero.validate().is_err());

        let blank_prompt = TomlConfig::from_toml_str("[console]\nprompt = \"  \"\n").unwrap();
        assert!(blank_prompt.validate().is_err());

        let unknown_format = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(unknown_format.validate().is_err());

        let unknown_level = TomlConfig::from_toml_str("[logging]\nlevel = \"verbose\"\n").unwrap();
        assert!(matches!(
            unknown_level.validate(),
            Err(CalcError::InvalidConfigValueError { field, .. }) if field == "logging.level"
        ));

        let directive = TomlConfig::from_toml_str("[logging]\nlevel = \"info,hyper=off\"\n").unwrap();
        assert!(directive.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TomlConfig::from_toml_str("[evaluator\nmin_operand = 1"),
            Err(CalcError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[evaluator]\nmax_operand = 50\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_operand(), 50);
    }
}
