use crate::config::messages::{Locale, Messages};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_optional_string, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub output: Option<OutputConfig>,
    pub messages: Option<MessagesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub locale: Option<Locale>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub arithmetic_operation_not_supported: Option<String>,
    pub calculation_not_supported_operation: Option<String>,
    pub calculation_result_not_supported: Option<String>,
    pub division_by_zero: Option<String>,
}

impl TomlConfig {
    /// Loads the optional calculator config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CalcError::ConfigError {
            field: path.as_ref().display().to_string(),
            message: format!("Cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn locale(&self) -> Locale {
        self.output
            .as_ref()
            .and_then(|output| output.locale)
            .unwrap_or_default()
    }

    /// Built-in messages for `locale`, then any overrides from the file.
    pub fn messages(&self, locale: Locale) -> Messages {
        let mut messages = Messages::for_locale(locale);

        if let Some(prompt) = self.output.as_ref().and_then(|o| o.prompt.clone()) {
            messages.prompt = prompt;
        }

        if let Some(overrides) = &self.messages {
            let fields = [
                (
                    &overrides.arithmetic_operation_not_supported,
                    &mut messages.arithmetic_operation_not_supported,
                ),
                (
                    &overrides.calculation_not_supported_operation,
                    &mut messages.calculation_not_supported_operation,
                ),
                (
                    &overrides.calculation_result_not_supported,
                    &mut messages.calculation_result_not_supported,
                ),
                (&overrides.division_by_zero, &mut messages.division_by_zero),
            ];
            for (value, target) in fields {
                if let Some(value) = value {
                    *target = value.clone();
                }
            }
        }

        messages
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_optional_string("output.prompt", &output.prompt)?;
        }

        if let Some(messages) = &self.messages {
            validate_optional_string(
                "messages.arithmetic_operation_not_supported",
                &messages.arithmetic_operation_not_supported,
            )?;
            validate_optional_string(
                "messages.calculation_not_supported_operation",
                &messages.calculation_not_supported_operation,
            )?;
            validate_optional_string(
                "messages.calculation_result_not_supported",
                &messages.calculation_result_not_supported,
            )?;
            validate_optional_string("messages.division_by_zero", &messages.division_by_zero)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MessageProvider;
    use crate::utils::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.locale(), Locale::Ru);
        assert_eq!(config.messages(config.locale()), Messages::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_locale_and_overrides() {
        let toml_content = r#"
[output]
locale = "en"
prompt = "Calculate something?"

[messages]
calculation_not_supported_operation = "Nope"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let messages = config.messages(config.locale());

        assert_eq!(config.locale(), Locale::En);
        assert_eq!(messages.prompt(), "Calculate something?");
        assert_eq!(
            messages.message_for(ErrorKind::CalculationNotSupportedOperation),
            "Nope"
        );
        assert_eq!(
            messages.message_for(ErrorKind::ArithmeticOperationNotSupported),
            "Arithmetic operation is not supported"
        );
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let result = TomlConfig::from_toml_str("[output]\nlocale = \"de\"\n");
        assert!(matches!(result, Err(CalcError::ConfigError { .. })));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_CALC_TEST_PROMPT", "Env prompt");

        let config =
            TomlConfig::from_toml_str("[output]\nprompt = \"${ROMAN_CALC_TEST_PROMPT}\"\n").unwrap();
        assert_eq!(config.messages(Locale::Ru).prompt, "Env prompt");

        std::env::remove_var("ROMAN_CALC_TEST_PROMPT");
    }

    #[test]
    fn test_blank_override_fails_validation() {
        let config = TomlConfig::from_toml_str("[messages]\ndivision_by_zero = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nlocale = \"en\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = TomlConfig::from_file("/nonexistent/roman-calc.toml");
        assert!(matches!(result, Err(CalcError::ConfigError { .. })));
    }
}
