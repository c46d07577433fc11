use crate::core::ConfigProvider;
use crate::utils::error::{DilutionError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{OutputFormat, RECOMMENDED_CONCENTRATION};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub calculation: CalculationConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// g/L; the built-in default applies when omitted.
    pub recommended_concentration: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DilutionError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DilutionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DilutionError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl ConfigProvider for TomlConfig {
    fn recommended_concentration(&self) -> f64 {
        self.calculation
            .recommended_concentration
            .unwrap_or(RECOMMENDED_CONCENTRATION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(target) = self.calculation.recommended_concentration {
            crate::utils::validation::validate_positive(
                "calculation.recommended_concentration",
                target,
            )?;
        }
        Ok(())
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
[calculation]
recommended_concentration = 0.5

[output]
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.recommended_concentration(), 0.5);
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_default() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.recommended_concentration(), RECOMMENDED_CONCENTRATION);
        assert_eq!(config.output_format(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STOCK_DILUTION_TEST_TARGET", "1.25");

        let toml_content = r#"
[calculation]
recommended_concentration = ${STOCK_DILUTION_TEST_TARGET}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.recommended_concentration(), 1.25);

        std::env::remove_var("STOCK_DILUTION_TEST_TARGET");
    }

    #[test]
    fn test_unset_env_var_is_a_parse_error() {
        let toml_content = r#"
[calculation]
recommended_concentration = ${STOCK_DILUTION_TEST_UNSET}
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(DilutionError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[calculation]
recommended_concentration = -0.64
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[calculation]
recommended_concentration = 0.8
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.recommended_concentration(), 0.8);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/stock-dilution.toml"),
            Err(DilutionError::IoError(_))
        ));
    }
}
