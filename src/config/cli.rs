use crate::config::messages::Messages;
use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

impl CliConfig {
    /// Built-in defaults, then the config file, then `--lang`.
    pub fn resolve_messages(&self) -> Result<Messages> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let locale = self.lang.unwrap_or_else(|| file_config.locale());
        tracing::debug!("Using locale: {:?}", locale);

        Ok(file_config.messages(locale))
    }
}
