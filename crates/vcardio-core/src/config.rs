use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_FOLD_WIDTH, MIN_INPUT_LEN, VCARD_EXTENSIONS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Knobs for reading and writing card files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Buffers shorter than this are rejected before any scanning.
    pub min_input_len: usize,
    /// Accepted file extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Fold serialized content lines longer than `fold_width` octets.
    pub fold_output: bool,
    pub fold_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_input_len: MIN_INPUT_LEN,
            extensions: VCARD_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            fold_output: false,
            fold_width: DEFAULT_FOLD_WIDTH,
        }
    }
}

impl CodecConfig {
    /// ## Summary
    /// Returns whether `extension` is one of the accepted card file extensions.
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    /// ## Summary
    /// Checks the values that would make the reader or the folder misbehave.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if no extension is accepted or
    /// the fold width leaves no room for content after the continuation space.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extensions.is_empty() || self.extensions.iter().any(String::is_empty) {
            return Err(CoreError::InvalidConfiguration(
                "codec.extensions must list at least one non-empty extension".to_string(),
            ));
        }

        if self.fold_width < 2 {
            return Err(CoreError::InvalidConfiguration(format!(
                "codec.fold_width must be at least 2, got {}",
                self.fold_width
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml`, and
    /// `VCARDIO__*` environment variables. Environment variables take
    /// precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let defaults = CodecConfig::default();

        let settings = Config::builder()
            .set_default("codec.min_input_len", defaults.min_input_len as u64)?
            .set_default("codec.extensions", defaults.extensions)?
            .set_default("codec.fold_output", defaults.fold_output)?
            .set_default("codec.fold_width", defaults.fold_width as u64)?
            .set_default("logging.level", LoggingConfig::default().level)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::with_prefix("VCARDIO")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("codec.extensions"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.codec.validate()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");

    Ok(settings)
}
