use config::{Config, Environment, File};
use serde_json::Value;
use tracing::debug;

use crate::error::AsrConfigError;
use crate::schema::AsrPipelineConfig;

/// Prefix for environment overrides, nested keys separated by `__`
/// (e.g. `VOXPIPE_ASR__SAMPLE_RATE`,
/// `VOXPIPE_ASR__WHISPER_ASR_CONFIG__API_KEY`).
const ENV_PREFIX: &str = "VOXPIPE_ASR";

impl AsrPipelineConfig {
    /// Loads the stage config from the default `config/asr` location.
    pub fn load() -> Result<Self, AsrConfigError> {
        Self::load_from(&format!("config/{}", Self::STAGE))
    }

    /// Loads the stage config from `{base}` and `{base}.local` files (any
    /// format the config crate recognizes; both optional), layered with
    /// `VOXPIPE_ASR`-prefixed environment variables.
    ///
    /// The merged document goes through [`AsrPipelineConfig::from_value`],
    /// so file, env and programmatic input share one validator and the
    /// defaults declared in the schema. An empty layer set yields
    /// `Self::default()`.
    pub fn load_from(base: &str) -> Result<Self, AsrConfigError> {
        let layered = Config::builder()
            .add_source(File::with_name(base).required(false))
            .add_source(File::with_name(&format!("{base}.local")).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix(ENV_PREFIX)
                    .try_parsing(true),
            )
            .build()?;

        let raw: Value = layered.try_deserialize()?;
        let cfg = Self::from_value(&raw)?;
        debug!(
            model = %cfg.model_id,
            sample_rate = cfg.sample_rate,
            channels = cfg.channels,
            "ASR stage config loaded"
        );
        Ok(cfg)
    }
}
