use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::construct::{as_table, field};
use crate::describe::EnumVariants;
use crate::error::AsrConfigError;

/// Sample encodings the capture side may hand to the ASR stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "float32", alias = "Float32")]
    Float32,
}

impl AudioFormat {
    /// Wire value of the encoding tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Float32 => "float32",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnumVariants for AudioFormat {
    const VARIANTS: &'static [(&'static str, &'static str)] =
        &[("Float32", AudioFormat::Float32.as_str())];
}

/// ASR backends/models the pipeline may target.
///
/// Hub-hosted models carry their hub identifier as the wire value; hosted
/// provider backends use their provider name. Both the declaration tag and
/// the wire value deserialize; serialization always emits the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsrModelId {
    #[serde(
        rename = "iic/speech_paraformer_asr_nat-zh-cn-16k-common-vocab8358-tensorflow1",
        alias = "Paraformer"
    )]
    Paraformer,
    #[serde(rename = "kotoba-tech/kotoba-whisper-v2.0", alias = "KotobaWhisper")]
    KotobaWhisper,
    #[serde(rename = "BaiduASR")]
    BaiduAsr,
    #[serde(rename = "WhisperASR")]
    WhisperAsr,
}

impl AsrModelId {
    /// Wire value of the model tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paraformer => {
                "iic/speech_paraformer_asr_nat-zh-cn-16k-common-vocab8358-tensorflow1"
            }
            Self::KotobaWhisper => "kotoba-tech/kotoba-whisper-v2.0",
            Self::BaiduAsr => "BaiduASR",
            Self::WhisperAsr => "WhisperASR",
        }
    }
}

impl fmt::Display for AsrModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EnumVariants for AsrModelId {
    const VARIANTS: &'static [(&'static str, &'static str)] = &[
        ("Paraformer", AsrModelId::Paraformer.as_str()),
        ("KotobaWhisper", AsrModelId::KotobaWhisper.as_str()),
        ("BaiduASR", AsrModelId::BaiduAsr.as_str()),
        ("WhisperASR", AsrModelId::WhisperAsr.as_str()),
    ];
}

/// Credentials for the Baidu ASR service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaiduAsrConfig {
    /// API key for the Baidu ASR service.
    pub api_key: String,
    /// Secret key for the Baidu ASR service.
    pub secret_key: String,
}

impl BaiduAsrConfig {
    pub(crate) fn from_value(raw: &Value, path: &str) -> Result<Self, AsrConfigError> {
        let map = as_table(raw, path)?;
        let mut cfg = Self::default();
        if let Some(v) = field(&map, "api_key", path)? {
            cfg.api_key = v;
        }
        if let Some(v) = field(&map, "secret_key", path)? {
            cfg.secret_key = v;
        }
        Ok(cfg)
    }
}

/// Settings for the OpenAI/Whisper ASR service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhisperAsrConfig {
    /// API key for the Whisper ASR service.
    pub api_key: String,
    /// API URL for the Whisper ASR service.
    pub api_url: String,
    /// Model ID to use. Currently only whisper-1 is available.
    pub model: String,
    /// Language of the input audio (ISO-639-1). Optional, improves accuracy.
    pub language: Option<String>,
    /// Optional text to guide the model's style or continue a previous
    /// audio segment.
    pub prompt: Option<String>,
    /// Sampling temperature between 0 and 1.
    pub temperature: f32,
    /// Transcript output format: json, text, srt, verbose_json or vtt.
    pub response_format: String,
}

impl Default for WhisperAsrConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: "https://api.openai.com/v1/audio/transcriptions".to_string(),
            model: "whisper-1".to_string(),
            language: None,
            prompt: None,
            temperature: 0.0,
            response_format: "json".to_string(),
        }
    }
}

impl WhisperAsrConfig {
    pub(crate) fn from_value(raw: &Value, path: &str) -> Result<Self, AsrConfigError> {
        let map = as_table(raw, path)?;
        let mut cfg = Self::default();
        if let Some(v) = field(&map, "api_key", path)? {
            cfg.api_key = v;
        }
        if let Some(v) = field(&map, "api_url", path)? {
            cfg.api_url = v;
        }
        if let Some(v) = field(&map, "model", path)? {
            cfg.model = v;
        }
        if let Some(v) = field(&map, "language", path)? {
            cfg.language = Some(v);
        }
        if let Some(v) = field(&map, "prompt", path)? {
            cfg.prompt = Some(v);
        }
        if let Some(v) = field(&map, "temperature", path)? {
            cfg.temperature = v;
        }
        if let Some(v) = field(&map, "response_format", path)? {
            cfg.response_format = v;
        }
        Ok(cfg)
    }
}

/// Configuration for the ASR pipeline stage.
///
/// Both provider blocks are always present; the provider dispatch only reads
/// the block matching `model_id`, and nothing enforces the other block to be
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsrPipelineConfig {
    /// Whether the stage is active.
    pub enabled: bool,
    /// Sample rate for audio input in Hz.
    pub sample_rate: u32,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample encoding of the audio data.
    pub format: AudioFormat,
    /// Which ASR backend/model to target.
    pub model_id: AsrModelId,
    /// URL for synchronous prediction requests.
    pub predict_url: String,
    /// URL for streaming prediction requests.
    pub stream_predict_url: String,
    /// Baidu credentials, read when `model_id` is `BaiduASR`.
    pub baidu_asr_config: BaiduAsrConfig,
    /// Whisper settings, read when `model_id` is `WhisperASR`.
    pub whisper_asr_config: WhisperAsrConfig,
}

impl Default for AsrPipelineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sample_rate: 16000,
            channels: 1,
            format: AudioFormat::Float32,
            model_id: AsrModelId::Paraformer,
            predict_url: "http://127.0.0.1:11000/asr/predict".to_string(),
            stream_predict_url: "http://127.0.0.1:11000/asr/stream-predict".to_string(),
            baidu_asr_config: BaiduAsrConfig::default(),
            whisper_asr_config: WhisperAsrConfig::default(),
        }
    }
}

impl AsrPipelineConfig {
    /// Stage key the orchestrator uses for this section in pipeline
    /// documents, env prefixes and file names.
    pub const STAGE: &'static str = "asr";

    /// Validates a raw, possibly partial config document.
    ///
    /// Omitted (or null) fields keep their declared defaults and unknown
    /// keys are ignored. Fails when a present value cannot be coerced into
    /// the declared field type or an enum field holds an unrecognized tag;
    /// the error names the offending field by its dotted path.
    pub fn from_value(raw: &Value) -> Result<Self, AsrConfigError> {
        let map = as_table(raw, Self::STAGE)?;
        let mut cfg = Self::default();
        if let Some(v) = field(&map, "enabled", "")? {
            cfg.enabled = v;
        }
        if let Some(v) = field(&map, "sample_rate", "")? {
            cfg.sample_rate = v;
        }
        if let Some(v) = field(&map, "channels", "")? {
            cfg.channels = v;
        }
        if let Some(v) = field(&map, "format", "")? {
            cfg.format = v;
        }
        if let Some(v) = field(&map, "model_id", "")? {
            cfg.model_id = v;
        }
        if let Some(v) = field(&map, "predict_url", "")? {
            cfg.predict_url = v;
        }
        if let Some(v) = field(&map, "stream_predict_url", "")? {
            cfg.stream_predict_url = v;
        }
        if let Some(v) = map.get("baidu_asr_config") {
            cfg.baidu_asr_config = BaiduAsrConfig::from_value(v, "baidu_asr_config")?;
        }
        if let Some(v) = map.get("whisper_asr_config") {
            cfg.whisper_asr_config = WhisperAsrConfig::from_value(v, "whisper_asr_config")?;
        }
        Ok(cfg)
    }
}
