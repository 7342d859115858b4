//! Operator-facing field documentation, rendered from the schema itself.

use crate::schema::{AsrModelId, AudioFormat};

/// A closed string enumeration whose members can be listed for docs.
pub trait EnumVariants {
    /// `(tag, wire value)` pairs in declaration order.
    const VARIANTS: &'static [(&'static str, &'static str)];
}

/// Renders the member list of an enumeration as a markdown bullet list.
pub fn enum_markdown<E: EnumVariants>() -> String {
    let mut doc = String::from("Available options:");
    for (tag, value) in E::VARIANTS {
        doc.push_str(&format!("\n- `{tag}`: `{value}`"));
    }
    doc
}

/// Returns the description of a config field, for help/introspection
/// tooling.
///
/// Accepts top-level field names and dotted provider sub-fields
/// (`"whisper_asr_config.model"`). Descriptions of enum-typed fields embed
/// the member list rendered from the enumeration itself, so a new variant
/// shows up here without touching this module.
pub fn describe_field(name: &str) -> Option<String> {
    let doc = match name {
        "enabled" => "Whether the ASR stage is active.".to_string(),
        "sample_rate" => "The sample rate for audio input.".to_string(),
        "channels" => "The number of audio channels.".to_string(),
        "format" => format!(
            "The format of the audio data. {}",
            enum_markdown::<AudioFormat>()
        ),
        "model_id" => format!(
            "The ID of the model used for ASR.\n{}",
            enum_markdown::<AsrModelId>()
        ),
        "predict_url" => "The URL for ASR prediction requests.".to_string(),
        "stream_predict_url" => "The URL for streaming ASR prediction requests.".to_string(),
        "baidu_asr_config" => format!(
            "Baidu ASR config. Only edit it when you set `model_id` to `{}`.\n\
             For more details please see the [documents](https://cloud.baidu.com/doc/SPEECH/s/qlcirqhz0).",
            AsrModelId::BaiduAsr
        ),
        "whisper_asr_config" => format!(
            "Whisper ASR config. Only edit it when you set `model_id` to `{}`.\n\
             For more details please see the [documents](https://zhizengzeng.com/docs/audio).",
            AsrModelId::WhisperAsr
        ),
        "baidu_asr_config.api_key" => "The API key for the Baidu ASR service.".to_string(),
        "baidu_asr_config.secret_key" => "The secret key for the Baidu ASR service.".to_string(),
        "whisper_asr_config.api_key" => {
            "The API key for the OpenAI/Whisper ASR service.".to_string()
        }
        "whisper_asr_config.api_url" => "The API URL for the Whisper ASR service.".to_string(),
        "whisper_asr_config.model" => {
            "The model ID to use. Currently only whisper-1 is available.".to_string()
        }
        "whisper_asr_config.language" => {
            "The language of the input audio in ISO-639-1 format. Optional, but improves accuracy."
                .to_string()
        }
        "whisper_asr_config.prompt" => {
            "Optional text to guide the model's style or to continue a previous audio segment."
                .to_string()
        }
        "whisper_asr_config.temperature" => {
            "Sampling temperature between 0 and 1. Higher values make the output more random."
                .to_string()
        }
        "whisper_asr_config.response_format" => {
            "The format of the transcript output. Options: json, text, srt, verbose_json, vtt."
                .to_string()
        }
        _ => return None,
    };
    Some(doc)
}
