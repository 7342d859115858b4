use serde_json::json;
use voxpipe_asr_config::{
    AsrConfigError, AsrModelId, AsrPipelineConfig, AudioFormat, WhisperAsrConfig,
};

#[test]
fn empty_document_yields_defaults() {
    let cfg = AsrPipelineConfig::from_value(&json!({})).unwrap();
    assert_eq!(cfg, AsrPipelineConfig::default());
    assert_eq!(cfg.sample_rate, 16000);
    assert_eq!(cfg.channels, 1);
    assert_eq!(cfg.format, AudioFormat::Float32);
    assert_eq!(cfg.model_id, AsrModelId::Paraformer);
    assert_eq!(cfg.predict_url, "http://127.0.0.1:11000/asr/predict");
    assert_eq!(
        cfg.stream_predict_url,
        "http://127.0.0.1:11000/asr/stream-predict"
    );
}

#[test]
fn provider_block_overrides_leave_the_other_block_default() {
    let cfg = AsrPipelineConfig::from_value(&json!({
        "model_id": "BaiduASR",
        "baidu_asr_config": { "api_key": "k1", "secret_key": "s1" }
    }))
    .unwrap();
    assert_eq!(cfg.model_id, AsrModelId::BaiduAsr);
    assert_eq!(cfg.baidu_asr_config.api_key, "k1");
    assert_eq!(cfg.baidu_asr_config.secret_key, "s1");
    assert_eq!(cfg.whisper_asr_config, WhisperAsrConfig::default());
}

#[test]
fn unknown_model_id_is_rejected_with_the_field_path() {
    let err = AsrPipelineConfig::from_value(&json!({ "model_id": "not-a-real-model" }))
        .unwrap_err();
    match err {
        AsrConfigError::Invalid {
            ref path,
            ref value,
            ..
        } => {
            assert_eq!(path, "model_id");
            assert!(value.contains("not-a-real-model"));
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("model_id"));
}

#[test]
fn unknown_format_is_rejected() {
    let err = AsrPipelineConfig::from_value(&json!({ "format": "int16" })).unwrap_err();
    assert_eq!(err.path(), Some("format"));
}

#[test]
fn non_integer_sample_rate_is_rejected() {
    let err = AsrPipelineConfig::from_value(&json!({ "sample_rate": "fast" })).unwrap_err();
    assert_eq!(err.path(), Some("sample_rate"));
}

#[test]
fn out_of_range_temperature_is_accepted() {
    // The range is documented, not enforced.
    let cfg = AsrPipelineConfig::from_value(&json!({
        "whisper_asr_config": { "temperature": 5.0 }
    }))
    .unwrap();
    assert_eq!(cfg.whisper_asr_config.temperature, 5.0);
}

#[test]
fn freeform_response_format_is_accepted() {
    let cfg = AsrPipelineConfig::from_value(&json!({
        "whisper_asr_config": { "response_format": "verbose_json" }
    }))
    .unwrap();
    assert_eq!(cfg.whisper_asr_config.response_format, "verbose_json");
}

#[test]
fn nested_type_errors_carry_the_dotted_path() {
    let err = AsrPipelineConfig::from_value(&json!({
        "whisper_asr_config": { "temperature": "warm" }
    }))
    .unwrap_err();
    assert_eq!(err.path(), Some("whisper_asr_config.temperature"));
}

#[test]
fn provider_section_must_be_a_table() {
    let err =
        AsrPipelineConfig::from_value(&json!({ "baidu_asr_config": "key" })).unwrap_err();
    assert_eq!(err.path(), Some("baidu_asr_config"));
}

#[test]
fn model_hub_values_and_tags_both_deserialize() {
    let by_value = AsrPipelineConfig::from_value(&json!({
        "model_id": "kotoba-tech/kotoba-whisper-v2.0"
    }))
    .unwrap();
    assert_eq!(by_value.model_id, AsrModelId::KotobaWhisper);

    let by_tag = AsrPipelineConfig::from_value(&json!({ "model_id": "KotobaWhisper" })).unwrap();
    assert_eq!(by_tag.model_id, AsrModelId::KotobaWhisper);
}

#[test]
fn unknown_keys_are_ignored() {
    let cfg = AsrPipelineConfig::from_value(&json!({
        "sample_rate": 48000,
        "bitrate": 128000
    }))
    .unwrap();
    assert_eq!(cfg.sample_rate, 48000);
}

#[test]
fn serialize_then_construct_round_trips() {
    let defaults = AsrPipelineConfig::default();
    let raw = serde_json::to_value(&defaults).unwrap();
    assert_eq!(AsrPipelineConfig::from_value(&raw).unwrap(), defaults);

    let mut tweaked = AsrPipelineConfig::default();
    tweaked.model_id = AsrModelId::WhisperAsr;
    tweaked.whisper_asr_config.api_key = "sk-test".to_string();
    tweaked.whisper_asr_config.language = Some("ja".to_string());
    tweaked.whisper_asr_config.temperature = 0.4;
    let raw = serde_json::to_value(&tweaked).unwrap();
    assert_eq!(AsrPipelineConfig::from_value(&raw).unwrap(), tweaked);
}
