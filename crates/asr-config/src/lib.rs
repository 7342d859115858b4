//! Configuration schema for the voxpipe ASR pipeline stage.

mod construct;
pub mod describe;
pub mod error;
mod loader;
pub mod schema;

pub use describe::{describe_field, enum_markdown, EnumVariants};
pub use error::AsrConfigError;
pub use schema::{AsrModelId, AsrPipelineConfig, AudioFormat, BaiduAsrConfig, WhisperAsrConfig};
