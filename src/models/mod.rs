pub mod config;
pub mod protocol;

pub use config::{AppConfig, DefaultsConfig, ExtractConfig, LimitsConfig, ServerConfig, TaskConfig};
pub use protocol::{
    BackgroundParams, EffectParams, EncodedBuffer, RemapParams, RequestMessage, ResponseMessage,
    ResponseStatus, WireColor, WireRule,
};
