pub mod flow;

pub use flow::{ConfigError, EndpointConfig, FlowConfig, FlowVariant};
