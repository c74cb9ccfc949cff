pub mod client;
pub mod http;
pub mod types;

pub use client::{GenerationClient, GenerationError};
pub use http::HttpGenerationClient;
pub use types::{GenerationRequest, normalize_payload};
