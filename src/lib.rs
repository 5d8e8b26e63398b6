//! `codegen-http` is an async HTTP client for OpenAI-compatible chat
//! completion APIs.
//!
//! The crate wraps the `/v1/chat/completions` endpoint with ergonomic methods:
//! - [`CodegenClient::chat`]
//! - [`CodegenClient::generate`]
//!
//! Transient failures (transport errors, 429, 5xx) are retried with capped
//! exponential backoff plus jitter; client errors (400/401/403) fail fast.

mod backoff;
mod client;
mod decode;
mod error;
mod message;
mod options;
mod types;
mod wire;

pub use client::{chat_completions_url, CodegenClient};
pub use error::CodegenError;
pub use message::{ChatMessage, GenerationParams, Role};
pub use options::ClientOptions;
pub use types::{Completion, Usage};

pub type Result<T> = std::result::Result<T, CodegenError>;
