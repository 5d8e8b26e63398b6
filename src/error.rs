/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response decoding or protocol-shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Successful response that carried no usable completion text.
    #[error("no completion returned: {0}")]
    NoCompletion(String),
}
