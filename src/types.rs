/// Decoded chat completion, taken from the first choice of the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Generated message text.
    pub content: String,
    /// Why generation stopped, when reported (e.g. `stop`, `length`).
    pub finish_reason: Option<String>,
    /// Model that served the request, when reported.
    pub model: Option<String>,
    /// Token accounting, when reported.
    pub usage: Option<Usage>,
}

/// Token usage reported by the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}
