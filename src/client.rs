use std::fmt;
use std::time::Duration;

use reqwest::{header, StatusCode};
use tokio::time::sleep;

use crate::{
    backoff, decode::decode_completion, wire, ChatMessage, ClientOptions, CodegenError,
    Completion, GenerationParams, Result,
};

/// Formats a base URL into the canonical chat completions URL.
///
/// Example: `"https://api.openai.com"` → `"https://api.openai.com/v1/chat/completions"`
pub fn chat_completions_url(base_url: &str) -> String {
    format!("{}/v1/chat/completions", base_url.trim().trim_end_matches('/'))
}

#[derive(Clone)]
/// HTTP client for an OpenAI-compatible chat completions endpoint.
pub struct CodegenClient {
    http: reqwest::Client,
    completions_url: String,
    token: String,
    options: ClientOptions,
}

impl fmt::Debug for CodegenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodegenClient")
            .field("completions_url", &self.completions_url)
            .field("token", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl CodegenClient {
    /// Creates a client with a raw authorization header value.
    ///
    /// The credential is injected here and held for the client's lifetime;
    /// no code path reads it from ambient process state.
    pub fn new(completions_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new_raw_auth(completions_url, token)
    }

    /// Creates a client with a full raw authorization value.
    ///
    /// Example: `"Bearer <token>"` or any custom scheme.
    pub fn new_raw_auth(
        completions_url: impl Into<String>,
        authorization: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            completions_url: completions_url.into(),
            token: authorization.into(),
            options: ClientOptions::default(),
        }
    }

    /// Creates a client from a bearer token.
    ///
    /// If the token is missing the `Bearer ` prefix, it is added automatically.
    pub fn new_bearer(completions_url: impl Into<String>, token: impl AsRef<str>) -> Self {
        let authorization = normalize_bearer_authorization(token.as_ref());
        Self::new_raw_auth(completions_url, authorization)
    }

    /// Creates a client from an API **base URL** and a bearer token.
    ///
    /// The completions URL is derived automatically:
    /// `<base_url>/v1/chat/completions`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use codegen_http::CodegenClient;
    ///
    /// let client = CodegenClient::from_base_url("https://api.openai.com", "my-token");
    /// ```
    pub fn from_base_url(base_url: impl AsRef<str>, token: impl AsRef<str>) -> Self {
        let url = chat_completions_url(base_url.as_ref());
        Self::new_bearer(url, token)
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` — access token (Bearer prefix optional)
    /// - `OPENAI_BASE_URL` — API base URL, defaulting to
    ///   `https://api.openai.com` when unset
    ///
    /// Returns an error if the token is missing or empty. This is a
    /// convenience shell around [`CodegenClient::from_base_url`]; prefer the
    /// explicit constructors when credentials come from configuration.
    pub fn from_env() -> std::result::Result<Self, String> {
        let token = std::env::var("OPENAI_API_KEY")
            .map_err(|_| "missing OPENAI_API_KEY environment variable".to_owned())?;
        if token.trim().is_empty() {
            return Err("OPENAI_API_KEY is set but empty".to_owned());
        }
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_owned());
        if base_url.trim().is_empty() {
            return Err("OPENAI_BASE_URL is set but empty".to_owned());
        }
        Ok(Self::from_base_url(base_url, token))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Requests a chat completion and returns the first decoded choice.
    pub async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: GenerationParams,
    ) -> Result<Completion> {
        let payload = wire::ChatRequest {
            model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };
        let response = self.send_with_retry(&payload).await?;
        decode_completion(response)
    }

    /// Generates a code snippet for `prompt` and returns the trimmed text of
    /// the first choice.
    ///
    /// Wraps the prompt in a fixed system/user message pair; use
    /// [`CodegenClient::chat`] for full control over the conversation.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let messages = [
            ChatMessage::system("You are a helpful assistant that writes code snippets."),
            ChatMessage::user(prompt),
        ];
        let completion = self
            .chat(model, &messages, GenerationParams::default())
            .await?;
        Ok(completion.content.trim().to_owned())
    }

    /// Issues the request, retrying transient failures.
    ///
    /// One attempt is outstanding at a time; the caller is suspended during
    /// each attempt and each backoff delay. The same serialized payload is
    /// re-sent verbatim on every attempt — the remote endpoint may see the
    /// request more than once.
    async fn send_with_retry(&self, payload: &wire::ChatRequest<'_>) -> Result<wire::ChatResponse> {
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            let response = self
                .http
                .post(&self.completions_url)
                .header(header::AUTHORIZATION, &self.token)
                .header(header::CONTENT_TYPE, "application/json")
                .timeout(Duration::from_millis(self.options.timeout_ms))
                .json(payload)
                .send()
                .await;

            // Reading the body can still fail at the transport level, so fold
            // that case into the transport arm before classifying the status.
            let outcome = match response {
                Ok(response) => {
                    let status = response.status();
                    response.text().await.map(|body| (status, body))
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok((status, body)) => {
                    if status.is_success() {
                        return serde_json::from_str::<wire::ChatResponse>(&body).map_err(|err| {
                            CodegenError::Decode(format!(
                                "invalid completion response JSON: {err}; body: {body}"
                            ))
                        });
                    }

                    if should_retry_status(status) && attempt < self.options.max_attempts {
                        self.wait_before_retry(attempt).await;
                        continue;
                    }

                    return Err(CodegenError::Http {
                        status: status.as_u16(),
                        body,
                    });
                }
                Err(err) => {
                    if attempt < self.options.max_attempts {
                        self.wait_before_retry(attempt).await;
                        continue;
                    }
                    return Err(CodegenError::Transport(err));
                }
            }
        }
    }

    /// Sleeps for the backoff delay after `attempts_made` failed tries.
    async fn wait_before_retry(&self, attempts_made: usize) {
        let delay = backoff::retry_delay(&self.options, attempts_made);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "retrying completion request after {} ms (attempt {})",
            delay.as_millis(),
            attempts_made
        );

        sleep(delay).await;
    }
}

/// Retryable statuses: rate limiting and server-side transience. Client
/// errors (400/401/403) and anything else non-success are terminal — the
/// identical request cannot succeed on retry.
fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn normalize_bearer_authorization(token: &str) -> String {
    let trimmed = token.trim();
    let prefix = trimmed.get(..7);
    if prefix.is_some_and(|value| value.eq_ignore_ascii_case("bearer ")) {
        trimmed.to_owned()
    } else {
        format!("Bearer {trimmed}")
    }
}
