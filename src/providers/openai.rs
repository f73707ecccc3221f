use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Provider;
use crate::errors::ProviderError;

/// Client for OpenAI-compatible chat completion APIs (OpenAI, DeepSeek)
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL, e.g. "https://api.deepseek.com/v1"
    endpoint: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
    /// Optional rate limit in requests per minute
    rate_limit: Option<u32>,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total number of tokens
    pub total_tokens: u32,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    pub message: ChatMessage,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// The completion choices
    pub choices: Vec<ChatChoice>,
    /// Token usage information, when the API reports it
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl ChatRequest {
    /// Create a new chat request for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage { role: role.into(), content: content.into() });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

impl OpenAI {
    /// Create a new client with default retry behavior
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, endpoint, 120, 3, 1000, None)
    }

    /// Create a new client with explicit timeout, retry and rate limit settings
    pub fn new_with_config(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
        rate_limit: Option<u32>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            max_retries,
            backoff_base_ms,
            rate_limit,
        }
    }

    /// Chat-completions URL for the configured endpoint
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }

    /// Complete a chat request with retry and exponential backoff.
    ///
    /// Server errors, rate limiting and network failures are retried;
    /// client errors are returned immediately.
    pub async fn complete_chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let url = self.completions_url();

        let mut attempt = 0;
        let mut last_error: Option<ProviderError> = None;

        while attempt <= self.max_retries {
            // Space requests out when a client-side rate limit is configured
            if let Some(rate_limit) = self.rate_limit {
                if rate_limit > 0 {
                    let delay_ms = 60_000 / u64::from(rate_limit);
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }

            let response_result = self
                .client
                .post(&url)
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", self.api_key))
                .json(&request)
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json::<ChatResponse>().await.map_err(|e| {
                            ProviderError::ParseError(format!(
                                "Failed to parse chat completion response: {}",
                                e
                            ))
                        });
                    }

                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to get error response text".to_string());

                    if status.as_u16() == 429 {
                        // Rate limited - retry after backoff
                        last_error = Some(ProviderError::RateLimitExceeded(error_text.clone()));
                        error!(
                            "API rate limited ({}): {} - attempt {}/{}",
                            status,
                            error_text,
                            attempt + 1,
                            self.max_retries + 1
                        );
                    } else if status.as_u16() == 401 || status.as_u16() == 403 {
                        // Authentication problem - retrying won't help
                        error!("API authentication error ({}): {}", status, error_text);
                        return Err(ProviderError::AuthenticationError(error_text));
                    } else if status.is_server_error() {
                        // Server error - can retry
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text.clone(),
                        });
                        error!(
                            "API error ({}): {} - attempt {}/{}",
                            status,
                            error_text,
                            attempt + 1,
                            self.max_retries + 1
                        );
                    } else {
                        // Client error - don't retry
                        error!("API error ({}): {}", status, error_text);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    last_error = Some(ProviderError::ConnectionError(e.to_string()));
                    error!(
                        "API network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                }
            }

            attempt += 1;

            // If we have more retries left, wait with exponential backoff
            if attempt <= self.max_retries {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }

    /// Extract the completion text from a response
    pub fn extract_text_from_response(response: &ChatResponse) -> String {
        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for OpenAI {
    type Request = ChatRequest;
    type Response = ChatResponse;

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        self.complete_chat(request).await
    }

    fn extract_text(response: &ChatResponse) -> String {
        Self::extract_text_from_response(response)
    }
}
