// src/infrastructure/generation/openai.rs
use crate::application::ports::generation::{ContentProvider, ProviderError};
use crate::domain::generation::GeneratedContent;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

const SYSTEM_PROMPT: &str = "You are a professional content writer specializing in creating high-quality, SEO-optimized blog articles. Generate comprehensive, well-structured content that provides real value to readers.";
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.7;
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}

/// Provider client for `/chat/completions`. Stateless apart from the pooled HTTP client.
pub struct OpenAiContentProvider {
    client: Client,
    settings: OpenAiSettings,
}

impl OpenAiContentProvider {
    pub fn new(settings: OpenAiSettings) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn map_transport(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.settings.timeout)
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

impl fmt::Debug for OpenAiContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiContentProvider")
            .field("client", &"<reqwest::Client>")
            .field("settings", &self.settings)
            .finish()
    }
}

/// User prompt sent to the provider.
pub fn build_prompt(topic: &str, keywords: &[String], target_word_count: u32) -> String {
    let keywords = if keywords.is_empty() {
        "none".to_string()
    } else {
        keywords.join(", ")
    };

    format!(
        "Create a comprehensive article about: {topic}\n\
         \n\
         Target word count: {target_word_count}\n\
         Keywords to include: {keywords}\n\
         \n\
         Formatting requirements:\n\
         - Start with a single top-level heading (# Title)\n\
         - Include headings and subheadings\n\
         - Use bullet points and numbered lists where appropriate\n\
         - Integrate the keywords naturally\n\
         - End with a strong call-to-action\n\
         \n\
         Respond in markdown."
    )
}

#[async_trait]
impl ContentProvider for OpenAiContentProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(
        &self,
        topic: &str,
        keywords: &[String],
        target_word_count: u32,
    ) -> Result<GeneratedContent, ProviderError> {
        let prompt = build_prompt(topic, keywords, target_word_count);
        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| self.map_transport(err))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: text.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|err| ProviderError::Malformed(err.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(GeneratedContent::from_markdown(content, topic))
    }
}
