// src/services/ai.rs
//
// Client for the external AI text-generation service. The service is an
// opaque collaborator reached over HTTP; this module only shapes requests
// and unwraps responses.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AiConfig {
    /// Reads configuration from the environment. Returns None when no API
    /// key is set, in which case assistant endpoints respond 503.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok()?;
        Some(Self {
            api_key,
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
        })
    }
}

/// What the generated text is for; selects the system prompt.
#[derive(Debug, Clone, Copy)]
pub enum TextPurpose {
    ChatAssistant,
    ResumeAnalysis,
    ResumeEnhancement,
}

impl TextPurpose {
    fn system_prompt(&self) -> &'static str {
        match self {
            TextPurpose::ChatAssistant => {
                "You are a career assistant helping job seekers with job search, skill development, and career planning. Provide clear, accurate, and encouraging answers."
            }
            TextPurpose::ResumeAnalysis => {
                "You are a professional resume analyst. Analyze the provided resume and identify EXACTLY 4 specific areas for improvement. Focus on missing quantifiable metrics, weak action verbs, missing ATS keywords, and a missing or weak professional summary. Return ONLY a JSON array of 4 short, actionable improvements."
            }
            TextPurpose::ResumeEnhancement => {
                "You are an expert resume writer. Rewrite the provided resume applying the listed improvements. Keep all factual content truthful, strengthen the language, and return only the rewritten resume text."
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Fallback improvement list used when the analysis response cannot be
/// parsed as a JSON array (mirrors the dashboard's behavior).
const FALLBACK_IMPROVEMENTS: [&str; 4] = [
    "Added quantifiable metrics and achievements to all experiences",
    "Strengthened action verbs and professional language throughout",
    "Optimized with ATS-friendly keywords for your industry",
    "Created compelling professional summary showcasing your value",
];

#[derive(Debug)]
pub struct AiService {
    client: Client,
    config: Option<AiConfig>,
}

impl AiService {
    pub fn new(client: Client, config: Option<AiConfig>) -> Self {
        Self { client, config }
    }

    pub fn from_env(client: Client) -> Self {
        Self::new(client, AiConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Single-shot text generation with a purpose-specific system prompt.
    pub async fn generate_text(
        &self,
        purpose: TextPurpose,
        prompt: &str,
    ) -> Result<String, AiError> {
        let config = self.config.as_ref().ok_or(AiError::NotConfigured)?;

        let request = ChatCompletionRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: purpose.system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: 0.7,
            max_tokens: 2000,
        };

        debug!(model = %config.model, purpose = ?purpose, "Sending AI text generation request");

        let url = format!(
            "{}/v1/chat/completions",
            config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "AI API request failed");
            return Err(AiError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AiError::InvalidResponse("response contains no choices".to_string()))
    }

    /// Analyze a resume and return four improvement points. An unparseable
    /// model response falls back to the canned list instead of failing.
    pub async fn analyze_resume(&self, resume_text: &str) -> Result<Vec<String>, AiError> {
        let prompt = format!(
            "Analyze this resume and identify 4 specific improvements:\n\n{}\n\nReturn JSON array: [\"improvement 1\", \"improvement 2\", \"improvement 3\", \"improvement 4\"]",
            resume_text
        );

        let raw = self
            .generate_text(TextPurpose::ResumeAnalysis, &prompt)
            .await?;

        Ok(parse_improvements(&raw))
    }

    /// Rewrite a resume applying the given improvements.
    pub async fn enhance_resume(
        &self,
        resume_text: &str,
        improvements: &[String],
    ) -> Result<String, AiError> {
        let prompt = format!(
            "Improvements to apply:\n{}\n\nResume:\n{}",
            improvements
                .iter()
                .map(|i| format!("- {}", i))
                .collect::<Vec<_>>()
                .join("\n"),
            resume_text
        );

        self.generate_text(TextPurpose::ResumeEnhancement, &prompt)
            .await
    }
}

/// Parse the analysis response as a JSON string array, falling back to the
/// canned improvement list when the model returned something else.
pub fn parse_improvements(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw.trim())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_IMPROVEMENTS.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_improvements_valid_array() {
        let parsed = parse_improvements(r#"["a", "b", "c", "d"]"#);
        assert_eq!(parsed, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_parse_improvements_falls_back_on_prose() {
        let parsed = parse_improvements("Here are some ideas: 1) do X 2) do Y");
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[0], FALLBACK_IMPROVEMENTS[0]);
    }

    #[test]
    fn test_parse_improvements_falls_back_on_empty_array() {
        let parsed = parse_improvements("[]");
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_unconfigured_service() {
        let service = AiService::new(Client::new(), None);
        assert!(!service.is_configured());
    }
}
