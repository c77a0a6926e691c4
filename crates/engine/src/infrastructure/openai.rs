//! Narrator backed by any OpenAI-compatible chat completions endpoint
//! (LM Studio, Ollama, vLLM, the hosted API).

use async_trait::async_trait;
use dragonbane_domain::Character;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{NarrativeSummary, Narrator, NarratorError};

/// Default server for `/v1/chat/completions` calls.
pub const DEFAULT_OPENAI_SERVER: &str = "http://192.168.86.220:1234";

/// Default model.
pub const DEFAULT_OPENAI_MODEL: &str = "deepseek-r1-distill-qwen-7b";

const SYSTEM_PROMPT: &str = "You are a creative fantasy story generator.";

/// Client for an OpenAI-compatible chat API
#[derive(Clone)]
pub struct OpenAiNarrator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiNarrator {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        // Reasoning models think out loud before answering; give them time
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Narrator for OpenAiNarrator {
    async fn describe(&self, character: &Character) -> Result<NarrativeSummary, NarratorError> {
        let api_request = ChatRequest {
            model: self.model.clone(),
            stream: false,
            messages: vec![
                ChatMessage::new("system", SYSTEM_PROMPT),
                ChatMessage::new("user", build_prompt(character)),
            ],
        };

        let mut request = self.client.post(self.endpoint()).json(&api_request);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        tracing::debug!(model = %self.model, character_id = %character.id, "Requesting narrative");

        let response = request
            .send()
            .await
            .map_err(|e| NarratorError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| NarratorError::RequestFailed(e.to_string()))?;
            return Err(NarratorError::RequestFailed(format!(
                "{}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| NarratorError::InvalidResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| NarratorError::InvalidResponse("No choices in response".to_string()))?;

        parse_summary(&content)
    }
}

/// User message asking for a JSON summary of the character.
pub fn build_prompt(character: &Character) -> String {
    format!(
        r#"I'm going to give you the details of a character for the tabletop roleplaying game Dragonbane, and you are going to create the missing details from this information.
Create a JSON object with the following keys:
- "name": a name for this character that suits their kin and the background you create,
- "appearance": a description of this character's appearance based on the information provided,
- "background": a plausible background for this character based on the information provided

Your output must be valid JSON in the following format:

{{
    "name": "Firstname Lastname",
    "appearance": "A one-paragraph description of the character's appearance.",
    "background": "A one-paragraph description of the character's background."
}}

Only respond with this JSON.

--

Here is the character:
{}"#,
        character.description()
    )
}

/// Pull a [`NarrativeSummary`] out of raw model output.
///
/// Anything up to a closing `</think>` tag is reasoning and is dropped, as are
/// markdown code fences. The outermost `{...}` is decoded.
pub fn parse_summary(raw: &str) -> Result<NarrativeSummary, NarratorError> {
    let answer = match raw.rfind("</think>") {
        Some(pos) => &raw[pos + "</think>".len()..],
        None => raw,
    };
    let cleaned = answer.replace("```json", "").replace("```", "");

    let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) else {
        return Err(NarratorError::Unparseable(
            "no JSON object in response".to_string(),
        ));
    };
    if end < start {
        return Err(NarratorError::Unparseable(
            "no JSON object in response".to_string(),
        ));
    }

    let summary: NarrativeSummary = serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| NarratorError::Unparseable(e.to_string()))?;
    if summary.name.trim().is_empty() {
        return Err(NarratorError::Unparseable("summary has no name".to_string()));
    }
    Ok(summary)
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    stream: bool,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize, Default)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let summary = parse_summary(
            r#"{"name": "Brinna Ashdown", "appearance": "Tall.", "background": "Raised by bears."}"#,
        )
        .unwrap();
        assert_eq!(summary.name, "Brinna Ashdown");
        assert_eq!(summary.appearance, "Tall.");
        assert_eq!(summary.background, "Raised by bears.");
    }

    #[test]
    fn drops_reasoning_and_fences() {
        let raw = "<think>They are a dwarf, so {something} stout.</think>\n```json\n{\"name\": \"Dorn\", \"appearance\": \"Stout.\", \"background\": \"Miner.\"}\n```";
        let summary = parse_summary(raw).unwrap();
        assert_eq!(summary.name, "Dorn");
        assert_eq!(summary.background, "Miner.");
    }

    #[test]
    fn takes_outermost_object_around_chatter() {
        let raw = "Sure! Here you go: {\"name\": \"Vel\", \"appearance\": \"A {curious} look\", \"background\": \"\"} Enjoy.";
        let summary = parse_summary(raw).unwrap();
        assert_eq!(summary.name, "Vel");
        assert_eq!(summary.appearance, "A {curious} look");
        assert!(summary.background.is_empty());
    }

    #[test]
    fn rejects_output_without_json() {
        assert!(matches!(
            parse_summary("I cannot help with that."),
            Err(NarratorError::Unparseable(_))
        ));
        assert!(matches!(
            parse_summary("} backwards {"),
            Err(NarratorError::Unparseable(_))
        ));
        assert!(matches!(
            parse_summary(r#"{"name": ""}"#),
            Err(NarratorError::Unparseable(_))
        ));
    }

    #[test]
    fn new_trims_url_and_key() {
        let narrator = OpenAiNarrator::new("http://localhost:1234/", "  sk-test \n", "test-model");
        assert_eq!(narrator.endpoint(), "http://localhost:1234/v1/chat/completions");
        assert_eq!(narrator.api_key, "sk-test");
        assert_eq!(narrator.model, "test-model");
    }

    #[test]
    fn request_serializes_non_streaming() {
        let request = ChatRequest {
            model: "m".into(),
            stream: false,
            messages: vec![ChatMessage::new("system", SYSTEM_PROMPT)],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
    }
}
