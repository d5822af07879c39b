use serde::Serialize;

/// Marker the prompt ends with; the sanitizer splits the raw model
/// output on the last occurrence of this label.
pub const TRANSLATION_LABEL: &str = "한국어:";

const SYSTEM_PROMPT: &str = "당신은 일본어를 한국어로 번역하는 전문가입니다. \
    주어진 일본어를 자연스러운 한국어로 번역해주세요. \
    번역 결과만 출력하고 다른 설명은 하지 마세요.";

/// Request body for the Ollama `/api/generate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratePayload {
    pub model: String,
    pub prompt: String,
    pub system: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Fixed generation options biased toward literal, deterministic output.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub num_ctx: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            num_ctx: 4096,
        }
    }
}

impl GeneratePayload {
    pub fn new(japanese_text: &str, model: &str) -> Self {
        Self {
            model: model.to_string(),
            prompt: build_prompt(japanese_text),
            system: SYSTEM_PROMPT.to_string(),
            stream: false,
            options: GenerateOptions::default(),
        }
    }
}

fn build_prompt(japanese_text: &str) -> String {
    format!(
        "다음 일본어를 한국어로 번역해주세요. 번역 결과만 출력하세요.\n\n일본어: {}\n{}",
        japanese_text, TRANSLATION_LABEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_source_and_ends_with_label() {
        let payload = GeneratePayload::new("おはようございます", "gemma2:9b");
        assert!(payload.prompt.contains("おはようございます"));
        assert!(payload.prompt.ends_with(TRANSLATION_LABEL));
    }

    #[test]
    fn streaming_is_disabled() {
        let payload = GeneratePayload::new("こんにちは", "gemma2:9b");
        assert!(!payload.stream);
    }

    #[test]
    fn serializes_to_ollama_body() {
        let payload = GeneratePayload::new("こんにちは", "gemma2:9b");
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["model"], "gemma2:9b");
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["temperature"], 0.7);
        assert_eq!(body["options"]["top_p"], 0.9);
        assert_eq!(body["options"]["num_ctx"], 4096);
    }
}
