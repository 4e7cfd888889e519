//! AI assistant client — Gemini REST API (no vendor SDK)
//!
//! Two pass-through calls: summarize pasted text, and synthesize speech for
//! a summary. No caching, no retry, no streaming; a single failure is
//! terminal for that user action and is reported as-is. The composed
//! [`briefing`](AssistantClient::briefing) pipeline never attempts speech
//! when summarization already failed.

use base64::Engine;
use serde_json::{Value, json};
use shared::error::{AppError, AppResult};

use crate::config::Config;

const SUMMARY_MODEL: &str = "gemini-3-flash-preview";
const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const TTS_VOICE: &str = "Puck";

/// Synthesized speech payload, still base64-encoded for the wire
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub audio_base64: String,
    pub mime_type: String,
}

/// Result of the summarize-then-speak pipeline
#[derive(Debug, Clone)]
pub struct Briefing {
    pub summary: String,
    pub audio: SpeechAudio,
}

/// Thin client over the Gemini `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct AssistantClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl AssistantClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.gemini_api_key.clone(), config.gemini_base_url.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a concise professional summary (Spanish, matching the
    /// admin UI) of the pasted presentation text.
    pub async fn summarize(&self, text: &str) -> AppResult<String> {
        let resp = self.generate(SUMMARY_MODEL, summary_request(text)).await?;
        extract_text(&resp)
            .map(str::to_string)
            .ok_or_else(|| AppError::assistant_upstream("Summary response contained no text"))
    }

    /// Render text as synthesized speech; returns the base64 audio payload
    pub async fn synthesize_speech(&self, text: &str) -> AppResult<SpeechAudio> {
        let resp = self.generate(TTS_MODEL, speech_request(text)).await?;
        let (audio_base64, mime_type) = extract_audio(&resp)
            .ok_or_else(|| AppError::assistant_upstream("Speech response contained no audio"))?;

        // Upstream promises base64; reject a malformed payload here rather
        // than handing the UI an audio element that cannot play.
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&audio_base64)
            .map_err(|e| AppError::assistant_upstream(format!("Audio payload is not base64: {e}")))?;
        tracing::debug!(bytes = bytes.len(), mime = %mime_type, "Speech synthesized");

        Ok(SpeechAudio { audio_base64, mime_type })
    }

    /// Summarize, then speak the summary. A summarization failure aborts
    /// the pipeline; speech synthesis is never attempted.
    pub async fn briefing(&self, text: &str) -> AppResult<Briefing> {
        let summary = self.summarize(text).await?;
        let audio = self.synthesize_speech(&summary).await?;
        Ok(Briefing { summary, audio })
    }

    fn key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(AppError::assistant_not_configured)
    }

    async fn generate(&self, model: &str, body: Value) -> AppResult<Value> {
        let key = self.key()?;
        let url = format!(
            "{}/v1beta/models/{model}:generateContent?key={key}",
            self.base_url
        );

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::assistant_upstream(format!("Request to {model} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::assistant_upstream(format!(
                "{model} returned {status}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| AppError::assistant_upstream(format!("Invalid {model} response: {e}")))
    }
}

/// Request body for the summarization call
fn summary_request(text: &str) -> Value {
    let prompt = format!(
        "Resume el siguiente contenido de la presentación en un resumen \
         profesional y conciso en español:\n\n---\n{text}\n---"
    );
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}

/// Request body for the speech-synthesis call
fn speech_request(text: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": text }] }],
        "generationConfig": {
            "responseModalities": ["AUDIO"],
            "speechConfig": {
                "voiceConfig": {
                    "prebuiltVoiceConfig": { "voiceName": TTS_VOICE }
                }
            }
        }
    })
}

/// First candidate text, if the response carries any
fn extract_text(resp: &Value) -> Option<&str> {
    resp["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|t| !t.is_empty())
}

/// First candidate inline audio (base64 data + mime type)
fn extract_audio(resp: &Value) -> Option<(String, String)> {
    let inline = &resp["candidates"][0]["content"]["parts"][0]["inlineData"];
    let data = inline["data"].as_str().filter(|d| !d.is_empty())?;
    let mime = inline["mimeType"].as_str().unwrap_or("audio/mpeg");
    Some((data.to_string(), mime.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_summary_request_shape() {
        let body = summary_request("Texto de prueba");
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Texto de prueba"));
        assert!(prompt.contains("resumen"));
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_speech_request_shape() {
        let body = speech_request("Hola");
        assert_eq!(body["generationConfig"]["responseModalities"][0], "AUDIO");
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Puck"
        );
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hola");
    }

    #[test]
    fn test_extract_text() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Resumen listo" }] } }]
        });
        assert_eq!(extract_text(&resp), Some("Resumen listo"));
    }

    #[test]
    fn test_extract_text_empty_is_none() {
        let empty = json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        });
        assert_eq!(extract_text(&empty), None);
        assert_eq!(extract_text(&json!({})), None);
    }

    #[test]
    fn test_extract_audio() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{
                "inlineData": { "data": "AAAA", "mimeType": "audio/wav" }
            }] } }]
        });
        let (data, mime) = extract_audio(&resp).unwrap();
        assert_eq!(data, "AAAA");
        assert_eq!(mime, "audio/wav");
    }

    #[test]
    fn test_extract_audio_defaults_mime() {
        let resp = json!({
            "candidates": [{ "content": { "parts": [{
                "inlineData": { "data": "AAAA" }
            }] } }]
        });
        let (_, mime) = extract_audio(&resp).unwrap();
        assert_eq!(mime, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_unconfigured_client_is_service_unavailable() {
        let client = AssistantClient::new(None, "http://localhost:0");
        let err = client.summarize("hola").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssistantNotConfigured);

        let err = client.synthesize_speech("hola").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AssistantNotConfigured);
    }
}
