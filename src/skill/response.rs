//! Outbound voice response and its JSON envelope.

use serde::Serialize;

/// What the assistant says back, and whether it keeps listening.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
}

impl SkillResponse {
    /// Speaks `text` and ends the session.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            speech: Some(text.into()),
            reprompt: None,
        }
    }

    /// Keeps the session open, repeating `text` if the user stays silent.
    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    /// An empty response, for requests that expect no reply.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn should_end_session(&self) -> bool {
        self.reprompt.is_none()
    }

    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope {
            version: "1.0",
            response: ResponseBody {
                output_speech: self.speech.as_deref().map(OutputSpeech::plain),
                reprompt: self.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::plain(text),
                }),
                should_end_session: self.should_end_session(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: &str) -> Self {
        Self {
            kind: "PlainText",
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speak_envelope() {
        let envelope = SkillResponse::speak("Goodbye!").to_envelope();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": {"type": "PlainText", "text": "Goodbye!"},
                    "shouldEndSession": true
                }
            })
        );
    }

    #[test]
    fn test_ask_keeps_session_open() {
        let response = SkillResponse::speak("Which stop?").ask("Which stop?");
        assert!(!response.should_end_session());

        let value = serde_json::to_value(response.to_envelope()).unwrap();
        assert_eq!(value["response"]["reprompt"]["outputSpeech"]["text"], "Which stop?");
        assert_eq!(value["response"]["shouldEndSession"], false);
    }

    #[test]
    fn test_empty_envelope() {
        let value = serde_json::to_value(SkillResponse::empty().to_envelope()).unwrap();
        assert_eq!(value, json!({"version": "1.0", "response": {"shouldEndSession": true}}));
    }
}
