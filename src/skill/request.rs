//! Inbound voice request envelope.
//!
//! Only the parts the skill dispatches on are modelled; session, context and
//! the remaining request fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestEnvelope {
    pub request: SkillRequest,
}

/// The request kinds the skill distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest,
    IntentRequest { intent: Intent },
    SessionEndedRequest,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(
            name.into(),
            Slot {
                value: Some(value.into()),
            },
        );
        self
    }

    /// Value of slot `name`, if the user filled it.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name)?.value.as_deref()
    }
}

/// Intents the skill knows how to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillIntent {
    CheckSchoolBuses,
    CheckStationBuses,
    CheckBoth,
    Help,
    CancelOrStop,
    Other(String),
}

impl From<&str> for SkillIntent {
    fn from(name: &str) -> Self {
        match name {
            "CheckSchoolBusesIntent" => Self::CheckSchoolBuses,
            "CheckStationBusesIntent" => Self::CheckStationBuses,
            "CheckBothIntent" => Self::CheckBoth,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.CancelIntent" | "AMAZON.StopIntent" => Self::CancelOrStop,
            other => Self::Other(other.to_string()),
        }
    }
}
