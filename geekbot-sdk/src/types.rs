// Wire types for the standup reporting API, shared between the client
// and the terminal front-end.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recurring standup as returned by `GET /v1/standups`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standup {
    /// Unique identifier for the standup
    pub id: i64,
    /// Display name of the standup
    pub name: String,
    /// Questions to answer, in the order the service defines them
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single question within a standup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier for the question
    pub id: i64,
    /// The question text to display to the user
    pub text: String,
    /// Hex color (without leading '#') the dashboard associates with
    /// this question; used to tint the prompt marker
    #[serde(default)]
    pub color: String,
    /// Input discipline expected for the answer
    pub answer_type: AnswerType,
    /// Possible answers, populated only for multiple choice questions
    #[serde(default)]
    pub answer_choices: Vec<String>,
}

/// Input discipline of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    /// Free text, multiple lines
    Text,
    /// A single non-negative integer
    Numeric,
    /// Exactly one of the question's `answer_choices`
    MultipleChoice,
    /// Anything this client does not recognize. Kept as a variant so a
    /// listing with a new discipline still deserializes; collection
    /// fails fast when it reaches one of these.
    #[serde(other)]
    Unknown,
}

/// One answer, keyed by question id inside a [`Report`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The answer text, already validated for the question's discipline
    pub text: String,
}

/// Request body for `POST /v1/reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The standup being reported on
    pub standup_id: i64,
    /// One answer per question of that standup
    pub answers: HashMap<i64, Answer>,
}

impl Report {
    pub fn new(standup_id: i64, answers: HashMap<i64, Answer>) -> Self {
        Self {
            standup_id,
            answers,
        }
    }
}

/// Success body of `POST /v1/reports`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportReceipt {
    /// Epoch seconds at which the report was persisted. Zero or negative
    /// means the service accepted the request but did not save the
    /// report; that is a designed outcome, not an error.
    pub done_at: i64,
    /// Channel the report was posted to
    #[serde(default)]
    pub channel: String,
}

impl ReportReceipt {
    /// Whether the service actually persisted the report
    pub fn saved(&self) -> bool {
        self.done_at > 0
    }
}
