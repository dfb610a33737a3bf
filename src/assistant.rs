//! Keyword-matched assistant
//!
//! The "M-Pulse AI" chat is a canned responder: the query is lower-cased and
//! scanned against a fixed keyword table, and the response of the first
//! matching keyword is returned, falling back to a default message. Matching
//! is longest-keyword-first (ties broken lexicographically), so a query that
//! mentions several keywords resolves to the most specific entry rather than
//! whichever happened to come first in the table.
//!
//! The responder is a total, stateless, deterministic function. Conversation
//! history lives in [`Conversation`], owned by the caller; simulated
//! "thinking" latency is the API layer's concern, not the responder's.

use serde::{Deserialize, Serialize};

/// Greeting shown as the first turn of every conversation
pub const GREETING: &str = "Hello! I'm M-Pulse AI. I can help you with outbreak \
    predictions, hospital resource allocation, and public health insights. Ask me anything!";

/// Fallback when no keyword matches
pub const DEFAULT_RESPONSE: &str = "I can help with outbreak predictions, hospital \
    capacity, resource allocation, and public advisories. Try asking \"Predict dengue \
    risk\" or \"Show hospitals with high load\".";

/// Keyword table, ordered longest keyword first, ties lexicographic.
///
/// `respond` scans this in order and returns the first hit, so the ordering
/// is the priority rule.
const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    (
        "advisory",
        "Three advisories are currently active: a high-severity dengue warning for \
         Kurla, Sion and Dharavi, an air quality alert, and a waterlogging advisory. \
         Open the Advisories view to broadcast them in English, Hindi, or Marathi.",
    ),
    (
        "allocate",
        "Running allocation analysis: Sion Hospital is at high alert with 85 of 1400 \
         beds free. Recommendation: move 15 doctors to Sion Hospital and free 8 beds \
         at Cooper Hospital for overflow.",
    ),
    (
        "forecast",
        "The 7-day forecast projects daily case counts from current rainfall, AQI, \
         and event density readings. Run it from the Forecaster view; confidence is \
         reported per day.",
    ),
    (
        "hospital",
        "The network has 6 hospitals under command. Sion and JJ are at high alert \
         with bed availability under 10%. KEM and Nair are moderate; Cooper and \
         Rajawadi have spare capacity.",
    ),
    (
        "malaria",
        "Malaria transmission tracks standing water after sustained rainfall. Vector \
         control teams should prioritise wards with waterlogging reports; watch the \
         rainfall reading on the dashboard.",
    ),
    (
        "monsoon",
        "During monsoon weeks, expect elevated vector-borne and waterborne disease \
         risk. The generator weighs rainfall heavily: above 100 mm the risk tier \
         goes high.",
    ),
    (
        "predict",
        "Based on current rainfall and AQI readings, the model projects elevated \
         outbreak risk over the next 7 days. Open the Forecaster view for the \
         day-by-day case projection and confidence.",
    ),
    (
        "dengue",
        "Dengue risk rises sharply after heavy rainfall. Current conditions suggest \
         monitoring Kurla, Sion and Dharavi wards; a high-severity dengue advisory \
         is already active there.",
    ),
    (
        "doctor",
        "There are 1,620 doctors on duty across the network. Staffing is thinnest \
         relative to load at Sion Hospital; use auto-allocation for a redeployment \
         recommendation.",
    ),
    (
        "rain",
        "Rainfall is the strongest single driver of outbreak risk in the model: \
         above 60 mm the risk tier is at least moderate, above 100 mm it is high \
         with a dengue/malaria label.",
    ),
    (
        "risk",
        "The current risk tier is derived from rainfall and AQI thresholds and shown \
         on the dashboard with its confidence. High risk triggers when rainfall \
         exceeds 100 mm or AQI exceeds 200.",
    ),
    (
        "air",
        "AQI above 200 is in the poor band and flags a respiratory illness spike; \
         150-200 is moderate. The dashboard card shows the live reading and band.",
    ),
    (
        "aqi",
        "AQI above 200 is in the poor band and flags a respiratory illness spike; \
         150-200 is moderate. The dashboard card shows the live reading and band.",
    ),
    (
        "bed",
        "The network currently has 930 of 6,930 beds available. Sion (85) and JJ \
         (95) are tightest; Cooper and Rajawadi hold the most spare capacity.",
    ),
];

/// Answer a free-text query with a canned response
///
/// Total over all inputs: any query, including the empty string, yields a
/// non-empty response.
pub fn respond(query: &str) -> &'static str {
    let query = query.to_lowercase();
    for (keyword, response) in KEYWORD_RESPONSES {
        if query.contains(keyword) {
            return response;
        }
    }
    DEFAULT_RESPONSE
}

/// Who produced a conversation turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

/// Append-only conversation history, seeded with the greeting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            turns: vec![Turn {
                role: Role::Assistant,
                text: GREETING.to_string(),
            }],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    /// Reset to exactly the initial greeting turn
    pub fn clear(&mut self) {
        *self = Conversation::new();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ordered_longest_first() {
        for pair in KEYWORD_RESPONSES.windows(2) {
            let (a, _) = pair[0];
            let (b, _) = pair[1];
            assert!(
                a.len() > b.len() || (a.len() == b.len() && a < b),
                "table out of order: {:?} before {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_responder_is_total() {
        for query in ["", "   ", "completely unrelated question", "predict"] {
            assert!(!respond(query).is_empty());
        }
    }

    #[test]
    fn test_responder_is_idempotent() {
        let query = "what is the dengue situation?";
        assert_eq!(respond(query), respond(query));
    }

    #[test]
    fn test_unrecognized_query_gets_default() {
        assert_eq!(respond("how do I reset my password"), DEFAULT_RESPONSE);
        assert_eq!(respond(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_predict_dengue_risk_scenario() {
        let response = respond("Predict dengue risk");
        assert_ne!(response, DEFAULT_RESPONSE);
        let lower = response.to_lowercase();
        assert!(lower.contains("outbreak") || lower.contains("dengue"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(respond("DENGUE cases?"), respond("dengue cases?"));
    }

    #[test]
    fn test_longest_keyword_wins() {
        // "predict" (7) outranks "dengue" (6) and "risk" (4)
        let both = respond("predict dengue risk");
        assert_eq!(both, respond("predict"));

        // "hospital" (8) outranks "bed" (3)
        assert_eq!(
            respond("which hospital has beds?"),
            respond("hospital")
        );
    }

    #[test]
    fn test_clear_resets_to_greeting() {
        let mut conversation = Conversation::new();
        conversation.push_user("predict dengue risk");
        conversation.push_assistant(respond("predict dengue risk"));
        assert_eq!(conversation.len(), 3);

        conversation.clear();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.turns()[0].role, Role::Assistant);
        assert_eq!(conversation.turns()[0].text, GREETING);
    }
}
