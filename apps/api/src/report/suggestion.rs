//! Career suggestion schema and the parse boundary for assistant replies.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assistant::ThreadMessage;

/// One suggested career, produced by parsing a JSON-shaped assistant message.
/// All fields are required; a reply missing any of them is rejected at the
/// parse boundary rather than flowing untyped into the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    /// The name of the job.
    pub job: String,
    /// What you'd do in the job.
    pub description: String,
    /// Why the assistant picked this job for the test taker.
    pub justification: String,
    /// Degree, certification, or other preparation the job needs.
    pub training: String,
    /// Companies, charities, agencies that hire in this field.
    pub orgs: Vec<String>,
}

/// Whether a message looks like a structured suggestion rather than
/// conversational filler. The assistant is instructed to reply with a bare
/// JSON object, so a leading brace is the discriminator.
pub fn is_structured_reply(text: &str) -> bool {
    text.starts_with('{')
}

/// Rebuilds the suggestion sequence from every structured reply on the
/// thread, in chronological order. Messages that look structured but fail
/// schema validation are skipped and logged.
pub fn collect_suggestions(messages: &[ThreadMessage]) -> Vec<CareerSuggestion> {
    let mut suggestions = Vec::new();
    for message in messages {
        let Some(text) = message.text() else { continue };
        if !is_structured_reply(text) {
            continue;
        }
        match serde_json::from_str::<CareerSuggestion>(text) {
            Ok(suggestion) => suggestions.push(suggestion),
            Err(e) => {
                warn!(
                    "Skipping malformed suggestion reply: {e} — {:?}",
                    text.chars().take(80).collect::<String>()
                );
            }
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{ContentBlock, TextContent};

    fn text_message(value: &str) -> ThreadMessage {
        ThreadMessage {
            role: "assistant".to_string(),
            content: vec![ContentBlock {
                block_type: "text".to_string(),
                text: Some(TextContent {
                    value: value.to_string(),
                }),
            }],
        }
    }

    const VALID_SUGGESTION: &str = r#"{
        "job": "Data Analyst",
        "description": "Turns raw data into insight.",
        "justification": "You enjoy working with data.",
        "training": "A bachelor's degree in statistics or similar.",
        "orgs": ["Census Bureau", "Consultancies"]
    }"#;

    #[test]
    fn test_valid_suggestion_parses() {
        let suggestions = collect_suggestions(&[text_message(VALID_SUGGESTION)]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].job, "Data Analyst");
        assert_eq!(suggestions[0].orgs.len(), 2);
    }

    #[test]
    fn test_conversational_filler_is_skipped() {
        let suggestions = collect_suggestions(&[
            text_message("Sure! Here is a career suggestion for you."),
            text_message(VALID_SUGGESTION),
        ]);
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_missing_field_is_skipped() {
        // No "training" key — must fail validation, not produce a partial record
        let malformed = r#"{"job": "Chef", "description": "Cooks.", "justification": "Why not.", "orgs": []}"#;
        let suggestions = collect_suggestions(&[text_message(malformed)]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_invalid_json_with_leading_brace_is_skipped() {
        let suggestions = collect_suggestions(&[text_message("{not json at all")]);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_chronological_order_preserved() {
        let second = VALID_SUGGESTION.replace("Data Analyst", "Park Ranger");
        let suggestions =
            collect_suggestions(&[text_message(VALID_SUGGESTION), text_message(&second)]);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].job, "Data Analyst");
        assert_eq!(suggestions[1].job, "Park Ranger");
    }

    #[test]
    fn test_is_structured_reply() {
        assert!(is_structured_reply("{\"job\": \"x\"}"));
        assert!(!is_structured_reply("Here you go: {\"job\": \"x\"}"));
        assert!(!is_structured_reply(""));
    }

    #[test]
    fn test_user_messages_without_text_are_ignored() {
        let msg = ThreadMessage {
            role: "user".to_string(),
            content: vec![],
        };
        assert!(collect_suggestions(&[msg]).is_empty());
    }
}
