//! Results export — flattens question/answer pairs into the text block the
//! report orchestrator sends to the assistant.

use std::fmt::Write;

use crate::quiz::banks::Question;

/// Combines each question with its response as numbered `Qi:`/`Ai:` lines.
/// When `major` is non-empty, a trailing filter line restricts suggestions to
/// careers from that field of study.
///
/// Callers guarantee `responses` has the same length as `questions`.
pub fn export_results(questions: &[Question], responses: &[String], major: &str) -> String {
    let mut results = String::new();
    for (i, (question, response)) in questions.iter().zip(responses).enumerate() {
        let n = i + 1;
        let _ = writeln!(results, "Q{n}: {}", question.question_text);
        let _ = writeln!(results, "A{n}: {response}\n");
    }
    if !major.is_empty() {
        let _ = writeln!(
            results,
            "The test taker only wants careers from these major(s) {major}"
        );
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_questions() -> Vec<Question> {
        vec![
            Question {
                question_text: "Question 1",
                choices: &[],
            },
            Question {
                question_text: "Question 2",
                choices: &[],
            },
            Question {
                question_text: "Question 3",
                choices: &[],
            },
        ]
    }

    fn fixture_responses() -> Vec<String> {
        vec![
            "Response 1".to_string(),
            "Response 2".to_string(),
            "Response 3".to_string(),
        ]
    }

    #[test]
    fn test_export_combines_questions_and_responses() {
        let expected = "Q1: Question 1\nA1: Response 1\n\n\
                        Q2: Question 2\nA2: Response 2\n\n\
                        Q3: Question 3\nA3: Response 3\n\n";
        let results = export_results(&fixture_questions(), &fixture_responses(), "");
        assert_eq!(results, expected);
    }

    #[test]
    fn test_export_is_deterministic() {
        let a = export_results(&fixture_questions(), &fixture_responses(), "");
        let b = export_results(&fixture_questions(), &fixture_responses(), "");
        assert_eq!(a, b);
    }

    #[test]
    fn test_major_filter_appended_when_present() {
        let results = export_results(&fixture_questions(), &fixture_responses(), "Biology");
        assert!(results.ends_with(
            "The test taker only wants careers from these major(s) Biology\n"
        ));
    }

    #[test]
    fn test_no_filter_line_for_empty_major() {
        let results = export_results(&fixture_questions(), &fixture_responses(), "");
        assert!(!results.contains("major(s)"));
    }

    #[test]
    fn test_empty_quiz_exports_empty_string() {
        assert_eq!(export_results(&[], &[], ""), "");
    }
}
