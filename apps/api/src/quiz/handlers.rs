//! Axum route handlers for the Quiz API.

use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::quiz::banks::{Bank, Question};
use crate::quiz::export::export_results;
use crate::quiz::progress::{progress, QuizProgress};

#[derive(Debug, Serialize)]
pub struct BankResponse {
    pub bank: &'static str,
    pub questions: &'static [Question],
}

#[derive(Debug, Deserialize)]
pub struct ResultsRequest {
    /// One response per question, in question order.
    pub responses: Vec<String>,
    /// Optional "preferred major(s)" filter from the finish screen.
    #[serde(default)]
    pub major: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    /// The exported results string the report endpoint accepts.
    pub results: String,
    pub progress: QuizProgress,
}

fn resolve_bank(slug: &str) -> Result<Bank, AppError> {
    Bank::from_slug(slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown question bank '{slug}'")))
}

/// GET /api/v1/quiz/:bank
///
/// The question bank for the basic or detailed test.
pub async fn handle_get_bank(
    Path(slug): Path<String>,
) -> Result<Json<BankResponse>, AppError> {
    let bank = resolve_bank(&slug)?;
    Ok(Json(BankResponse {
        bank: bank.slug(),
        questions: bank.questions(),
    }))
}

/// POST /api/v1/quiz/:bank/results
///
/// Validates a full set of responses and returns the exported results
/// string, ready to hand to the Report API.
pub async fn handle_export_results(
    Path(slug): Path<String>,
    Json(request): Json<ResultsRequest>,
) -> Result<Json<ResultsResponse>, AppError> {
    let bank = resolve_bank(&slug)?;
    let questions = bank.questions();

    if request.responses.len() != questions.len() {
        return Err(AppError::Validation(format!(
            "Expected {} responses for the {} test, got {}",
            questions.len(),
            bank.slug(),
            request.responses.len()
        )));
    }
    if let Some(i) = request.responses.iter().position(|r| r.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "Question {} has no response",
            i + 1
        )));
    }

    let results = export_results(questions, &request.responses, request.major.trim());
    Ok(Json(ResultsResponse {
        results,
        progress: progress(questions.len(), questions.len()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bank_rejects_unknown_slug() {
        assert!(matches!(
            resolve_bank("expert"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_results_request_major_defaults_empty() {
        let request: ResultsRequest =
            serde_json::from_str(r#"{"responses": ["a", "b"]}"#).unwrap();
        assert!(request.major.is_empty());
        assert_eq!(request.responses.len(), 2);
    }
}
