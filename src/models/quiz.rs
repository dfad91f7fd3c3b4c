// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use super::question::{Question, lenient_i64};

/// Category id the quiz front end sends for "all categories".
pub const ALL_CATEGORIES: i64 = 0;

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids already asked in this round.
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// The category selector. Clients also send `type`; it is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Picks the first candidate, in the given order, that has not been asked yet.
pub fn next_question(candidates: Vec<Question>, previous: &[i64]) -> Option<Question> {
    candidates
        .into_iter()
        .find(|q| !previous.contains(&q.id))
}
