// src/handlers/quizzes.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{ALL_CATEGORIES, QuizRequest, QuizResponse, next_question},
    },
    utils::extract::AppJson,
};

/// Returns the next quiz question for a category.
///
/// * Candidates are taken in ascending id order.
/// * Ids in `previous_questions` are skipped.
/// * `question` is null once the category is exhausted.
pub async fn next_quiz_question(
    State(pool): State<AnyPool>,
    AppJson(payload): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(previous), Some(category)) = (payload.previous_questions, payload.quiz_category)
    else {
        return Err(AppError::Unprocessable(
            "previous_questions and quiz_category are required".to_string(),
        ));
    };

    let candidates = if category.id == ALL_CATEGORIES {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&pool)
        .await?
    } else {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category.id)
        .fetch_all(&pool)
        .await?
    };

    let question = next_question(candidates, &previous);
    tracing::debug!(
        "Quiz in category {} after {} question(s) -> {:?}",
        category.id,
        previous.len(),
        question.as_ref().map(|q| q.id)
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
