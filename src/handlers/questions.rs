// src/handlers/questions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::AnyPool;

use crate::{
    error::AppError,
    handlers::categories::fetch_category_map,
    models::question::{CreateQuestionRequest, NewQuestion, Question, SearchRequest},
    utils::{
        extract::{AppJson, AppPath, AppQuery},
        pagination::{PageParams, paginate},
    },
};

/// Loads every question ordered by id.
async fn fetch_all_questions(pool: &AnyPool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions: {:?}", e);
        AppError::from(e)
    })?;

    Ok(questions)
}

/// The requested page of `selection`.
pub(crate) fn format_page(selection: &[Question], params: &PageParams) -> Vec<Question> {
    paginate(selection, params.page())
}

/// Category of the first question on a page.
pub(crate) fn current_category(page: &[Question]) -> Option<i64> {
    page.first().map(|q| q.category)
}

/// Case-insensitive substring match with Unicode lowercasing.
/// SQL `LOWER` only folds ASCII on SQLite, so this runs in Rust.
pub(crate) fn matches_term(text: &str, term: &str) -> bool {
    text.to_lowercase().contains(&term.to_lowercase())
}

/// Lists questions, paginated, with the category map.
/// A page with no questions is not found.
pub async fn list_questions(
    State(pool): State<AnyPool>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = fetch_all_questions(&pool).await?;
    let page = format_page(&selection, &params);

    let Some(current) = current_category(&page) else {
        return Err(AppError::NotFound(format!(
            "Page {} holds no questions",
            params.page()
        )));
    };

    let categories = fetch_category_map(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": selection.len(),
        "categories": categories,
        "current_category": current,
    })))
}

/// Deletes a question by ID and returns the remaining questions.
/// Deleting a missing question is unprocessable.
pub async fn delete_question(
    State(pool): State<AnyPool>,
    AppPath(id): AppPath<i64>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question: {:?}", e);
            AppError::from(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::Unprocessable(format!("Question {} not found", id)));
    }

    tracing::info!("Deleted question {}", id);

    let selection = fetch_all_questions(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "questions": format_page(&selection, &params),
        "total_questions": selection.len(),
    })))
}

/// Case-insensitive substring search on question text.
pub async fn search_questions(
    State(pool): State<AnyPool>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Some(term) = payload.search_term else {
        return Err(AppError::Unprocessable("searchTerm is required".to_string()));
    };

    let selection: Vec<Question> = fetch_all_questions(&pool)
        .await?
        .into_iter()
        .filter(|q| matches_term(&q.question, &term))
        .collect();

    let page = format_page(&selection, &params);
    tracing::debug!("Search {:?} matched {} question(s)", term, selection.len());

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": selection.len(),
        "current_category": current_category(&page),
    })))
}

/// Creates a new question.
pub async fn create_question(
    State(pool): State<AnyPool>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let NewQuestion {
        question,
        answer,
        category,
        difficulty,
    } = payload.into_new_question()?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("Created question {} in category {}", id, category);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": id,
        })),
    ))
}
