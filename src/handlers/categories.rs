// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::AnyPool;

use crate::{
    error::AppError,
    handlers::questions::format_page,
    models::{
        category::{Category, CategoryMap, category_map},
        question::Question,
    },
    utils::{
        extract::{AppPath, AppQuery},
        pagination::PageParams,
    },
};

/// Loads every category as an `{id: type}` map, ordered by id.
pub(crate) async fn fetch_category_map(pool: &AnyPool) -> Result<CategoryMap, AppError> {
    let categories = sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type
        FROM categories
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch categories: {:?}", e);
        AppError::from(e)
    })?;

    Ok(category_map(categories))
}

/// Lists all categories.
pub async fn list_categories(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_category_map(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

/// Lists the questions of one category, paginated.
/// An empty category (or an unknown id) is unprocessable.
pub async fn list_category_questions(
    State(pool): State<AnyPool>,
    AppPath(category_id): AppPath<i64>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let selection = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await?;

    if selection.is_empty() {
        return Err(AppError::Unprocessable(format!(
            "No questions in category {}",
            category_id
        )));
    }

    let page = format_page(&selection, &params);
    tracing::debug!(
        "Category {} page {} holds {} question(s)",
        category_id,
        params.page(),
        page.len()
    );

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": selection.len(),
        "current_category": category_id,
    })))
}
