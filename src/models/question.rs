// src/models/question.rs

use serde::{Deserialize, Deserializer, Serialize, de};
use sqlx::FromRow;
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
/// Serialized as-is; this is the formatted shape every endpoint returns.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text.
    pub question: String,

    pub answer: String,

    /// Id of the owning category.
    pub category: i64,

    /// 1 (easiest) to 5 (hardest).
    pub difficulty: i32,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question. Every field is required; `None` means
/// the client left it out.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(required, length(max = 1000), custom(function = not_blank))]
    pub question: Option<String>,

    #[validate(required, length(max = 500), custom(function = not_blank))]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    #[validate(required, range(min = 1))]
    pub category: Option<i64>,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    #[validate(required, range(min = 1, max = 5))]
    pub difficulty: Option<i64>,
}

impl CreateQuestionRequest {
    /// Validates the payload and returns the row to insert.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        self.validate()
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        let (Some(question), Some(answer), Some(category), Some(difficulty)) =
            (self.question, self.answer, self.category, self.difficulty)
        else {
            return Err(AppError::Unprocessable("missing question field".to_string()));
        };

        let difficulty = i32::try_from(difficulty)
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        Ok(NewQuestion {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
            category,
            difficulty,
        })
    }
}

/// DTO for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// HTML form selects post numbers as strings; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(n) => Ok(n),
            IntOrString::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

pub(crate) fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn complete_request_is_accepted() {
        let new = parse(json!({
            "question": "  Who painted the Mona Lisa? ",
            "answer": "Leonardo da Vinci",
            "category": 2,
            "difficulty": 3
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new.question, "Who painted the Mona Lisa?");
        assert_eq!(new.category, 2);
        assert_eq!(new.difficulty, 3);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let new = parse(json!({
            "question": "Q",
            "answer": "A",
            "category": "4",
            "difficulty": "1"
        }))
        .into_new_question()
        .unwrap();

        assert_eq!((new.category, new.difficulty), (4, 1));
    }

    #[test]
    fn missing_field_is_rejected() {
        let req = parse(json!({"question": "Q", "answer": "A", "category": 1}));
        assert!(req.into_new_question().is_err());

        assert!(parse(json!({})).into_new_question().is_err());
    }

    #[test]
    fn blank_text_is_rejected() {
        let req = parse(json!({
            "question": "   ",
            "answer": "A",
            "category": 1,
            "difficulty": 1
        }));
        assert!(req.into_new_question().is_err());
    }

    #[test]
    fn difficulty_out_of_range_is_rejected() {
        let req = parse(json!({
            "question": "Q",
            "answer": "A",
            "category": 1,
            "difficulty": 9
        }));
        assert!(req.into_new_question().is_err());
    }

    #[test]
    fn non_numeric_category_fails_to_parse() {
        let parsed = serde_json::from_value::<CreateQuestionRequest>(json!({
            "question": "Q",
            "answer": "A",
            "category": "science",
            "difficulty": 1
        }));
        assert!(parsed.is_err());
    }
}
