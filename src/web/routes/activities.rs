use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use indexmap::IndexMap;
use serde::Serialize;

use crate::models::Activity;
use crate::services::activities_service;
use crate::web::error::ApiError;
use crate::web::state::AppState;

/// Raw query pairs; a repeated `email` resolves to its last value.
pub type QueryPairs = Vec<(String, String)>;

// Presence is the only check; an empty value is passed through as-is.
fn require_email(pairs: QueryPairs) -> Result<String, ApiError> {
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or(ApiError::MissingEmail)
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(state): State<AppState>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&state.registry).await)
}

pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = require_email(pairs)?;
    let message = activities_service::signup(&state.registry, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = require_email(pairs)?;
    let message = activities_service::unregister(&state.registry, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn last_email_wins() {
        let email = require_email(pairs(&[("email", "a@x"), ("email", "b@x")])).unwrap();
        assert_eq!(email, "b@x");
    }

    #[test]
    fn empty_email_is_present() {
        assert_eq!(require_email(pairs(&[("email", "")])).unwrap(), "");
    }

    #[test]
    fn absent_email_is_rejected() {
        let err = require_email(pairs(&[("other", "x")])).unwrap_err();
        assert!(matches!(err, ApiError::MissingEmail));
    }
}
