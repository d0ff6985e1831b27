use askama::Template;
use axum::{extract::State, response::Html};

use crate::services::activities_service::{self, ActivityCardView};
use crate::web::error::ApiError;
use crate::web::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: Vec<ActivityCardView>,
    pub total_participants: usize,
    pub build_id: &'static str,
}

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let data = activities_service::build_index_page(&state.registry).await;

    let template = IndexTemplate {
        activities: data.activities,
        total_participants: data.total_participants,
        build_id: env!("SCHOOL_ACTIVITIES_BUILD_ID"),
    };
    template
        .render()
        .map(Html)
        .map_err(|e| ApiError::Internal(format!("index template: {}", e)))
}
