use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;

use backend_application::queries::location_queries;
use backend_application::AppState;
use backend_domain::{LocationDetail, LocationSummary};

use crate::error::HttpError;

pub async fn list_locations(
    State(state): State<AppState>,
) -> Json<HashMap<String, LocationSummary>> {
    Json(location_queries::list_locations(&state))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LocationDetail>, HttpError> {
    let detail = location_queries::location_detail(&state, &id).await?;
    Ok(Json(detail))
}
