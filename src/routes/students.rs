use crate::{
    data::student::{StudentRequest, StudentResponse},
    error::{ParseUuidSnafu, RosterResult},
    state::RosterState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use snafu::ResultExt;
use uuid::Uuid;

pub async fn post_new_student(
    State(state): State<RosterState>,
    Json(request): Json<StudentRequest>,
) -> RosterResult<StatusCode> {
    let response = state.service().create_student(request).await?;
    info!(id = %response.id, "Student created");
    Ok(StatusCode::CREATED)
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Json<StudentResponse>> {
    let id = Uuid::parse_str(&id).context(ParseUuidSnafu { original: id })?;
    Ok(Json(state.service().get_student(id).await?))
}

pub async fn get_students(
    State(state): State<RosterState>,
) -> RosterResult<Json<Vec<StudentResponse>>> {
    Ok(Json(state.service().get_all_students().await?))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<StatusCode> {
    //a garbage id cannot name a stored record, so it deletes nothing
    if let Ok(id) = Uuid::parse_str(&id) {
        state.service().delete_student(id).await?;
    }
    Ok(StatusCode::ACCEPTED)
}
