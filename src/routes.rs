use crate::state::RosterState;
use axum::{Router, routing::get};

pub mod students;

pub fn api_router(state: RosterState) -> Router {
    Router::new()
        .route(
            "/api/v1/students",
            get(students::get_students).post(students::post_new_student),
        )
        .route(
            "/api/v1/students/{id}",
            get(students::get_student).delete(students::delete_student),
        )
        .with_state(state)
}
