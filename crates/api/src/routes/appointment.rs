use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/appointments/:operator",
            get(handlers::appointment::list_appointments),
        )
        .route(
            "/free_slots/:operator",
            get(handlers::appointment::free_slots),
        )
        .route(
            "/appointment/book",
            post(handlers::appointment::book_appointment),
        )
        .route(
            "/appointment/reschedule/:id",
            put(handlers::appointment::reschedule_appointment),
        )
        .route(
            "/appointment/cancel/:id",
            delete(handlers::appointment::cancel_appointment),
        )
}
