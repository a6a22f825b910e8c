use axum::{Json, Router, middleware, routing::get};
use storage::{
    dto::score::{LessonScoreResponse, MessageResponse, StudentTotalResponse, UpsertScoreRequest},
    models::{LessonId, LessonScoreRecord, StudentId},
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::error::{method_not_allowed, panic_response, route_not_found};
use crate::features::{lessons, scores, students};
use crate::middleware::cors::permissive_cors;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        students::handlers::list_student_lessons,
        students::handlers::get_student_total,
        lessons::handlers::get_lesson_score,
        scores::handlers::upsert_score,
    ),
    components(
        schemas(
            LessonScoreRecord,
            StudentId,
            LessonId,
            StudentTotalResponse,
            LessonScoreResponse,
            UpsertScoreRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "students", description = "Per-student lesson records and totals"),
        (name = "lessons", description = "Per-lesson scores"),
        (name = "scores", description = "Score submission"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(openapi_json).fallback(method_not_allowed),
        )
        .merge(students::routes::routes())
        .merge(lessons::routes::routes())
        .merge(scores::routes::routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(permissive_cors))
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response)),
        )
}
