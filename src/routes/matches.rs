use crate::db::{models::*, DbPool};
use crate::services::MatchesService;
use crate::validation::ValidatedJson;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_match(
    State(pool): State<Arc<DbPool>>,
    ValidatedJson(payload): ValidatedJson<CreateMatchRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MatchesService::create(&mut conn, &payload) {
        Ok(detail) => {
            let response = ApiResponse::created(detail, "Match created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_match(
    State(pool): State<Arc<DbPool>>,
    Path(match_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MatchesService::get_detail(&mut conn, match_id) {
        Ok(detail) => {
            let response = ApiResponse::success(detail, "Match retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_match_status(
    State(pool): State<Arc<DbPool>>,
    Path(match_id): Path<Uuid>,
    Json(payload): Json<UpdateMatchStatusRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MatchesService::set_status(&mut conn, match_id, &payload) {
        Ok(updated) => {
            let response = ApiResponse::success(updated, "Match status updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_match_score(
    State(pool): State<Arc<DbPool>>,
    Path(match_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateMatchScoreRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MatchesService::set_score(&mut conn, match_id, &payload) {
        Ok(updated) => {
            let response = ApiResponse::success(updated, "Match score updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn cancel_match(
    State(pool): State<Arc<DbPool>>,
    Path(match_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match MatchesService::cancel(&mut conn, match_id) {
        Ok(canceled) => {
            let response = ApiResponse::success(canceled, "Match canceled successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
