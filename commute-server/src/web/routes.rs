//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::domain::{ChatMessage, ChatRoom, CommutePreferences, Event, ScheduleEntry, TravelMode, User};
use crate::planner::PlanError;
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", post(add_user))
        .route("/users/:username", get(get_user))
        .route("/users/:username/preferences", patch(update_preferences))
        .route("/users/:username/events", get(get_events).post(add_events))
        .route("/users/:username/schedule", put(set_schedule))
        .route("/users/:username/route", post(plan_route))
        .route("/chat/:room", get(get_room).post(create_room))
        .route("/chat/:room/messages", post(add_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Add a user. 201 if new, 200 if the username already existed.
async fn add_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let username = user.username.clone();
    let created = state.store.add_user(user).await?;

    let stored = state
        .store
        .get_user(&username)
        .await
        .ok_or_else(|| StoreError::UserNotFound(username))?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(stored)))
}

async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .get_user(&username)
        .await
        .ok_or(StoreError::UserNotFound(username))?;
    Ok(Json(user))
}

/// Merge a partial preferences document into the stored one.
async fn update_preferences(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(patch): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let merged = state.store.update_preferences(&username, patch).await?;
    Ok(Json(merged))
}

async fn get_events(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.store.get_events(&username).await?))
}

async fn add_events(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(events): Json<Vec<Event>>,
) -> Result<Json<AddEventsResponse>, AppError> {
    let added = state.store.add_events(&username, events).await?;
    Ok(Json(AddEventsResponse { added }))
}

/// Replace the user's day schedule.
async fn set_schedule(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(entries): Json<Vec<ScheduleEntry>>,
) -> Result<StatusCode, AppError> {
    state.store.set_schedule(&username, entries).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Plan the best route to one of the user's stored events.
async fn plan_route(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let user = state
        .store
        .get_user(&username)
        .await
        .ok_or_else(|| StoreError::UserNotFound(username.clone()))?;

    let event = user.event(&req.event_name).ok_or_else(|| AppError::NotFound {
        message: format!("event not found: {}", req.event_name),
    })?;

    let preferences =
        CommutePreferences::from_document(&user.preferences).map_err(|e| AppError::BadRequest {
            message: format!("stored preferences are invalid: {e}"),
        })?;

    let route = if req.modes.is_empty() {
        state.planner.plan(&req.origin, event, &preferences).await?
    } else {
        let modes = req
            .modes
            .iter()
            .map(|m| {
                TravelMode::from_commute_method(m)
                    .ok_or_else(|| PlanError::InvalidPreference(m.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        state
            .planner
            .plan_across_modes(&req.origin, event, &preferences, &modes)
            .await?
    };

    tracing::info!(%username, event = %req.event_name, mode = ?route.mode, "route planned");

    Ok(Json(PlanRouteResponse {
        event: req.event_name,
        route,
    }))
}

async fn create_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Json<ChatRoom> {
    Json(state.store.create_room(&room).await)
}

async fn get_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
) -> Result<Json<ChatRoom>, AppError> {
    let found = state
        .store
        .get_room(&room)
        .await
        .ok_or(StoreError::RoomNotFound(room))?;
    Ok(Json(found))
}

/// Append a message, creating the room if it does not exist.
async fn add_message(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Json(message): Json<ChatMessage>,
) -> Json<ChatRoom> {
    Json(state.store.add_message(&room, message).await)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidPreference(_) | PlanError::Validation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::EmptyCandidateSet => AppError::NotFound {
                message: "no route found".to_string(),
            },
            PlanError::ExternalService { .. } => AppError::BadGateway {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UserNotFound(_) | StoreError::RoomNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::InvalidUser(_) | StoreError::InvalidPreferences(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
