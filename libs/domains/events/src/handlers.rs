use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{DomainResult, ErrorResponse};
use crate::extract::{JsonBody, ObjectIdPath};
use crate::models::{EventInput, EventResponse, ParticipantInput, ParticipantResponse};
use crate::repository::{EventRepository, ParticipantRepository};
use crate::service::{EventService, ParticipantService, RegisterOutcome};

/// OpenAPI documentation for the registration API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_events,
        create_event,
        get_event,
        update_event,
        delete_event,
        list_event_participants,
        register_participant,
        get_participant,
        update_participant,
        delete_participant,
    ),
    components(schemas(
        EventInput,
        EventResponse,
        ParticipantInput,
        ParticipantResponse,
        ErrorResponse
    )),
    tags(
        (name = "Events", description = "Event management endpoints"),
        (name = "Participants", description = "Participant registration endpoints")
    )
)]
pub struct ApiDoc;

/// Create the events router
pub fn events_router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(Arc::new(service))
}

/// Create the participants router. Also owns the per-event participant
/// listing, which lives under the events path space.
pub fn participants_router<E, P>(service: ParticipantService<E, P>) -> Router
where
    E: EventRepository + 'static,
    P: ParticipantRepository + 'static,
{
    Router::new()
        .route("/participants", post(register_participant))
        .route(
            "/participants/{id}",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
        .route("/events/{id}/participants", get(list_event_participants))
        .with_state(Arc::new(service))
}

/// Full domain router: events plus participants.
pub fn router<R, E, P>(
    events: EventService<R>,
    participants: ParticipantService<E, P>,
) -> Router
where
    R: EventRepository + 'static,
    E: EventRepository + 'static,
    P: ParticipantRepository + 'static,
{
    events_router(events).merge(participants_router(participants))
}

/// List all events
#[utoipa::path(
    get,
    path = "/events",
    tag = "Events",
    responses(
        (status = 200, description = "List of events", body = Vec<EventResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
) -> DomainResult<Json<Vec<EventResponse>>> {
    let events = service.list_events().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events",
    tag = "Events",
    request_body = EventInput,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    JsonBody(input): JsonBody<EventInput>,
) -> DomainResult<impl IntoResponse> {
    let event = service.create_event(input).await?;
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DomainResult<Json<EventResponse>> {
    let event = service.get_event(id).await?;
    Ok(Json(EventResponse::from(event)))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID (24-character hex)")
    ),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(input): JsonBody<EventInput>,
) -> DomainResult<Json<EventResponse>> {
    let event = service.update_event(id, input).await?;
    Ok(Json(EventResponse::from(event)))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID (24-character hex)")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DomainResult<impl IntoResponse> {
    service.delete_event(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List participants linked to an event
#[utoipa::path(
    get,
    path = "/events/{id}/participants",
    tag = "Participants",
    params(
        ("id" = String, Path, description = "Event ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Participants linked to the event", body = Vec<ParticipantResponse>),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn list_event_participants<E, P>(
    State(service): State<Arc<ParticipantService<E, P>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DomainResult<Json<Vec<ParticipantResponse>>>
where
    E: EventRepository,
    P: ParticipantRepository,
{
    let participants = service.list_by_event(id).await?;
    Ok(Json(
        participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect(),
    ))
}

/// Register a participant for the most recently created event
#[utoipa::path(
    post,
    path = "/participants",
    tag = "Participants",
    request_body = ParticipantInput,
    responses(
        (status = 201, description = "New participant created and linked", body = ParticipantResponse),
        (status = 200, description = "Existing participant linked", body = ParticipantResponse),
        (status = 404, description = "No event exists yet", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn register_participant<E, P>(
    State(service): State<Arc<ParticipantService<E, P>>>,
    JsonBody(input): JsonBody<ParticipantInput>,
) -> DomainResult<impl IntoResponse>
where
    E: EventRepository,
    P: ParticipantRepository,
{
    let response = match service.register(input).await? {
        RegisterOutcome::Created(participant) => {
            (StatusCode::CREATED, Json(ParticipantResponse::from(participant)))
        }
        RegisterOutcome::Linked(participant) => {
            (StatusCode::OK, Json(ParticipantResponse::from(participant)))
        }
    };
    Ok(response)
}

/// Get a participant by ID
#[utoipa::path(
    get,
    path = "/participants/{id}",
    tag = "Participants",
    params(
        ("id" = String, Path, description = "Participant ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Participant not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn get_participant<E, P>(
    State(service): State<Arc<ParticipantService<E, P>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DomainResult<Json<ParticipantResponse>>
where
    E: EventRepository,
    P: ParticipantRepository,
{
    let participant = service.get_participant(id).await?;
    Ok(Json(ParticipantResponse::from(participant)))
}

/// Update a participant's profile fields
#[utoipa::path(
    put,
    path = "/participants/{id}",
    tag = "Participants",
    params(
        ("id" = String, Path, description = "Participant ID (24-character hex)")
    ),
    request_body = ParticipantInput,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Participant not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn update_participant<E, P>(
    State(service): State<Arc<ParticipantService<E, P>>>,
    ObjectIdPath(id): ObjectIdPath,
    JsonBody(input): JsonBody<ParticipantInput>,
) -> DomainResult<Json<ParticipantResponse>>
where
    E: EventRepository,
    P: ParticipantRepository,
{
    let participant = service.update_participant(id, input).await?;
    Ok(Json(ParticipantResponse::from(participant)))
}

/// Delete a participant
#[utoipa::path(
    delete,
    path = "/participants/{id}",
    tag = "Participants",
    params(
        ("id" = String, Path, description = "Participant ID (24-character hex)")
    ),
    responses(
        (status = 204, description = "Participant deleted"),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Participant not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
async fn delete_participant<E, P>(
    State(service): State<Arc<ParticipantService<E, P>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> DomainResult<impl IntoResponse>
where
    E: EventRepository,
    P: ParticipantRepository,
{
    service.delete_participant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
