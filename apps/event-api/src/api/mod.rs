//! API routes module
//!
//! Wires the events domain routers to the MongoDB repositories. Domain
//! routes live at the root path space (`/events`, `/participants`) for
//! compatibility with existing clients.

pub mod health;

use axum::Router;
use domain_events::{
    handlers,
    mongodb::{MongoEventRepository, MongoParticipantRepository},
    service::{EventService, ParticipantService},
};
use std::sync::Arc;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    // The event repository is shared with the participant service, which
    // uses it to find the latest event during registration.
    let events = Arc::new(MongoEventRepository::new(&state.db));
    let event_service = EventService::from_arc(Arc::clone(&events));
    let participant_service =
        ParticipantService::new(events, MongoParticipantRepository::new(&state.db));

    handlers::router(event_service, participant_service).merge(health::router(state.clone()))
}
