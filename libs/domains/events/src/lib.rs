//! Events Domain
//!
//! This module provides a complete domain implementation for event and
//! participant registration using MongoDB. Registration follows a
//! create-or-link rule: a submitted participant is always associated with
//! the most recently created event.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, linking rule
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + MongoDB implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{
//!     handlers,
//!     mongodb::{MongoEventRepository, MongoParticipantRepository},
//!     service::{EventService, ParticipantService},
//! };
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("eventodb");
//!
//! // The event repository is shared: registration links participants to
//! // the latest event.
//! let events = Arc::new(MongoEventRepository::new(&db));
//! let event_service = EventService::from_arc(Arc::clone(&events));
//! let participant_service =
//!     ParticipantService::new(events, MongoParticipantRepository::new(&db));
//!
//! let router = handlers::router(event_service, participant_service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{DomainError, DomainResult, ErrorResponse};
pub use extract::{JsonBody, ObjectIdPath};
pub use handlers::ApiDoc;
pub use models::{
    Event, EventInput, EventResponse, Participant, ParticipantInput, ParticipantResponse,
};
pub use service::{EventService, ParticipantService, RegisterOutcome};
