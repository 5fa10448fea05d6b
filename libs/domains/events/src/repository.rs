//! Repository traits for event and participant persistence.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::DomainResult;
use crate::models::{Event, EventInput, Participant, ParticipantInput};

/// Storage operations for events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, in insertion order as stored.
    async fn list(&self) -> DomainResult<Vec<Event>>;

    /// The most recently created event, approximated by descending
    /// identifier order. `None` when the collection is empty.
    async fn find_latest(&self) -> DomainResult<Option<Event>>;

    /// Get an event by id.
    async fn get_by_id(&self, id: ObjectId) -> DomainResult<Option<Event>>;

    /// Persist a new event; the store assigns the identifier.
    async fn create(&self, input: EventInput) -> DomainResult<Event>;

    /// Replace all mutable fields and return the re-read document.
    async fn update(&self, id: ObjectId, input: EventInput) -> DomainResult<Event>;

    /// Remove an event. Fails with NotFound when nothing was removed.
    async fn delete(&self, id: ObjectId) -> DomainResult<()>;
}

/// Storage operations for participants.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Persist a new participant; the store assigns the identifier.
    async fn create(&self, participant: Participant) -> DomainResult<Participant>;

    /// Get a participant by id.
    async fn get_by_id(&self, id: ObjectId) -> DomainResult<Option<Participant>>;

    /// Exact email match, used by the linking rule to dedup registrations.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Participant>>;

    /// Participants whose event list contains the given event id.
    async fn list_by_event(&self, event_id: ObjectId) -> DomainResult<Vec<Participant>>;

    /// Replace name, email, company and profile picture. The event list is
    /// never touched here; only [`add_event`](Self::add_event) mutates it.
    async fn update(&self, id: ObjectId, input: ParticipantInput) -> DomainResult<Participant>;

    /// Set-like append of an event id (no duplicates, order preserved).
    async fn add_event(&self, id: ObjectId, event_id: ObjectId) -> DomainResult<()>;

    /// Partial overwrite of company and/or profile picture.
    async fn set_profile(
        &self,
        id: ObjectId,
        company: Option<String>,
        profile_picture: Option<String>,
    ) -> DomainResult<()>;

    /// Remove a participant. Fails with NotFound when nothing was removed.
    async fn delete(&self, id: ObjectId) -> DomainResult<()>;
}
