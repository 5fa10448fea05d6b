//! Business logic layer: event CRUD orchestration and the participant
//! linking rule.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::error::{DomainError, DomainResult};
use crate::models::{Event, EventInput, Participant, ParticipantInput};
use crate::repository::{EventRepository, ParticipantRepository};

/// Event service wrapping an [`EventRepository`].
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Build from an already shared repository (the participant service
    /// shares the event repository for the linking rule).
    pub fn from_arc(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list_events(&self) -> DomainResult<Vec<Event>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_event(&self, id: ObjectId) -> DomainResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Event"))
    }

    #[instrument(skip(self, input), fields(event_name = %input.name))]
    pub async fn create_event(&self, input: EventInput) -> DomainResult<Event> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_event(&self, id: ObjectId, input: EventInput) -> DomainResult<Event> {
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: ObjectId) -> DomainResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: EventRepository> Clone for EventService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Outcome of a registration: a brand-new participant or an existing one
/// linked (possibly idempotently) to the latest event.
#[derive(Debug)]
pub enum RegisterOutcome {
    Created(Participant),
    Linked(Participant),
}

impl RegisterOutcome {
    pub fn participant(&self) -> &Participant {
        match self {
            RegisterOutcome::Created(p) | RegisterOutcome::Linked(p) => p,
        }
    }
}

/// Participant service. Needs the event repository as well: registration
/// always links to the most recently created event.
pub struct ParticipantService<E: EventRepository, P: ParticipantRepository> {
    events: Arc<E>,
    participants: Arc<P>,
}

impl<E: EventRepository, P: ParticipantRepository> ParticipantService<E, P> {
    pub fn new(events: Arc<E>, participants: P) -> Self {
        Self {
            events,
            participants: Arc::new(participants),
        }
    }

    /// Create-or-link: associate the submitted participant with the most
    /// recently created event.
    ///
    /// Three non-atomic store round-trips (find latest event, find by
    /// email, create/update). Concurrent registrations with the same email
    /// can race into duplicate documents; this is accepted, not handled.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: ParticipantInput) -> DomainResult<RegisterOutcome> {
        let latest = self
            .events
            .find_latest()
            .await?
            .ok_or(DomainError::NoEventsToLink)?;
        let latest_id = latest
            .id
            .ok_or_else(|| DomainError::Internal("stored event has no id".to_string()))?;

        match self.participants.find_by_email(&input.email).await? {
            Some(existing) => {
                let id = existing
                    .id
                    .ok_or_else(|| DomainError::Internal("stored participant has no id".to_string()))?;

                if !existing.event_ids.contains(&latest_id) {
                    self.participants.add_event(id, latest_id).await?;
                }

                // Only non-empty incoming values overwrite the stored profile
                let company = input.company.filter(|c| !c.is_empty());
                let picture = input.profile_picture.filter(|p| !p.is_empty());
                if company.is_some() || picture.is_some() {
                    self.participants.set_profile(id, company, picture).await?;
                }

                let updated = self
                    .participants
                    .get_by_id(id)
                    .await?
                    .ok_or(DomainError::NotFound("Participant"))?;

                tracing::info!(participant_id = %id, event_id = %latest_id, "Participant linked to latest event");
                Ok(RegisterOutcome::Linked(updated))
            }
            None => {
                let participant = Participant {
                    id: None,
                    name: input.name,
                    email: input.email,
                    company: input.company.filter(|c| !c.is_empty()),
                    profile_picture: input.profile_picture.filter(|p| !p.is_empty()),
                    event_ids: vec![latest_id],
                };

                let created = self.participants.create(participant).await?;
                tracing::info!(event_id = %latest_id, "Participant registered for latest event");
                Ok(RegisterOutcome::Created(created))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_participant(&self, id: ObjectId) -> DomainResult<Participant> {
        self.participants
            .get_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Participant"))
    }

    /// Participants linked to the given event. No existence check on the
    /// event itself: an unknown id yields an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn list_by_event(&self, event_id: ObjectId) -> DomainResult<Vec<Participant>> {
        self.participants.list_by_event(event_id).await
    }

    /// Update profile fields. The event list is exclusively owned by the
    /// linking rule and is never changed through this path.
    #[instrument(skip(self, input))]
    pub async fn update_participant(
        &self,
        id: ObjectId,
        input: ParticipantInput,
    ) -> DomainResult<Participant> {
        self.participants.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_participant(&self, id: ObjectId) -> DomainResult<()> {
        self.participants.delete(id).await
    }
}

impl<E: EventRepository, P: ParticipantRepository> Clone for ParticipantService<E, P> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            participants: Arc::clone(&self.participants),
        }
    }
}
