//! MongoDB implementations of the event and participant repositories.

use async_trait::async_trait;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};
use mongodb::options::FindOneOptions;
use mongodb::{Collection, Cursor, Database};
use tracing::{instrument, warn};

use crate::error::{DomainError, DomainResult};
use crate::models::{Event, EventInput, Participant, ParticipantInput};
use crate::repository::{EventRepository, ParticipantRepository};

/// Drain a cursor, skipping documents that fail to decode.
///
/// A single malformed document must not take down a whole listing; it is
/// logged and skipped, and the rest of the collection is still returned.
/// Store-level cursor errors still propagate.
async fn collect_lossy<T>(mut cursor: Cursor<T>, what: &'static str) -> DomainResult<Vec<T>>
where
    T: serde::de::DeserializeOwned + Send + Sync,
{
    let mut out = Vec::new();
    while cursor.advance().await? {
        match cursor.deserialize_current() {
            Ok(item) => out.push(item),
            Err(e) => {
                warn!(error = %e, "Skipping {} document that failed to decode", what);
            }
        }
    }
    Ok(out)
}

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<Event>,
}

impl MongoEventRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("events"),
        }
    }

    /// `$set` document replacing every mutable event field. The date goes
    /// in as a native BSON DateTime, matching the stored documents.
    fn update_document(input: &EventInput) -> Document {
        doc! {
            "$set": {
                "nome": &input.name,
                "descricao": &input.description,
                "data": DateTime::from_chrono(input.date),
                "endereco": &input.address,
                "background_color": &input.background_color,
                "text_color": &input.text_color,
            }
        }
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> DomainResult<Vec<Event>> {
        let cursor = self.collection.find(doc! {}).await?;
        collect_lossy(cursor, "event").await
    }

    #[instrument(skip(self))]
    async fn find_latest(&self) -> DomainResult<Option<Event>> {
        // Identifier recency stands in for creation recency: ObjectIds are
        // roughly time-ordered, and compatibility requires "most recently
        // inserted" semantics.
        let options = FindOneOptions::builder().sort(doc! { "_id": -1 }).build();
        let event = self
            .collection
            .find_one(doc! {})
            .with_options(options)
            .await?;
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> DomainResult<Option<Event>> {
        let event = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(event)
    }

    #[instrument(skip(self, input), fields(event_name = %input.name))]
    async fn create(&self, input: EventInput) -> DomainResult<Event> {
        let mut event = Event::from(input);

        let result = self.collection.insert_one(&event).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::Internal("inserted id is not an ObjectId".to_string()))?;
        event.id = Some(id);

        tracing::info!(event_id = %id, "Event created");
        Ok(event)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: EventInput) -> DomainResult<Event> {
        let filter = doc! { "_id": id };
        let update = Self::update_document(&input);

        let result = self.collection.update_one(filter.clone(), update).await?;
        if result.matched_count == 0 {
            return Err(DomainError::NotFound("Event"));
        }

        // Re-read so concurrent external writes are reflected
        let event = self
            .collection
            .find_one(filter)
            .await?
            .ok_or(DomainError::NotFound("Event"))?;

        tracing::info!(event_id = %id, "Event updated");
        Ok(event)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> DomainResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("Event"));
        }

        tracing::info!(event_id = %id, "Event deleted");
        Ok(())
    }
}

/// MongoDB-based participant repository
#[derive(Clone)]
pub struct MongoParticipantRepository {
    collection: Collection<Participant>,
}

impl MongoParticipantRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("participants"),
        }
    }

    /// Update document replacing the profile fields. Absent optional fields
    /// are unset rather than written as nulls; the event list is never part
    /// of this document.
    fn update_document(input: &ParticipantInput) -> Document {
        let mut set = doc! { "nome": &input.name, "email": &input.email };
        let mut unset = Document::new();

        match &input.company {
            Some(company) => {
                set.insert("empresa", company);
            }
            None => {
                unset.insert("empresa", "");
            }
        }
        match &input.profile_picture {
            Some(picture) => {
                set.insert("profile_picture_base64", picture);
            }
            None => {
                unset.insert("profile_picture_base64", "");
            }
        }

        let mut update = doc! { "$set": set };
        if !unset.is_empty() {
            update.insert("$unset", unset);
        }
        update
    }
}

#[async_trait]
impl ParticipantRepository for MongoParticipantRepository {
    #[instrument(skip(self, participant), fields(email = %participant.email))]
    async fn create(&self, participant: Participant) -> DomainResult<Participant> {
        let mut participant = participant;

        let result = self.collection.insert_one(&participant).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DomainError::Internal("inserted id is not an ObjectId".to_string()))?;
        participant.id = Some(id);

        tracing::info!(participant_id = %id, "Participant created");
        Ok(participant)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> DomainResult<Option<Participant>> {
        let participant = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(participant)
    }

    #[instrument(skip(self, email))]
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Participant>> {
        let participant = self.collection.find_one(doc! { "email": email }).await?;
        Ok(participant)
    }

    #[instrument(skip(self))]
    async fn list_by_event(&self, event_id: ObjectId) -> DomainResult<Vec<Participant>> {
        // Array containment match; an unknown event id just yields an
        // empty list.
        let cursor = self
            .collection
            .find(doc! { "eventos_participados": event_id })
            .await?;
        collect_lossy(cursor, "participant").await
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: ParticipantInput) -> DomainResult<Participant> {
        let filter = doc! { "_id": id };
        let update = Self::update_document(&input);

        let result = self.collection.update_one(filter.clone(), update).await?;
        if result.matched_count == 0 {
            return Err(DomainError::NotFound("Participant"));
        }

        let participant = self
            .collection
            .find_one(filter)
            .await?
            .ok_or(DomainError::NotFound("Participant"))?;

        tracing::info!(participant_id = %id, "Participant updated");
        Ok(participant)
    }

    #[instrument(skip(self))]
    async fn add_event(&self, id: ObjectId, event_id: ObjectId) -> DomainResult<()> {
        // $addToSet appends only when absent, preserving existing order
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$addToSet": { "eventos_participados": event_id } },
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self, company, profile_picture))]
    async fn set_profile(
        &self,
        id: ObjectId,
        company: Option<String>,
        profile_picture: Option<String>,
    ) -> DomainResult<()> {
        let mut set = Document::new();
        if let Some(company) = company {
            set.insert("empresa", company);
        }
        if let Some(picture) = profile_picture {
            set.insert("profile_picture_base64", picture);
        }
        if set.is_empty() {
            return Ok(());
        }

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> DomainResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        if result.deleted_count == 0 {
            return Err(DomainError::NotFound("Participant"));
        }

        tracing::info!(participant_id = %id, "Participant deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_update_document_replaces_all_fields() {
        let input = EventInput {
            name: "Launch".to_string(),
            description: "Product launch".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            background_color: "#fff".to_string(),
            text_color: "#000".to_string(),
            ..Default::default()
        };

        let update = MongoEventRepository::update_document(&input);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("nome").unwrap(), "Launch");
        assert_eq!(set.get_str("descricao").unwrap(), "Product launch");
        assert_eq!(set.get_str("endereco").unwrap(), "Av. Paulista, 1000");
        assert!(set.get_datetime("data").is_ok());
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_participant_update_document_never_touches_event_list() {
        let input = ParticipantInput {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            company: Some("Acme".to_string()),
            profile_picture: None,
        };

        let update = MongoParticipantRepository::update_document(&input);
        let set = update.get_document("$set").unwrap();
        assert!(!set.contains_key("eventos_participados"));
        assert_eq!(set.get_str("empresa").unwrap(), "Acme");

        let unset = update.get_document("$unset").unwrap();
        assert!(unset.contains_key("profile_picture_base64"));
        assert!(!unset.contains_key("empresa"));
    }

    #[test]
    fn test_participant_update_document_unsets_absent_optionals() {
        let input = ParticipantInput {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            company: None,
            profile_picture: None,
        };

        let update = MongoParticipantRepository::update_document(&input);
        let unset = update.get_document("$unset").unwrap();
        assert!(unset.contains_key("empresa"));
        assert!(unset.contains_key("profile_picture_base64"));
    }
}
