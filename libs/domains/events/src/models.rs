//! Event and participant domain models.
//!
//! The BSON/JSON field names are the legacy Portuguese keys (`nome`,
//! `descricao`, `eventos_participados`, ...) that the stored documents and
//! the existing frontend already use; Rust-side names are English and serde
//! renames bridge the two. Request DTOs default every field so a body like
//! `{"nome": "Launch"}` decodes without complaint — there is deliberately no
//! validation beyond type decoding.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Event entity, persisted in the `events` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier (absent until inserted)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    /// Stored as a native BSON DateTime; existing documents hold that type
    #[serde(
        rename = "data",
        default,
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub date: DateTime<Utc>,
    #[serde(rename = "endereco", default)]
    pub address: String,
    /// Credential background color (display hint)
    #[serde(default)]
    pub background_color: String,
    /// Credential text color (display hint)
    #[serde(default)]
    pub text_color: String,
}

/// Request body for creating or fully replacing an event.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EventInput {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "data", default)]
    pub date: DateTime<Utc>,
    #[serde(rename = "endereco", default)]
    pub address: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub text_color: String,
}

impl From<EventInput> for Event {
    fn from(input: EventInput) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            date: input.date,
            address: input.address,
            background_color: input.background_color,
            text_color: input.text_color,
        }
    }
}

/// Event as rendered on the HTTP surface: the ObjectId becomes a plain
/// 24-character hex string under `id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data")]
    pub date: DateTime<Utc>,
    #[serde(rename = "endereco")]
    pub address: String,
    pub background_color: String,
    pub text_color: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: event.name,
            description: event.description,
            date: event.date,
            address: event.address,
            background_color: event.background_color,
            text_color: event.text_color,
        }
    }
}

/// Participant entity, persisted in the `participants` collection.
///
/// `event_ids` is append-ordered and duplicate-free; only the linking rule
/// in the participant service mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "empresa", default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Base64-encoded image payload
    #[serde(
        rename = "profile_picture_base64",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<String>,
    #[serde(rename = "eventos_participados", default)]
    pub event_ids: Vec<ObjectId>,
}

/// Request body for registering or updating a participant.
///
/// The event list is never part of the payload: registration links to the
/// latest event automatically, and updates leave the list untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ParticipantInput {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "empresa", default)]
    pub company: Option<String>,
    #[serde(rename = "profile_picture_base64", default)]
    pub profile_picture: Option<String>,
}

/// Participant as rendered on the HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "empresa", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        rename = "profile_picture_base64",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture: Option<String>,
    #[serde(rename = "eventos_participados")]
    pub event_ids: Vec<String>,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: participant.name,
            email: participant.email,
            company: participant.company,
            profile_picture: participant.profile_picture,
            event_ids: participant
                .event_ids
                .iter()
                .map(|id| id.to_hex())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_input_decodes_with_missing_fields() {
        let input: EventInput = serde_json::from_value(json!({ "nome": "Launch" })).unwrap();
        assert_eq!(input.name, "Launch");
        assert_eq!(input.description, "");
        assert_eq!(input.date, DateTime::<Utc>::default());
        assert_eq!(input.background_color, "");
    }

    #[test]
    fn test_event_input_decodes_empty_body() {
        let input: EventInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.name, "");
    }

    #[test]
    fn test_event_bson_uses_legacy_keys() {
        let event = Event {
            id: Some(ObjectId::new()),
            name: "Launch".to_string(),
            description: "Product launch".to_string(),
            date: Utc::now(),
            address: "Av. Paulista, 1000".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
        };

        let doc = mongodb::bson::to_document(&event).unwrap();
        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("nome"));
        assert!(doc.contains_key("descricao"));
        assert!(doc.contains_key("data"));
        assert!(doc.contains_key("endereco"));
        assert!(!doc.contains_key("name"));
    }

    #[test]
    fn test_event_date_stored_as_bson_datetime() {
        let date = Utc::now();
        let event = Event {
            id: None,
            name: "Launch".to_string(),
            description: String::new(),
            date,
            address: String::new(),
            background_color: String::new(),
            text_color: String::new(),
        };

        let doc = mongodb::bson::to_document(&event).unwrap();
        match doc.get("data") {
            Some(mongodb::bson::Bson::DateTime(stored)) => {
                assert_eq!(stored.timestamp_millis(), date.timestamp_millis());
            }
            other => panic!("data stored as {:?}, expected a BSON DateTime", other),
        }
    }

    #[test]
    fn test_event_decodes_bson_datetime_date() {
        let date = mongodb::bson::DateTime::now();
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "nome": "Launch",
            "data": date,
        };

        let event: Event = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(event.date.timestamp_millis(), date.timestamp_millis());
    }

    #[test]
    fn test_event_response_renders_hex_id() {
        let id = ObjectId::new();
        let event = Event {
            id: Some(id),
            name: "Launch".to_string(),
            description: String::new(),
            date: Utc::now(),
            address: String::new(),
            background_color: String::new(),
            text_color: String::new(),
        };

        let value = serde_json::to_value(EventResponse::from(event)).unwrap();
        assert_eq!(value["id"], json!(id.to_hex()));
        assert_eq!(value["nome"], json!("Launch"));
        assert_eq!(value["id"].as_str().unwrap().len(), 24);
    }

    #[test]
    fn test_participant_serializes_without_optional_fields() {
        let participant = Participant {
            id: Some(ObjectId::new()),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            company: None,
            profile_picture: None,
            event_ids: vec![],
        };

        let doc = mongodb::bson::to_document(&participant).unwrap();
        assert!(!doc.contains_key("empresa"));
        assert!(!doc.contains_key("profile_picture_base64"));
        assert!(doc.contains_key("eventos_participados"));
    }

    #[test]
    fn test_participant_response_renders_event_ids_as_hex() {
        let event_id = ObjectId::new();
        let participant = Participant {
            id: Some(ObjectId::new()),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            company: Some("Acme".to_string()),
            profile_picture: None,
            event_ids: vec![event_id],
        };

        let value = serde_json::to_value(ParticipantResponse::from(participant)).unwrap();
        assert_eq!(value["eventos_participados"], json!([event_id.to_hex()]));
        assert_eq!(value["empresa"], json!("Acme"));
        assert!(value.get("profile_picture_base64").is_none());
    }

    #[test]
    fn test_participant_input_decodes_email_only() {
        let input: ParticipantInput =
            serde_json::from_value(json!({ "email": "a@x.com" })).unwrap();
        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.name, "");
        assert!(input.company.is_none());
    }

    #[test]
    fn test_participant_decodes_legacy_document() {
        let doc = mongodb::bson::doc! {
            "_id": ObjectId::new(),
            "nome": "Ana",
            "email": "ana@example.com",
            "empresa": "Acme",
            "eventos_participados": [ObjectId::new()],
        };

        let participant: Participant = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(participant.name, "Ana");
        assert_eq!(participant.company.as_deref(), Some("Acme"));
        assert!(participant.profile_picture.is_none());
        assert_eq!(participant.event_ids.len(), 1);
    }
}
