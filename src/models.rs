//! Data model definitions for the persisted collections.
//!
//! This module defines the record shapes stored by the collection store:
//! [`Signal`] for saved vocabulary entries and [`Note`] for user annotations,
//! plus the outcome types returned by mutating operations. All models use
//! camelCase JSON field names, byte-compatible with the collection blobs the
//! web client historically wrote to browser local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sign-language vocabulary entry that the user can bookmark.
///
/// The `id` is assigned by the signals backend and is the record's identity:
/// the saved-signals collection never holds two entries with the same `id`.
/// A saved signal is immutable; the only operations are saving and removing.
///
/// # Examples
///
/// ```rust
/// use libras_local_store::models::Signal;
///
/// let signal = Signal {
///     id: "5".to_string(),
///     title: "Olá".to_string(),
///     description: "Saudação básica".to_string(),
///     video_url: None,
///     image_url: Some("https://via.placeholder.com/300x200?text=Ola".to_string()),
/// };
/// ```
///
/// Optional media fields are omitted from the serialized form when absent,
/// so records written by older clients (which never set `videoUrl`) decode
/// and re-encode without growing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Backend-assigned identifier, the record's identity within the collection.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A free-text user annotation with title, content and creation timestamp.
///
/// The `id` is a UUID generated when the note is created. `created_at` is set
/// once at creation and preserved verbatim across edits; only `title` and
/// `content` are mutable, and both must be non-empty after trimming.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation instant, serialized as an ISO-8601 / RFC 3339 string.
    pub created_at: DateTime<Utc>,
}

/// Result of a toggle-save: the net effect plus the updated collection.
///
/// `saved` tells the caller which notification to show ("Sinal salvo" vs
/// "Sinal removido").
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToggleOutcome {
    pub saved: bool,
    pub signals: Vec<Signal>,
}

/// Result of note creation: the fresh record plus the updated collection.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatedNote {
    pub note: Note,
    pub notes: Vec<Note>,
}

/// Incoming payload for note creation at the FFI boundary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

/// Incoming payload for an in-place note edit at the FFI boundary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NoteUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
}
