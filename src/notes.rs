//! CRUD for the notes collection plus the editor draft state machine.
//!
//! Notes append in creation order (oldest first, unlike saved signals).
//! Title and content must be non-empty after trimming; `created_at` is set
//! once and preserved across edits.

use chrono::Utc;
use uuid::Uuid;

use crate::app_response::AppResponse;
use crate::models::{CreatedNote, Note};
use crate::store_state::{AppStoreState, KEY_NOTES};

fn validate_note_fields(title: &str, content: &str) -> Result<(), AppResponse> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(AppResponse::ValidationError(
            "Preencha título e descrição da anotação".to_string(),
        ));
    }
    Ok(())
}

impl AppStoreState {
    /// Returns the persisted notes collection in creation order.
    pub fn notes(&self) -> Result<Vec<Note>, AppResponse> {
        self.load_collection(KEY_NOTES)
    }

    /// Creates a note with a fresh UUID and the current instant, appended at
    /// the end of the collection. Fails with `ValidationError` (collection
    /// untouched) when either field trims to empty.
    pub fn create_note(&self, title: &str, content: &str) -> Result<CreatedNote, AppResponse> {
        validate_note_fields(title, content)?;
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        let mut notes = self.notes()?;
        notes.push(note.clone());
        self.store_collection(KEY_NOTES, &notes)?;
        Ok(CreatedNote { note, notes })
    }

    /// Replaces title and content of the matching note in place, preserving
    /// its position and `created_at`. An unknown id leaves the collection
    /// unchanged and is not an error.
    pub fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Vec<Note>, AppResponse> {
        validate_note_fields(title, content)?;
        let mut notes = self.notes()?;
        if let Some(note) = notes.iter_mut().find(|n| n.id == id) {
            note.title = title.to_string();
            note.content = content.to_string();
            self.store_collection(KEY_NOTES, &notes)?;
        }
        Ok(notes)
    }

    /// Unconditional removal by id; deleting an absent id is a no-op.
    pub fn delete_note(&self, id: &str) -> Result<Vec<Note>, AppResponse> {
        let mut notes = self.notes()?;
        notes.retain(|n| n.id != id);
        self.store_collection(KEY_NOTES, &notes)?;
        Ok(notes)
    }
}

/// Which draft, if any, the editor currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    Creating,
    /// Editing the stored note with this id.
    Editing(String),
}

/// Per-view draft state for the notes panel. Never persisted; a view builds
/// a fresh editor when it becomes visible. At most one draft is active at a
/// time: starting a new draft replaces the previous one.
#[derive(Debug, Default)]
pub struct NoteEditor {
    mode: EditorMode,
    pub title: String,
    pub content: String,
}

impl NoteEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode != EditorMode::Idle
    }

    /// Opens an empty draft for a new note.
    pub fn begin_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.title.clear();
        self.content.clear();
    }

    /// Opens a draft pre-filled from the stored note's current title and
    /// content. An unknown id leaves the editor as it was.
    pub fn begin_edit(&mut self, store: &AppStoreState, id: &str) -> Result<(), AppResponse> {
        let notes = store.notes()?;
        if let Some(note) = notes.iter().find(|n| n.id == id) {
            self.title = note.title.clone();
            self.content = note.content.clone();
            self.mode = EditorMode::Editing(id.to_string());
        }
        Ok(())
    }

    /// Persists the draft through create or update according to the mode and
    /// returns to idle. A validation failure keeps the draft open so the view
    /// can surface the message inline.
    pub fn save(&mut self, store: &AppStoreState) -> Result<Vec<Note>, AppResponse> {
        let notes = match &self.mode {
            EditorMode::Idle => return store.notes(),
            EditorMode::Creating => store.create_note(&self.title, &self.content)?.notes,
            EditorMode::Editing(id) => store.update_note(id, &self.title, &self.content)?,
        };
        self.cancel();
        Ok(notes)
    }

    /// Discards the draft and returns to idle.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Idle;
        self.title.clear();
        self.content.clear();
    }
}
