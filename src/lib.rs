//! # Libras Local Store
//!
//! Persisted collection store for the Libras learning app. Keeps the user's
//! saved signals, notes and search history in an embedded redb database and
//! exposes every collection operation through C-compatible functions, so the
//! UI shell (Flutter or any other embedder) drives the store through FFI the
//! same way the web client drove browser local storage.
//!
//! ## Features
//!
//! - **redb-based storage**: single-file embedded database, synchronous
//!   durable commits, survives app restarts and hot reloads
//! - **Three collections**: saved signals (toggle semantics, newest first),
//!   notes (full CRUD with validation and timestamps), search history
//!   (bounded, de-duplicated, most recent first)
//! - **Signals API client**: blocking HTTP client for the backend with a
//!   local mock fallback, so the discovery views render offline
//! - **Safe error handling**: every FFI call returns a serialized response
//!   envelope; no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use libras_local_store::{create_store, record_search};
//! use std::ffi::CString;
//!
//! // Create store instance
//! let store_name = CString::new("libras_app").unwrap();
//! let store = create_store(store_name.as_ptr());
//!
//! // Record a search
//! let query = CString::new("obrigado").unwrap();
//! let result = record_search(store, query.as_ptr());
//! ```
//!
//! ## FFI Functions
//!
//! This library exposes C-compatible functions for cross-language integration:
//!
//! - [`create_store`] - Initialize a store instance
//! - [`get_saved_signals`] / [`is_signal_saved`] / [`toggle_signal`] /
//!   [`unsave_signal`] - Saved-signals collection
//! - [`get_notes`] / [`create_note`] / [`update_note`] / [`delete_note`] -
//!   Notes collection
//! - [`get_search_history`] / [`record_search`] - Search history
//! - [`create_api`] / [`fetch_random_signals`] / [`fetch_search_signals`] /
//!   [`login_user`] / [`register_user`] - Signals API client
//! - [`clear_store`] / [`reset_store`] / [`close_store`] - Store lifecycle
//! - [`free_string`] - Release strings returned by this library

pub mod app_response;
pub mod codec;
pub mod models;
pub mod notes;
pub mod saved_signals;
pub mod search_history;
pub mod signals_api;
pub mod store_state;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::app_response::AppResponse;
use crate::models::{NoteInput, NoteUpdate, Signal};
use crate::signals_api::{LoginRequest, RegisterRequest, SignalsApi, DEFAULT_API_BASE};
use crate::store_state::AppStoreState;

/// Creates a new store instance with the specified name.
///
/// This function opens (or creates) the embedded database backing the three
/// persisted collections. The database is created as a single file with
/// `.redb` extension.
///
/// # Parameters
///
/// * `name` - A null-terminated C string containing the store name
///
/// # Returns
///
/// Returns a pointer to the [`AppStoreState`] instance on success, or a null
/// pointer on failure. The caller is responsible for managing the returned
/// pointer's lifetime.
///
/// # Safety
///
/// This function is unsafe because it:
/// - Dereferences a raw pointer without validation
/// - Returns a raw pointer that must be properly managed
/// - Requires the input string to be valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use libras_local_store::create_store;
///
/// let name = CString::new("libras_app").unwrap();
/// let store = create_store(name.as_ptr());
///
/// if !store.is_null() {
///     // Store created successfully
/// }
/// ```
///
/// # Errors
///
/// Returns null pointer if:
/// - Input name pointer is null
/// - Input string contains invalid UTF-8
/// - Database initialization fails
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_store(name: *const c_char) -> *mut AppStoreState {
    if name.is_null() {
        warn!("Null name pointer passed to create_store");
        return std::ptr::null_mut();
    }

    let name_str = match unsafe { CStr::from_ptr(name).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in name parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    let db_file = format!("{name_str}.redb");
    if Path::new(&db_file).exists() {
        info!("Opening existing store at: {db_file}");
    } else {
        info!("Creating new store at: {db_file}");
    }

    match AppStoreState::init(name_str.to_string()) {
        Ok(state) => {
            info!("✅ Store initialized successfully");
            Box::into_raw(Box::new(state))
        }
        Err(e) => {
            warn!("❌ Failed to initialize store: {e}");
            warn!("Attempted path: {db_file}");
            std::ptr::null_mut()
        }
    }
}

/// Returns the saved-signals collection, most recently saved first.
///
/// # Parameters
///
/// * `state` - Pointer to the store instance
///
/// # Returns
///
/// Returns a JSON-formatted C string containing the response envelope with
/// the signal array on success. The returned string must be released with
/// [`free_string`].
///
/// # Safety
///
/// The state parameter must be a valid pointer to an [`AppStoreState`]
/// instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_saved_signals(state: *mut AppStoreState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer".to_string());
            return response_to_c_string(&error);
        }
    };

    match state.saved_signals() {
        Ok(signals) => json_response(&signals),
        Err(e) => response_to_c_string(&e),
    }
}

/// Tests whether the signal with the given id is currently saved.
///
/// # Parameters
///
/// * `state` - Pointer to the store instance
/// * `id` - Null-terminated C string containing the signal id
///
/// # Returns
///
/// Returns a response envelope whose `Ok` payload is `"true"` or `"false"`.
///
/// # Safety
///
/// Both parameters must be valid pointers. The id string must be valid UTF-8.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn is_signal_saved(state: *mut AppStoreState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to is_signal_saved".to_string());
            return response_to_c_string(&error);
        }
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.is_signal_saved(&id_str) {
        Ok(saved) => response_to_c_string(&AppResponse::Ok(saved.to_string())),
        Err(e) => response_to_c_string(&e),
    }
}

/// Saves the signal if absent, removes it if present.
///
/// The `Ok` payload is a JSON object `{"saved": bool, "signals": [...]}` so
/// the embedder can pick the right notification ("Sinal salvo" vs "Sinal
/// removido") and re-render from the updated collection in one round trip.
///
/// # Parameters
///
/// * `state` - Pointer to the store instance
/// * `json_ptr` - Null-terminated C string containing the signal as JSON
///
/// # Safety
///
/// Both parameters must be valid pointers.
///
/// # JSON Format
///
/// Expected JSON structure:
/// ```json
/// {
///   "id": "5",
///   "title": "Olá",
///   "description": "Saudação básica",
///   "imageUrl": "https://example.com/ola.png"
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn toggle_signal(state: *mut AppStoreState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to toggle_signal".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let signal: Signal = match serde_json::from_str(&json_str) {
        Ok(s) => s,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.toggle_signal(signal) {
        Ok(outcome) => json_response(&outcome),
        Err(e) => response_to_c_string(&e),
    }
}

/// Removes a signal from the saved collection by id.
///
/// Distinct entry point from [`toggle_signal`], used by the dedicated unsave
/// affordance; removing an id that is not saved is a no-op. The `Ok` payload
/// is the updated signal array.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn unsave_signal(state: *mut AppStoreState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to unsave_signal".to_string());
            return response_to_c_string(&error);
        }
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.unsave_signal(&id_str) {
        Ok(signals) => json_response(&signals),
        Err(e) => response_to_c_string(&e),
    }
}

/// Returns the notes collection in creation order (oldest first).
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_notes(state: *mut AppStoreState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to get_notes".to_string());
            return response_to_c_string(&error);
        }
    };

    match state.notes() {
        Ok(notes) => json_response(&notes),
        Err(e) => response_to_c_string(&e),
    }
}

/// Creates a note from a `{"title": ..., "content": ...}` payload.
///
/// The store assigns a fresh UUID and the creation timestamp. Empty or
/// whitespace-only fields are rejected with a `ValidationError` envelope and
/// the collection is left untouched. The `Ok` payload is a JSON object
/// `{"note": {...}, "notes": [...]}` with the created record and the updated
/// collection.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_note(state: *mut AppStoreState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to create_note".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let input: NoteInput = match serde_json::from_str(&json_str) {
        Ok(i) => i,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.create_note(&input.title, &input.content) {
        Ok(created) => json_response(&created),
        Err(e) => response_to_c_string(&e),
    }
}

/// Edits a note in place from a `{"id": ..., "title": ..., "content": ...}`
/// payload. Position and `createdAt` are preserved; an unknown id returns the
/// collection unchanged.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_note(state: *mut AppStoreState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to update_note".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let update: NoteUpdate = match serde_json::from_str(&json_str) {
        Ok(u) => u,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.update_note(&update.id, &update.title, &update.content) {
        Ok(notes) => json_response(&notes),
        Err(e) => response_to_c_string(&e),
    }
}

/// Deletes a note by id; deleting an absent id is a no-op.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_note(state: *mut AppStoreState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to delete_note".to_string());
            return response_to_c_string(&error);
        }
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match state.delete_note(&id_str) {
        Ok(notes) => json_response(&notes),
        Err(e) => response_to_c_string(&e),
    }
}

/// Returns the search history, most recent first.
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_search_history(state: *mut AppStoreState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error = AppResponse::BadRequest(
                "Null state pointer passed to get_search_history".to_string(),
            );
            return response_to_c_string(&error);
        }
    };

    match state.search_history() {
        Ok(history) => json_response(&history),
        Err(e) => response_to_c_string(&e),
    }
}

/// Records a search query in the history.
///
/// A query already present is left in place; otherwise it is prepended and
/// the history is truncated to its ten most recent entries. The `Ok` payload
/// is the updated history array.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn record_search(state: *mut AppStoreState, query: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to record_search".to_string());
            return response_to_c_string(&error);
        }
    };

    let query_str = match c_ptr_to_string(query, "query") {
        Ok(q) => q,
        Err(error_ptr) => return error_ptr,
    };

    match state.record_search(&query_str) {
        Ok(history) => json_response(&history),
        Err(e) => response_to_c_string(&e),
    }
}

/// Creates a signals API client handle.
///
/// # Parameters
///
/// * `base_url` - Null-terminated C string with the backend base URL, or
///   null to use the development default (`http://localhost:5000`)
///
/// # Returns
///
/// Returns a pointer to the [`SignalsApi`] instance, or null on failure. The
/// cookie store lives on this handle, so the auth session persists across
/// calls that reuse it.
///
/// # Safety
///
/// A non-null `base_url` must point to a valid C string.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_api(base_url: *const c_char) -> *mut SignalsApi {
    let base = if base_url.is_null() {
        DEFAULT_API_BASE.to_string()
    } else {
        match unsafe { CStr::from_ptr(base_url).to_str() } {
            Ok(s) => s.to_string(),
            Err(e) => {
                warn!("Invalid UTF-8 in base_url parameter: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    match SignalsApi::new(base) {
        Ok(api) => Box::into_raw(Box::new(api)),
        Err(e) => {
            warn!("❌ Failed to build API client: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Fetches up to `limit` signals for the discovery grid.
///
/// Never fails on the read path: when the backend is unreachable the `Ok`
/// payload carries the local mock catalog instead.
///
/// # Safety
///
/// The api parameter must be a valid pointer to a [`SignalsApi`] instance.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fetch_random_signals(api: *mut SignalsApi, limit: u32) -> *const c_char {
    let api = match unsafe { api.as_ref() } {
        Some(a) => a,
        None => {
            let error = AppResponse::BadRequest(
                "Null api pointer passed to fetch_random_signals".to_string(),
            );
            return response_to_c_string(&error);
        }
    };

    json_response(&api.random_signals(limit as usize))
}

/// Searches signals by query, falling back to the local mock result when the
/// backend is unreachable.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn fetch_search_signals(api: *mut SignalsApi, query: *const c_char) -> *const c_char {
    let api = match unsafe { api.as_ref() } {
        Some(a) => a,
        None => {
            let error = AppResponse::BadRequest(
                "Null api pointer passed to fetch_search_signals".to_string(),
            );
            return response_to_c_string(&error);
        }
    };

    let query_str = match c_ptr_to_string(query, "query") {
        Ok(q) => q,
        Err(error_ptr) => return error_ptr,
    };

    json_response(&api.search_signals(&query_str))
}

/// Authenticates with a `{"email": ..., "senha": ...}` payload.
///
/// A server-side rejection surfaces the backend's own error message in a
/// `BadRequest` envelope; a transport failure surfaces as `NetworkError`.
/// There is no retry.
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn login_user(api: *mut SignalsApi, json_ptr: *const c_char) -> *const c_char {
    let api = match unsafe { api.as_ref() } {
        Some(a) => a,
        None => {
            let error = AppResponse::BadRequest("Null api pointer passed to login_user".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let request: LoginRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match api.login(&request) {
        Ok(()) => response_to_c_string(&AppResponse::success("Login realizado com sucesso!")),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Creates an account with the registration payload (`nome`, `sobrenome`,
/// `email`, `senha`, `matricula`). Error semantics match [`login_user`].
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn register_user(api: *mut SignalsApi, json_ptr: *const c_char) -> *const c_char {
    let api = match unsafe { api.as_ref() } {
        Some(a) => a,
        None => {
            let error =
                AppResponse::BadRequest("Null api pointer passed to register_user".to_string());
            return response_to_c_string(&error);
        }
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let request: RegisterRequest = match serde_json::from_str(&json_str) {
        Ok(r) => r,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match api.register(&request) {
        Ok(()) => response_to_c_string(&AppResponse::success(
            "Conta criada com sucesso! Faça login para continuar.",
        )),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Clears all three collections while keeping the store operational.
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn clear_store(state: *mut AppStoreState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => {
            let error =
                AppResponse::BadRequest("Null state pointer passed to clear_store".to_string());
            return response_to_c_string(&error);
        }
    };

    match state.clear_all_records() {
        Ok(()) => response_to_c_string(&AppResponse::success("All collections cleared successfully")),
        Err(e) => response_to_c_string(&e),
    }
}

/// Resets the store to a clean state with a new name.
///
/// This operation:
/// 1. Closes the current database connection
/// 2. Removes the existing database file
/// 3. Creates a new database with the specified name
///
/// # Safety
///
/// Both parameters must be valid pointers.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn reset_store(state: *mut AppStoreState, name_ptr: *const c_char) -> *const c_char {
    if state.is_null() {
        let error = AppResponse::BadRequest("Null state pointer passed to reset_store".to_string());
        return response_to_c_string(&error);
    }

    let name = match c_ptr_to_string(name_ptr, "name") {
        Ok(name) => name,
        Err(error_ptr) => return error_ptr,
    };

    let state = unsafe { &mut *state };

    match state.reset_store(&name) {
        Ok(()) => response_to_c_string(&AppResponse::success(format!(
            "Store '{name}' was reset successfully"
        ))),
        Err(e) => response_to_c_string(&e),
    }
}

/// Explicitly closes the store's database connection.
///
/// Useful for hot-restart scenarios where the backing file must be released
/// before the embedder reconnects. After closing, every collection operation
/// on this handle fails with a `DatabaseError` envelope; closing twice is a
/// no-op.
///
/// # Safety
///
/// The state parameter must be a valid pointer.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_store(state: *mut AppStoreState) -> *const c_char {
    if state.is_null() {
        let error = AppResponse::BadRequest("Null state pointer passed to close_store".to_string());
        return response_to_c_string(&error);
    }

    let state = unsafe { &mut *state };

    match state.close_store() {
        Ok(()) => response_to_c_string(&AppResponse::success("Store connection closed successfully")),
        Err(e) => response_to_c_string(&e),
    }
}

/// Releases a string previously returned by this library.
///
/// # Safety
///
/// The pointer must have been produced by one of this library's functions
/// and must not be used after this call. Passing null is a no-op.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr));
    }
}

/// Serializes a payload into an `Ok` envelope C string.
fn json_response<T: Serialize>(value: &T) -> *const c_char {
    match serde_json::to_string(value) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Failed to serialize result: {e}"));
            response_to_c_string(&error)
        }
    }
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// Returns a null pointer if serialization or C string creation fails; the
/// caller releases the string with [`free_string`].
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String, reporting null pointers and
/// invalid UTF-8 as `BadRequest` envelopes.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
