use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    error::ApiError,
    request::{CreateNote, CreateUser, UpdateNote},
    response::{MessageResponse, PopulatedNote, UpdatedNote},
    store::StoreError,
    AppState,
};

const USER_NOT_FOUND: &str = "User not found.";
const NOTE_NOT_FOUND: &str = "Note not found.";
const NO_NOTES: &str = "Sorry, could not find any notes.";
const NO_USERS: &str = "Sorry, could not find any users.";

// Every domain outcome, including not-found, is a 200 whose body carries a
// message; only store failures surface as a non-2xx (via ApiError).
fn message(text: impl Into<String>) -> Response {
    Json(MessageResponse {
        message: text.into(),
    })
    .into_response()
}

// An id segment that is not a UUID can never match a stored note, so it
// falls through to the not-found message instead of a 4xx.
fn parse_note_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn create_user_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateUser>,
) -> Result<Response, ApiError> {
    match data.store.create_user(&body.name).await {
        Ok(user) => Ok(message(format!("User {} created successfully. ", user.name))),
        Err(StoreError::DuplicateUser) => Ok(message("Sorry, user could not be created.")),
        Err(err) => Err(err.into()),
    }
}

pub async fn get_users_handler(
    State(data): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let users = data.store.list_users().await?;
    if users.is_empty() {
        return Ok(message(NO_USERS));
    }
    Ok(Json(users).into_response())
}

pub async fn create_note_handler(
    State(data): State<Arc<AppState>>,
    Path(user): Path<String>,
    Json(body): Json<CreateNote>,
) -> Result<Response, ApiError> {
    let Some(owner) = data.store.find_user_by_name(&user).await? else {
        return Ok(message(USER_NOT_FOUND));
    };
    data.store
        .create_note(&body.content, &body.category, owner.id)
        .await?;
    Ok(message("Note created successfully."))
}

pub async fn get_user_notes_handler(
    State(data): State<Arc<AppState>>,
    Path(user): Path<String>,
) -> Result<Response, ApiError> {
    let Some(owner) = data.store.find_user_by_name(&user).await? else {
        return Ok(message(USER_NOT_FOUND));
    };
    let notes = data.store.list_notes_for_user(owner.id).await?;
    let notes: Vec<PopulatedNote> = notes
        .into_iter()
        .map(|note| PopulatedNote::populate(note, &owner))
        .collect();
    Ok(Json(notes).into_response())
}

pub async fn get_notes_handler(
    State(data): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let notes = data.store.list_notes().await?;
    if notes.is_empty() {
        return Ok(message(NO_NOTES));
    }
    Ok(Json(notes).into_response())
}

pub async fn get_notes_by_category_handler(
    State(data): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    let notes = data.store.list_notes_by_category(&category).await?;
    if notes.is_empty() {
        return Ok(message(NO_NOTES));
    }
    Ok(Json(notes).into_response())
}

pub async fn get_note_handler(
    State(data): State<Arc<AppState>>,
    Path((user, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let Some(owner) = data.store.find_user_by_name(&user).await? else {
        return Ok(message(USER_NOT_FOUND));
    };
    let note = match parse_note_id(&id) {
        Some(id) => data.store.find_note(id, owner.id).await?,
        None => None,
    };
    match note {
        Some(note) => Ok(Json(note).into_response()),
        None => Ok(message(NOTE_NOT_FOUND)),
    }
}

pub async fn update_note_handler(
    State(data): State<Arc<AppState>>,
    Path((user, id)): Path<(String, String)>,
    Json(body): Json<UpdateNote>,
) -> Result<Response, ApiError> {
    let Some(owner) = data.store.find_user_by_name(&user).await? else {
        return Ok(message(USER_NOT_FOUND));
    };
    let updated = match parse_note_id(&id) {
        Some(id) => {
            data.store
                .update_note(id, owner.id, body.content.as_deref(), body.category.as_deref())
                .await?
        }
        None => None,
    };
    match updated {
        Some(note) => Ok(Json(UpdatedNote {
            message: "Note updated successfully.".to_owned(),
            note,
        })
        .into_response()),
        None => Ok(message("Note not found or could not be updated.")),
    }
}

pub async fn delete_note_handler(
    State(data): State<Arc<AppState>>,
    Path((user, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let Some(owner) = data.store.find_user_by_name(&user).await? else {
        return Ok(message(USER_NOT_FOUND));
    };
    let deleted = match parse_note_id(&id) {
        Some(id) => data.store.delete_note(id, owner.id).await?,
        None => None,
    };
    match deleted {
        Some(_) => Ok(message("Note deleted successfully.")),
        None => Ok(message("Note not found or could not be deleted.")),
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Notes API</title>
  </head>
  <body>
    <section>
      Welcome to our note app!
    </section>
  </body>
</html>
"#;
