use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handler::{
        create_note_handler, create_user_handler, delete_note_handler, get_note_handler,
        get_notes_by_category_handler, get_notes_handler, get_user_notes_handler,
        get_users_handler, index_handler, update_note_handler,
    },
    AppState,
};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/users", post(create_user_handler).get(get_users_handler))
        .route("/notes", get(get_notes_handler))
        .route("/notes/category/:category", get(get_notes_by_category_handler))
        .route(
            "/:user/notes",
            post(create_note_handler).get(get_user_notes_handler),
        )
        .route(
            "/:user/notes/:id",
            get(get_note_handler)
                .patch(update_note_handler)
                .delete(delete_note_handler),
        )
        .with_state(app_state)
}
