use serde::Serialize;
use uuid::Uuid;

use crate::model::{Note, User};

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Owner fields embedded in a populated note. The owner's internal id is
/// deliberately absent from the wire format.
#[derive(Serialize, Debug)]
pub struct NoteOwner {
    pub name: String,
}

/// A note with its `userId` reference replaced by the owner's public fields.
#[derive(Serialize, Debug)]
pub struct PopulatedNote {
    pub id: Uuid,
    pub content: String,
    pub category: String,
    #[serde(rename = "userId")]
    pub owner: NoteOwner,
}

impl PopulatedNote {
    pub fn populate(note: Note, owner: &User) -> Self {
        PopulatedNote {
            id: note.id,
            content: note.content,
            category: note.category,
            owner: NoteOwner {
                name: owner.name.to_owned(),
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct UpdatedNote {
    pub message: String,
    pub note: Note,
}
