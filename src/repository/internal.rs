use std::sync::Arc;

use crate::backend::Backend;
use crate::data::Note;
use crate::lib_constants::{KEY_FILLER, NOTES_KEY_PREFIX};
use crate::repository::StorageError;
use crate::user_id::UserId;
use crate::util::StrExt;


pub struct NoteRepository {
    backend: Arc<dyn Backend>,
}

impl NoteRepository {
    pub fn new(backend: Arc<dyn Backend>) -> NoteRepository {
        NoteRepository { backend }
    }

    // "no notes yet" is the common case on first use, so an absent or
    // blank value is an empty collection, never an error
    pub async fn load(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Note>, StorageError> {
        match self.backend.read(&notes_key(user_id)).await? {
            None => Ok(Vec::new()),
            Some(contents) if contents.is_blank() => Ok(Vec::new()),
            Some(contents) => serde_json::from_str(&contents)
                .map_err(StorageError::Malformed),
        }
    }

    // whole-collection replace; there is no append or patch path
    pub async fn save(
        &self,
        user_id: &UserId,
        notes: &[Note],
    ) -> Result<(), StorageError> {
        let data = serde_json::to_string(notes)?;
        Ok(self.backend.write(&notes_key(user_id), &data).await?)
    }
}

// TODO: the replacement is not injective for exotic ids ("a.b" and
//  "a_b" collide); fine for generated guest ids, which only ever
//  contain a hyphen
fn notes_key(user_id: &UserId) -> String {
    let safe: String = user_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { KEY_FILLER })
        .collect();
    format!("{NOTES_KEY_PREFIX}{safe}")
}
