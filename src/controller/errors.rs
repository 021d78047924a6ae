use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoteError {
    // rejected uniformly for both add and edit
    #[error("note text must not be empty")]
    EmptyText,
}
