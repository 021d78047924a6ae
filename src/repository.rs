mod errors;
mod internal;

pub use errors::StorageError;
pub use internal::NoteRepository;
