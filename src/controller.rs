mod errors;
mod internal;
mod ui;

pub use errors::NoteError;
pub use internal::{ListState, NoteListController};
pub use ui::ControllerUi;
