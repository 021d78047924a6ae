use rand::rngs::StdRng;

use crate::controller::{ControllerUi, NoteError};
use crate::data::{Note, User};
use crate::repository::NoteRepository;
use crate::rng::{SyncRng, make_note_id};
use crate::util::StrExt;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListState {
    Uninitialized,
    Loading,
    Ready,
    Errored { message: String },
}

// Mutations update the in-memory list first and keep it even when the
// save fails; the user only gets an alert. Mutating methods take
// &mut self, so read-modify-write cycles for the session's collection
// cannot interleave within a process.
pub struct NoteListController<U: ControllerUi> {
    repository: NoteRepository,
    ui: U,
    rng: SyncRng<StdRng>,
    session: User,
    state: ListState,
    notes: Vec<Note>,
}

impl<U: ControllerUi> NoteListController<U> {
    pub fn new(
        repository: NoteRepository,
        ui: U,
        rng: SyncRng<StdRng>,
        session: User,
    ) -> NoteListController<U> {
        NoteListController {
            repository,
            ui,
            rng,
            session,
            state: ListState::Uninitialized,
            notes: Vec::new(),
        }
    }

    // failed loads degrade to an empty list behind an error banner
    pub async fn load(&mut self) {
        self.state = ListState::Loading;
        match self.repository.load(&self.session.id).await {
            Ok(notes) => {
                self.notes = notes;
                self.state = ListState::Ready;
            }
            Err(e) => {
                log::error!(
                    "failed to load notes for {}: {e}",
                    self.session.id,
                );
                self.notes = Vec::new();
                self.state = ListState::Errored {
                    message: format!("Failed to load notes: {e}"),
                };
            }
        }
    }

    pub async fn switch_user(&mut self, session: User) {
        self.session = session;
        self.load().await;
    }

    pub async fn add_note(&mut self, text: &str) -> Result<(), NoteError> {
        if text.is_blank() {
            return Err(NoteError::EmptyText);
        }
        let id = make_note_id(&mut *self.rng.get_rng());
        self.notes.push(Note { id, text: text.to_owned() });
        self.persist().await;
        Ok(())
    }

    // replaces the text in place; id and position stay put. Editing an
    // id that is no longer there is a no-op.
    pub async fn edit_note(
        &mut self,
        id: &str,
        text: &str,
    ) -> Result<(), NoteError> {
        if text.is_blank() {
            return Err(NoteError::EmptyText);
        }
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return Ok(());
        };
        note.text = text.to_owned();
        self.persist().await;
        Ok(())
    }

    pub async fn delete_note(&mut self, id: &str) {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return;
        };
        if !self.ui.confirm_delete(note).await {
            return;
        }
        self.notes.retain(|n| n.id != id);
        self.persist().await;
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn session(&self) -> &User {
        &self.session
    }

    async fn persist(&mut self) {
        if let Err(e) =
            self.repository.save(&self.session.id, &self.notes).await
        {
            log::error!(
                "failed to save notes for {}: {e}",
                self.session.id,
            );
            self.ui
                .show_alert("Error", &format!("Failed to save notes: {e}"))
                .await;
        }
    }
}
