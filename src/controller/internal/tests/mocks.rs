use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::controller::ControllerUi;
use crate::data::Note;

// scripted confirmation plus a record of every prompt and alert
pub struct ScriptedUi {
    confirm: AtomicBool,
    prompts: Mutex<Vec<Note>>,
    alerts: Mutex<Vec<(String, String)>>,
}

impl ScriptedUi {
    pub fn confirming() -> Self {
        Self::new(true)
    }

    pub fn declining() -> Self {
        Self::new(false)
    }

    fn new(confirm: bool) -> Self {
        ScriptedUi {
            confirm: AtomicBool::new(confirm),
            prompts: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<Note> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl<'a> ControllerUi for &'a ScriptedUi {
    async fn confirm_delete(&self, note: &Note) -> bool {
        self.prompts.lock().unwrap().push(note.clone());
        self.confirm.load(Ordering::Relaxed)
    }

    async fn show_alert(&self, title: &str, message: &str) {
        self.alerts.lock().unwrap()
            .push((title.to_owned(), message.to_owned()));
    }
}
