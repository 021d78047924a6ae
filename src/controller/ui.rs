use async_trait::async_trait;

use crate::data::Note;

// the interactive surface of the note list: a yes/no prompt and a
// dismissible alert
#[async_trait]
pub trait ControllerUi: Send + Sync {
    async fn confirm_delete(&self, note: &Note) -> bool;

    async fn show_alert(&self, title: &str, message: &str);
}
