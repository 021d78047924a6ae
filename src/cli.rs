use std::path::PathBuf;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::controller::ControllerUi;
use crate::data::Note;

#[derive(Debug, Parser)]
#[command(about = "local notes, one guest identity per device")]
pub struct Cli {
    /// config file; defaults are used when it does not exist
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// print the current notes
    List,

    /// add a note
    Add {
        text: String,
    },

    /// replace the text of an existing note
    Edit {
        id: String,
        text: String,
    },

    /// delete a note after confirmation
    Delete {
        id: String,

        /// skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// print the current guest identity
    Whoami,

    /// discard the current identity and start a fresh guest one
    Logout,
}

pub struct TerminalUi {
    assume_yes: bool,
}

impl TerminalUi {
    pub fn new(assume_yes: bool) -> TerminalUi {
        TerminalUi { assume_yes }
    }
}

#[async_trait]
impl ControllerUi for TerminalUi {
    async fn confirm_delete(&self, note: &Note) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("Delete note \"{}\"? [y/N] ", note.text);
        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        if stdin.read_line(&mut line).await.is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }

    async fn show_alert(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
