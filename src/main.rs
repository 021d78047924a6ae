use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use figment::Figment;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pocketnotes::backend::{Platform, select_backend};
use pocketnotes::bin_constants::DEFAULT_CONFIG_FILE;
use pocketnotes::cli::{Cli, Command, TerminalUi};
use pocketnotes::config::{AppConfig, FigmentExt};
use pocketnotes::controller::{ListState, NoteListController};
use pocketnotes::identity::IdentityProvider;
use pocketnotes::logging::init_logging;
use pocketnotes::repository::NoteRepository;
use pocketnotes::rng::SyncRng;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    let config_file = cli.config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config: AppConfig =
        Figment::new().setup_app_config(config_file).extract()?;

    let backend =
        select_backend(Platform::detect(&config), &config).await?;
    let rng = SyncRng::new(StdRng::from_os_rng());
    let identity = IdentityProvider::new(backend.clone(), rng.clone());

    match cli.command {
        Command::Whoami => {
            let user = identity.current_user().await?;
            println!("{} ({})", user.id, user.name);
        }
        Command::Logout => {
            let user = identity.logout().await?;
            println!("logged out; new identity is {}", user.id);
        }
        command => {
            let user = identity.current_user().await?;
            let assume_yes =
                matches!(command, Command::Delete { yes: true, .. });
            let mut controller = NoteListController::new(
                NoteRepository::new(backend),
                TerminalUi::new(assume_yes),
                rng,
                user,
            );
            controller.load().await;
            if let ListState::Errored { message } = controller.state() {
                eprintln!("{message}");
            }
            return run_note_command(&mut controller, command).await;
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn run_note_command(
    controller: &mut NoteListController<TerminalUi>,
    command: Command,
) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Command::List => {
            for note in controller.notes() {
                println!("{}\t{}", note.id, note.text);
            }
        }
        Command::Add { text } => {
            if let Err(e) = controller.add_note(&text).await {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
            if let Some(note) = controller.notes().last() {
                println!("{}", note.id);
            }
        }
        Command::Edit { id, text } => {
            if let Err(e) = controller.edit_note(&id, &text).await {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Delete { id, .. } => {
            controller.delete_note(&id).await;
        }
        // resolved before the controller is built
        Command::Whoami | Command::Logout => (),
    }
    Ok(ExitCode::SUCCESS)
}
