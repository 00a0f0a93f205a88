//! Growl Relay CLI entry point

use std::process::ExitCode;

use clap::Parser;

use growl_relay::cli::{
    handle_config_command, init_logging, run_register, run_send, Cli, Commands, Presenter,
    EXIT_ERROR,
};
use growl_relay::domain::Notification;
use growl_relay::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Send {
            title,
            message,
            note_type,
            sticky,
            json,
            target,
        } => {
            let notification = Notification::new(title, message)
                .with_type(note_type.into())
                .sticky(sticky);
            run_send(notification, target, json).await
        }
        Commands::Register { target } => run_register(target).await,
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
    }
}
