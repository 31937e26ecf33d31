use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use intake_cli::cli::{handle_steps_command, run_prompt_wizard};
use intake_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Terminal-based lead intake wizard for microcement renovation projects",
    long_about = "intake-cli walks a prospect through a six-step intake form for a \
                  microcement renovation service: who they are, who the project is \
                  for, the target space, the approximate area, the current \
                  substrate, and contact details. Answers stay local; a completed \
                  session can optionally be written to a JSON file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the wizard full-screen (default)
    #[command(alias = "ui")]
    Tui {
        /// Write the completed lead to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the wizard as plain line prompts
    Prompt {
        /// Write the completed lead to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the step registry
    Steps {
        /// Also show the derived option image paths
        #[arg(long)]
        images: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            run_tui(None)?;
        }
        Some(Commands::Tui { output }) => {
            run_tui(output.as_deref())?;
        }
        Some(Commands::Prompt { output }) => {
            run_prompt_wizard(output.as_deref())?;
        }
        Some(Commands::Steps { images }) => {
            handle_steps_command(images);
        }
    }

    Ok(())
}
