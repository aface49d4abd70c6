mod monitor;
mod ports;
mod ui;
mod utils;
pub use utils::*;

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::io::Write;
use utils::terminal::with_terminal;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: CommonOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
pub struct CommonOptions {
    /// Log verbosity level
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Watch the pedal and log what it plays
    Monitor(monitor::Options),
    /// List MIDI ports visible to the host
    Ports,
    /// `footsy completions --generate=zsh > footsy.zsh`
    Completions(Completions),
}

#[derive(Debug, Parser)]
#[command(arg_required_else_help(true))]
struct Completions {
    /// shell to generate the completion script for
    #[arg(long = "generate", value_enum)]
    shell: Option<clap_complete::Shell>,
}

impl Completions {
    fn generate(&self) -> anyhow::Result<()> {
        let Some(shell) = self.shell else {
            anyhow::bail!("no shell specified for autocompletion generation");
        };

        let mut stdout = std::io::stdout();
        stdout.flush()?;

        let mut cli = Cli::command();
        clap_complete::generate(shell, &mut cli, "footsy", &mut stdout);

        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if let Commands::Completions(ref c) = args.command {
        return c.generate();
    }

    let app_result = match args.command {
        Commands::Ports => ports::run(),
        command => with_terminal(move |term| match command {
            Commands::Monitor(opts) => monitor::run(term, opts, args.opts),
            _ => Ok(()),
        }),
    };

    if let Err(e) = app_result {
        if logger::is_active() {
            log::error!("{e}");
        } else {
            use colored::*;
            eprintln!("{} {}", "Error:".red().bold(), format!("{e}").bold());
        }
    }

    Ok(())
}
