//! Main entry point for the flysky CLI.
//!
//! This is the command-line interface for the flysky reservation store.
//! It provides commands for managing flight reservations:
//! - `book`: Book a new reservation
//! - `list` / `search` / `show`: Browse reservations
//! - `edit` / `cancel`: Change or remove a reservation
//! - `seed`: Add sample reservations

use clap::Parser;
use flysky_cli::cli::{Cli, Command};
use flysky_cli::error::CliError;
use flysky_cli::utils::{load_configuration, open_store, GlobalOptions};

fn main() {
    // Parse CLI arguments; usage errors use the invalid-arguments exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 4 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Route library log records to stderr based on verbosity
    if let Err(e) = flysky::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        database: cli.database,
        config: cli.config,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    match run(cli.command, &global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Opens the store once, runs `command` against it, and closes it.
fn run(command: Command, global: &GlobalOptions) -> Result<(), CliError> {
    if let Command::Completions(cmd) = command {
        return cmd.execute(global);
    }

    let config = load_configuration(global)?;
    let mut store = open_store(&config)?;

    let result = match command {
        Command::Book(cmd) => cmd.execute(global, &mut store),
        Command::List(cmd) => cmd.execute(&config, &store),
        Command::Search(cmd) => cmd.execute(&config, &store),
        Command::Show(cmd) => cmd.execute(&config, &store),
        Command::Edit(cmd) => cmd.execute(global, &config, &mut store),
        Command::Cancel(cmd) => cmd.execute(global, &mut store),
        Command::Seed(cmd) => cmd.execute(global, &mut store),
        Command::Completions(cmd) => cmd.execute(global),
    };

    let closed = store.close().map_err(CliError::from);
    result.and(closed)
}
