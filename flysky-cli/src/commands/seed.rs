//! Seed command implementation.
//!
//! Adds the built-in sample reservations so a fresh database has something
//! to show. A database that already holds reservations is left alone unless
//! `--force` is given.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use flysky::operations::seed;
use flysky::ReservationStore;

/// Add the sample reservations.
#[derive(Args)]
pub struct SeedCommand {
    /// Add the samples even if reservations already exist
    #[arg(long)]
    pub force: bool,
}

impl SeedCommand {
    /// Execute the seed command.
    pub fn execute(
        self,
        global: &GlobalOptions,
        store: &mut ReservationStore,
    ) -> Result<(), CliError> {
        let report = seed(store, self.force)?;

        if report.skipped {
            if !global.quiet {
                eprintln!("Database already has reservations; use --force to add samples anyway");
            }
            return Ok(());
        }

        if report.failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{} of {} sample reservations could not be stored",
                report.failed,
                report.failed + report.inserted.len()
            )));
        }

        if !global.quiet {
            eprintln!("Added {} sample reservations", report.inserted.len());
        }

        Ok(())
    }
}
