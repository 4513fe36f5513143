//! Build script for flysky-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("flysky")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book and manage flight reservations")
        .long_about("Command-line tool for booking, browsing, editing, and cancelling flight reservations stored in a local SQLite file")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .help("Override the reservations database location")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ./flysky.yaml")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("book")
                .about("Book a new reservation")
                .long_about("Book a seat from the six reservation fields and print the new id"),
            Command::new("list")
                .about("List all reservations")
                .long_about("Display every reservation as a table, JSON, CSV, or TSV"),
            Command::new("search")
                .about("Search reservations by name, flight, or airport")
                .long_about("Case-insensitive substring search over name, flight number, departure, and destination"),
            Command::new("show")
                .about("Show a single reservation")
                .long_about("Display one reservation by id"),
            Command::new("edit")
                .about("Change fields of an existing reservation")
                .long_about("Update the given fields of a reservation, keeping the others"),
            Command::new("cancel")
                .about("Cancel (delete) a reservation")
                .long_about("Delete a reservation after confirmation, or immediately with --yes"),
            Command::new("seed")
                .about("Add the sample reservations")
                .long_about("Populate an empty database with five sample reservations"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("flysky.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
