//! Build script for confsync-cli.
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
    Command::new("confsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reconcile declared configuration with a live Drupal site")
        .long_about(
            "Command-line tool for reconciling declared configuration documents with a live Drupal site via drush",
        )
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
            Arg::new("root")
                .long("root")
                .help("Override the site installation root")
                .value_name("PATH")
                .global(true)
                .env("CONFSYNC_ROOT"),
        )
        .arg(
            Arg::new("drush-path")
                .long("drush-path")
                .help("Override the path to the drush executable")
                .value_name("PATH")
                .global(true)
                .env("CONFSYNC_DRUSH_PATH"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Override the tool invocation timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("CONFSYNC_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("apply")
                .about("Reconcile a configuration entry with a desired document")
                .long_about(
                    "Fetch the current document, merge or replace it with the desired one, and import the result when it differs",
                ),
            Command::new("get")
                .about("Fetch a configuration entry and print it")
                .long_about("Fetch one configuration document from the live site"),
            Command::new("check")
                .about("Report whether an apply would change anything")
                .long_about("Build the reconciliation plan and report drift without writing"),
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

    // Generate main confsync.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("confsync.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
