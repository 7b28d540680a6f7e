//! CLI for the ldpc Linked Data Platform client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ldpc_core::config;

use commands::{run_get, run_show};

/// Top-level CLI for the ldpc client.
#[derive(Debug, Parser)]
#[command(name = "ldpc")]
#[command(about = "ldpc: command-line client for Linked Data Platform servers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Retrieve a resource, cache it, and persist its body to a file.
    Get {
        /// Target resource location (URL).
        target: String,

        /// Content type to request (default from config, text/turtle).
        #[arg(long, value_name = "MIME")]
        content_type: Option<String>,

        /// Output file for the retrieved entity (default: next free resource_<n>.out).
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Display a previously cached resource.
    Show {
        /// Target resource location (URL).
        target: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                target,
                content_type,
                output,
            } => run_get(&cfg, target, content_type, output),
            CliCommand::Show { target } => run_show(&cfg, target),
        }
    }
}

#[cfg(test)]
mod tests;
