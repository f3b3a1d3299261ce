//! Command-line configuration.

use crate::commands::Command;
use anyhow::{Context, Result};
use clap::Parser;
use ringcore::{HashAlgorithm, HashRing, RingConfig};
use tracing_subscriber::EnvFilter;

/// Inspect a consistent hash ring built from a member list.
#[derive(Debug, Parser)]
#[command(name = "ringctl", version, about)]
pub struct CliConfig {
    /// Comma separated member ids.
    #[arg(long, short, value_delimiter = ',', global = true)]
    pub members: Vec<String>,

    /// Virtual nodes per member (default 255).
    #[arg(long, global = true)]
    pub vnodes: Option<usize>,

    /// Hash function: crc32, xxhash32 or siphash13.
    #[arg(long, default_value = "crc32", global = true)]
    pub hash: HashAlgorithm,

    /// JSON ring config; replaces --members, --vnodes and --hash.
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Log ring changes to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
    pub fn init_tracing(&self) {
        let default = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    /// The ring description, from the config file if given.
    pub fn ring_config(&self) -> Result<RingConfig> {
        match &self.config {
            Some(path) => RingConfig::load(path)
                .with_context(|| format!("loading ring config {}", path.display())),
            None => {
                let config = RingConfig {
                    virtual_nodes: self.vnodes,
                    hash: self.hash,
                    members: self.members.clone(),
                };
                config.validate().context("invalid ring options")?;
                Ok(config)
            }
        }
    }

    pub fn build_ring(&self) -> Result<HashRing<HashAlgorithm>> {
        self.ring_config()?
            .into_ring()
            .context("building ring")
    }

    pub fn run(&self) -> Result<()> {
        let ring = self.build_ring()?;
        tracing::debug!(?ring, "built ring");
        let result = self.command.execute(&ring)?;
        print!("{}", result);
        Ok(())
    }
}
