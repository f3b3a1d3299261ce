//! ringctl subcommands.

use anyhow::{Context, Result};
use clap::Subcommand;
use ringcore::{HashRing, RingHasher};
use std::fmt;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the member owning each key.
    Route {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the member set, sorted.
    Members,
    /// Share of synthetic keys owned by each member.
    Distribution {
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
    },
    /// How many synthetic keys move when a member joins.
    Rebalance {
        /// Member to add.
        #[arg(long)]
        add: String,
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
    },
}

/// Output of a command, rendered line by line.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Routes(Vec<(String, String)>),
    Members(Vec<String>),
    Distribution {
        samples: usize,
        shares: Vec<(String, usize)>,
    },
    Rebalance {
        samples: usize,
        moved: usize,
        moved_to_new: usize,
    },
}

fn sample_keys(samples: usize) -> impl Iterator<Item = String> {
    (0..samples).map(|i| format!("sample-key-{}", i))
}

impl Command {
    pub fn execute<H: RingHasher>(&self, ring: &HashRing<H>) -> Result<CommandResult> {
        match self {
            Command::Route { keys } => {
                let routes = keys
                    .iter()
                    .map(|key| {
                        ring.get(key)
                            .map(|owner| (key.clone(), owner))
                            .with_context(|| format!("routing key `{}`", key))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CommandResult::Routes(routes))
            }
            Command::Members => {
                let mut members = ring.members();
                members.sort();
                Ok(CommandResult::Members(members))
            }
            Command::Distribution { samples } => {
                let mut shares: Vec<(String, usize)> =
                    ring.distribution(sample_keys(*samples)).into_iter().collect();
                shares.sort();
                Ok(CommandResult::Distribution {
                    samples: *samples,
                    shares,
                })
            }
            Command::Rebalance { add, samples } => {
                let before = ring.snapshot();
                ring.add(add);
                let after = ring.snapshot();

                let mut moved = 0;
                let mut moved_to_new = 0;
                for key in sample_keys(*samples) {
                    let old = before.get(&key).ok();
                    let new = after.get(&key).context("ring empty after add")?;
                    if old != Some(new) {
                        moved += 1;
                        if new == add {
                            moved_to_new += 1;
                        }
                    }
                }
                Ok(CommandResult::Rebalance {
                    samples: *samples,
                    moved,
                    moved_to_new,
                })
            }
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Routes(routes) => {
                for (key, owner) in routes {
                    writeln!(f, "{} -> {}", key, owner)?;
                }
            }
            CommandResult::Members(members) => {
                for member in members {
                    writeln!(f, "{}", member)?;
                }
            }
            CommandResult::Distribution { samples, shares } => {
                for (member, count) in shares {
                    writeln!(f, "{}\t{}\t{:.2}%", member, count, percent(*count, *samples))?;
                }
            }
            CommandResult::Rebalance {
                samples,
                moved,
                moved_to_new,
            } => {
                writeln!(
                    f,
                    "moved {} of {} keys ({:.2}%), {} to the new member",
                    moved,
                    samples,
                    percent(*moved, *samples),
                    moved_to_new
                )?;
            }
        }
        Ok(())
    }
}
