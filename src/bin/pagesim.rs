//! Page replacement simulator CLI.
//!
//! Replays a reference string under FIFO, LRU or OPT and prints the trace,
//! either as a table (one row per reference) or as JSON.
//!
//! Examples:
//!   pagesim run --policy lru --refs "7, 0, 1, 2, 0, 3, 0, 4" --frames 3
//!   pagesim compare --frames 4

use {
    anyhow::{Context, Result},
    clap::{Parser, Subcommand},
    log::warn,
    pagesim::{
        MAX_FRAMES,
        MIN_FRAMES,
        Policy,
        SimConfig,
        Trace,
        clamp_frames,
        parse_reference_string,
    },
};

#[derive(Parser, Debug)]
#[command(name = "pagesim", author, version, about = "Page replacement simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one policy and print every step.
    Run {
        /// Replacement policy: FIFO, LRU or OPT.
        #[arg(short, long, default_value_t = Policy::Fifo)]
        policy: Policy,

        #[command(flatten)]
        input: Input,

        /// Print the trace as JSON.
        #[arg(long)]
        json: bool,

        /// Print the policy's rationale after every fault.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate every policy and print fault and hit counts.
    Compare {
        #[command(flatten)]
        input: Input,

        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
struct Input {
    /// Comma separated reference string, e.g. "7, 0, 1, 2".
    #[arg(short, long)]
    refs: Option<String>,

    /// Number of physical frames.
    #[arg(short, long)]
    frames: Option<usize>,
}

impl Input {
    fn into_config(self, policy: Policy) -> Result<SimConfig> {
        let defaults = SimConfig::default();
        let refs = match self.refs {
            Some(refs) => parse_reference_string(&refs).context("Invalid reference string")?,
            None => defaults.refs,
        };
        let capacity = match self.frames {
            Some(frames) => {
                let clamped = clamp_frames(frames);
                if clamped != frames {
                    warn!("Frame count {frames} outside {MIN_FRAMES}..={MAX_FRAMES}, using {clamped}");
                }
                clamped
            }
            None => defaults.capacity,
        };
        Ok(SimConfig {
            refs,
            capacity,
            policy,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            policy,
            input,
            json,
            verbose,
        } => {
            let config = input.into_config(policy)?;
            let trace = config.run().context("Simulation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&trace)?);
            } else {
                print_trace(&config, &trace, verbose);
            }
        }
        Commands::Compare { input, json } => {
            let config = input.into_config(Policy::default())?;
            let compared = config.compare().context("Simulation failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&compared)?);
            } else {
                println!("{:<6} {:>7} {:>7} {:>9}", "Policy", "Faults", "Hits", "Hit rate");
                for entry in compared {
                    println!(
                        "{:<6} {:>7} {:>7} {:>8.1}%",
                        entry.policy.to_string(),
                        entry.stats.faults,
                        entry.stats.hits,
                        entry.stats.hit_rate()
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_trace(config: &SimConfig, trace: &Trace<u32>, verbose: bool) {
    println!(
        "{} with {} frames ({})",
        config.policy,
        config.capacity,
        config.policy.description()
    );
    for (index, step) in trace.iter().enumerate() {
        let frames = (0..config.capacity)
            .map(|slot| step.frames.get(slot).map_or("-".to_string(), u32::to_string))
            .collect::<Vec<_>>()
            .join(" ");
        let stats = trace.stats_at(index);
        println!(
            "{:>3}  page {:>3}  [{frames}]  {:<5}  faults {:>3}  hits {:>3}  {}",
            index + 1,
            step.page,
            if step.fault { "FAULT" } else { "hit" },
            stats.faults,
            stats.hits,
            step.explanation
        );
        if verbose && step.fault {
            println!("       {}", config.policy.rationale());
        }
    }

    let stats = trace.stats();
    println!(
        "Total: {} references, {} faults ({:.1}%), {} hits ({:.1}%)",
        stats.references,
        stats.faults,
        stats.fault_rate(),
        stats.hits,
        stats.hit_rate()
    );
}
