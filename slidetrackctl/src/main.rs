use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use slidetrack_config::{ProfileLoad, ProfileLoader, ProfileSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod renderer;
mod replay;
mod script;

use script::Script;

#[derive(Parser)]
#[command(
    name = "slidetrackctl",
    about = "Slider profile checks and session replays"
)]
struct Cli {
    /// Profile file (TOML or JSON). Falls back to $SLIDETRACK_CONFIG_PATH,
    /// $SLIDETRACK_CONFIG_JSON and ./slidetrack.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the profile, run the guard rails and print warnings
    Check,
    /// Print the resolved profile as TOML
    Show,
    /// Run a scripted session against the profile
    Replay {
        #[arg(long)]
        script: PathBuf,
        /// One JSON object per step instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn load(config: Option<PathBuf>) -> Result<ProfileLoad> {
    let loader = match config {
        Some(path) => ProfileLoader::with_path(path),
        None => ProfileLoader::new(),
    };
    Ok(loader.load()?)
}

fn describe(source: &ProfileSource) -> String {
    match source {
        ProfileSource::Default => "built-in defaults".into(),
        ProfileSource::EnvPath(path) => {
            format!("{} (from $SLIDETRACK_CONFIG_PATH)", path.display())
        }
        ProfileSource::EnvInline => "$SLIDETRACK_CONFIG_JSON".into(),
        ProfileSource::File(path) => path.display().to_string(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let load = load(cli.config)?;
            println!("profile: {}", describe(&load.source));
            for warning in load.warnings.iter() {
                match &warning.hint {
                    Some(hint) => {
                        println!("warning: {} (hint: {hint})", warning.message)
                    }
                    None => println!("warning: {}", warning.message),
                }
            }
            println!("ok ({} warnings)", load.warnings.len());
        }
        Command::Show => {
            let load = load(cli.config)?;
            print!("{}", load.profile.to_toml()?);
        }
        Command::Replay { script, json } => {
            let load = load(cli.config)?;
            let script = Script::load(&script)?;
            for record in replay::run(&load.profile, &script)? {
                if json {
                    println!("{}", serde_json::to_string(&record)?);
                } else {
                    println!("{record}");
                }
            }
        }
    }

    Ok(())
}
