use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use order_core::OrderFormController;
use shared::protocol::{FormEvent, RawFieldEvent};

mod config;
mod controller;
mod logging;
mod render;

use config::{load_settings, DEFAULT_CONFIG_PATH};
use controller::{
    events::FormOutcome,
    orchestration::{dispatch_form_event, replay_events},
};

#[derive(Parser, Debug)]
#[command(name = "order_cli", about = "Fill in and submit a pizza order form")]
struct Cli {
    /// Settings file; missing is fine, defaults apply.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill every field and submit once.
    Order {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        size: String,
        /// Topping id or label; repeat for more than one.
        #[arg(long = "topping")]
        toppings: Vec<String>,
    },
    /// Apply JSON-lines form events and print a view after each.
    Replay {
        /// Defaults to stdin.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// List the toppings that can be ordered.
    Catalog,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let settings = load_settings(&cli.config)?;
    let mut form = settings
        .build_controller()
        .context("invalid topping catalog in settings")?;

    match cli.command {
        Command::Order {
            full_name,
            size,
            toppings,
        } => place_order(&mut form, full_name, size, toppings),
        Command::Replay { input } => {
            let stdout = io::stdout();
            let stats = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open '{}'", path.display()))?;
                    replay_events(&mut form, BufReader::new(file), stdout.lock())?
                }
                None => replay_events(&mut form, io::stdin().lock(), stdout.lock())?,
            };
            tracing::info!(
                events = stats.events,
                malformed = stats.malformed,
                failed = stats.failed,
                submitted = stats.submitted,
                "replay finished"
            );
            Ok(())
        }
        Command::Catalog => {
            println!("{}", render::catalog(form.catalog()));
            Ok(())
        }
    }
}

fn place_order(
    form: &mut OrderFormController,
    full_name: String,
    size: String,
    toppings: Vec<String>,
) -> Result<()> {
    let mut events = vec![
        RawFieldEvent::text("fullName", full_name),
        RawFieldEvent::text("size", size),
    ];
    events.extend(
        toppings
            .into_iter()
            .map(|topping| RawFieldEvent::checkbox("toppings", topping, true)),
    );

    for event in events {
        if let FormOutcome::Ignored(err) = dispatch_form_event(form, FormEvent::Change(event)) {
            bail!(err);
        }
    }

    match dispatch_form_event(form, FormEvent::Submit) {
        FormOutcome::Submitted(summary) => {
            println!("{}", render::confirmation(&summary));
            Ok(())
        }
        FormOutcome::Rejected(rejected) => {
            for line in render::field_errors(&rejected.errors) {
                eprintln!("{line}");
            }
            bail!(rejected);
        }
        other => bail!("unexpected outcome from submit: {}", other.label()),
    }
}
