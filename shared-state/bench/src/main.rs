// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Context;
use clap::Parser;
use dispatch_core::FastrandRandom;
use shared_state_core::{KeyGenerator, Role, Settings, Variant};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "shared-state-bench",
    about = "Compare a locked map and a concurrent map under create/read/update/delete load"
)]
struct Cli {
    /// JSON settings file with per-role workers and jobs
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Variants to run, separated by comma
    #[arg(
        short = 'v',
        long,
        value_delimiter = ',',
        default_value = "locked-sequential,locked-parallel,concurrent-parallel"
    )]
    variant: Vec<Variant>,

    /// Divide every job count by this factor
    #[arg(short = 's', long, default_value = "1")]
    scale: NonZeroUsize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => {
            info!("no settings file given, using defaults");
            Ok(Settings::default())
        }
    }
}

fn print_settings(settings: &Settings) {
    println!("### SETTINGS");
    for role in Role::ALL {
        let role_settings = settings.for_role(role);
        println!(
            "{}:\t{} workers, {} jobs",
            role, role_settings.workers, role_settings.jobs
        );
    }
    println!("###");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?.scaled_down(cli.scale);
    print_settings(&settings);

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl+C received, stopping after the current variant");
            signal_token.cancel();
        }
    });

    let keys = KeyGenerator::default();
    let random = Arc::new(FastrandRandom);

    for variant in cli.variant {
        if cancel_token.is_cancelled() {
            break;
        }
        let report = variant.run(&settings, keys, random.clone()).await;
        println!("{}\n", report);
    }

    Ok(())
}
