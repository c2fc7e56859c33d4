//! Lounge kiosk CLI
//!
//! Terminal front end for the school lounge kiosk: opening status with a
//! countdown, the lunch dashboard and the weekly menu.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use lounge_core::{config::parse_time_zone, KioskBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let Args {
        config,
        time_zone,
        at,
        json,
        no_color,
        command,
    } = Args::parse();

    let time_zone = time_zone
        .as_deref()
        .map(parse_time_zone)
        .transpose()
        .context("Invalid --time-zone")?;

    let kiosk = KioskBuilder::new()
        .with_config_path(config)
        .with_time_zone(time_zone)
        .build()
        .context("Failed to initialize kiosk")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Lounge kiosk started");

    let cli = Cli::new(kiosk, renderer, json).with_start_time(at)?;

    match command {
        Some(Watch(args)) => cli.watch(args.ticks).await,
        Some(Menu(args)) => cli.show_menu(args.week).await,
        Some(Lunch) => cli.show_lunch().await,
        Some(Check) => cli.check().await,
        Some(Config) => cli.show_config(),
        Some(Status) | None => cli.show_status().await,
    }
}
