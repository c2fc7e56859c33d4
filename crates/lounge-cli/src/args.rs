use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::DateTime;

/// Lounge kiosk: clock, opening status, lunch dashboard and weekly menu
///
/// Shows whether the school lounge is open with a countdown to the next
/// change, which groups are eating lunch now and next (from the timetable
/// export), and this week's menu. Run `watch` to keep it on screen.
#[derive(Parser)]
#[command(version, about, name = "lounge")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/lounge/config.json, or built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// IANA time zone name, overriding the configuration
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Pretend the current time is this civil date and time, e.g.
    /// 2024-03-18T12:30
    #[arg(long, global = true)]
    pub at: Option<DateTime>,

    /// Print JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the lounge CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the kiosk screen once (default)
    #[command(alias = "s")]
    Status,
    /// Keep the kiosk on screen, refreshing on timers
    #[command(alias = "w")]
    Watch(WatchArgs),
    /// Show the menu for this or another ISO week
    #[command(alias = "m")]
    Menu(MenuArgs),
    /// Show today's lunch dashboard and sittings
    #[command(alias = "l")]
    Lunch,
    /// Validate the configuration and read every source file
    Check,
    /// Print the effective configuration as JSON
    Config,
}

/// Run the timer-driven display loop
#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Stop after this many status ticks instead of running until Ctrl-C
    #[arg(long)]
    pub ticks: Option<u64>,
}

/// Show a week's menu
#[derive(ClapArgs)]
pub struct MenuArgs {
    /// ISO week number; the current week when omitted
    #[arg(long, value_parser = clap::value_parser!(i8).range(1..=53))]
    pub week: Option<i8>,
}
