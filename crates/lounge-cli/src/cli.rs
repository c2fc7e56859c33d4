//! Command handlers for the lounge CLI.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use jiff::{civil::DateTime, SignedDuration, Zoned};
use log::{error, info, warn};
use lounge_core::{
    display::{ErrorScreen, LunchDashboard, MenuPage, OperationStatus, Sittings},
    kiosk::LunchView,
    menu::iso_week,
    models::weekday_number,
    Kiosk, Panel, Resource, SourceState,
};
use serde::Serialize;
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};

use crate::renderer::TerminalRenderer;

/// CLI handler that owns the kiosk and renders its output.
pub struct Cli {
    kiosk: Kiosk,
    renderer: TerminalRenderer,
    json: bool,
    /// Pretended start time and the moment the process started
    pinned: Option<(Zoned, Instant)>,
}

impl Cli {
    pub fn new(kiosk: Kiosk, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            kiosk,
            renderer,
            json,
            pinned: None,
        }
    }

    /// Pins the clock to a civil time in the kiosk's time zone. Time still
    /// advances from there, so `watch` keeps counting down.
    pub fn with_start_time(mut self, at: Option<DateTime>) -> Result<Self> {
        if let Some(at) = at {
            let start = self.kiosk.at(at).context("Invalid --at time")?;
            self.pinned = Some((start, Instant::now()));
        }
        Ok(self)
    }

    fn now(&self) -> Result<Zoned> {
        match &self.pinned {
            None => Ok(self.kiosk.now()),
            Some((start, started)) => {
                // Whole seconds, so a pinned time renders exactly as given.
                let elapsed = i64::try_from(started.elapsed().as_secs())?;
                Ok(start.checked_add(SignedDuration::from_secs(elapsed))?)
            }
        }
    }

    /// Print `value` as pretty JSON or as rendered markdown.
    fn emit<T: Serialize + fmt::Display>(&self, value: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&value.to_string())
        }
    }

    /// Show the full kiosk screen once.
    pub async fn show_status(mut self) -> Result<()> {
        let failures = self.kiosk.reload_all().await;
        if failures > 0 {
            warn!("{failures} source(s) could not be loaded");
        }

        let frame = self.kiosk.frame(&self.now()?).context("Failed to build frame")?;
        self.emit(&frame)
    }

    /// Show the menu of the given ISO week, or of the current one.
    pub async fn show_menu(mut self, week: Option<i8>) -> Result<()> {
        if let Err(e) = self.kiosk.reload(Resource::Menu).await {
            warn!("Menu unavailable: {e}");
        }

        let now = self.now()?;
        let current = iso_week(now.date());
        let week = week.unwrap_or(current);
        // Only the current week has a "today"; sunday-zero 0 marks nothing.
        let today = if week == current { weekday_number(now.weekday()) } else { 0 };

        let Some(menu) = self.kiosk.menu_view_for_week(week, today) else {
            bail!("No menu file configured");
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&menu)?);
            Ok(())
        } else {
            let labels = self.kiosk.config().locale.labels();
            self.renderer.render(&MenuPage::new(&menu, labels).to_string())
        }
    }

    /// Show today's lunch dashboard and sittings.
    pub async fn show_lunch(mut self) -> Result<()> {
        if *self.kiosk.timetable_state() == SourceState::Disabled {
            bail!("No timetable file configured");
        }
        self.kiosk
            .reload(Resource::Timetable)
            .await
            .context("Failed to load timetable")?;

        let now = self.now()?;
        let dashboard = self.kiosk.lunch_view(&now);
        let sittings = self.kiosk.today_lunches(&now);

        if self.json {
            let output = serde_json::json!({
                "dashboard": dashboard,
                "sittings": sittings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        let labels = self.kiosk.config().locale.labels();
        let mut output = String::new();
        if let Some(view) = dashboard.as_ref().filter(|view| view.is_visible()) {
            output.push_str(&LunchDashboard::new(view, labels).to_string());
            output.push('\n');
        }
        let weekday = labels.weekday(weekday_number(now.weekday()));
        output.push_str(&Sittings::new(&sittings, labels).with_title(weekday).to_string());
        self.renderer.render(&output)
    }

    /// Read every configured source and report what happened.
    pub async fn check(mut self) -> Result<()> {
        let mut statuses = vec![OperationStatus::success("Configuration is valid".to_string())];
        let mut failures = 0;

        if self.kiosk.config().schedule.is_always_closed() {
            warn!("Schedule has no opening hours");
            statuses.push(OperationStatus::failure(
                "schedule: no opening hours on any day, the lounge always shows closed".to_string(),
            ));
        }

        for resource in Resource::ALL {
            let path = match resource {
                Resource::Menu => self.kiosk.config().menu_path.clone(),
                Resource::Timetable => self.kiosk.config().timetable_path.clone(),
            };
            let Some(path) = path else {
                statuses.push(OperationStatus::success(format!("{resource}: not configured")));
                continue;
            };

            match self.kiosk.reload(resource).await {
                Ok(()) => statuses.push(OperationStatus::success(format!(
                    "{resource}: loaded {}",
                    path.display()
                ))),
                Err(e) => {
                    failures += 1;
                    statuses.push(OperationStatus::failure(format!("{resource}: {e}")));
                }
            }
        }

        if let Some(schedule) = self.kiosk.timetable_state().ready() {
            let labels = self.kiosk.config().locale.labels();
            let per_day: Vec<String> = schedule
                .iter()
                .map(|(weekday, events)| format!("{} {}", labels.weekday(weekday), events.len()))
                .collect();
            statuses.push(OperationStatus::success(format!(
                "timetable: {} lunch sittings ({})",
                schedule.len(),
                per_day.join(", ")
            )));
        }

        let output: String = statuses.iter().map(ToString::to_string).collect();
        self.renderer.render(&output)?;

        if failures > 0 {
            bail!("{failures} source(s) failed to load");
        }
        Ok(())
    }

    /// Print the effective configuration.
    pub fn show_config(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self.kiosk.config())?);
        Ok(())
    }

    /// Redraw the kiosk on the configured timers until Ctrl-C, or until
    /// `ticks` frames have been drawn.
    pub async fn watch(mut self, ticks: Option<u64>) -> Result<()> {
        let refresh = self.kiosk.config().refresh.clone();
        let mut status_timer = redraw_interval(refresh.status_secs);
        let mut lunch_timer = redraw_interval(refresh.lunch_secs);
        let mut reload_timer = refresh.reload_secs.map(delayed_interval);
        let mut rotation_timer = refresh.rotation_secs.map(delayed_interval);

        let failures = self.kiosk.reload_all().await;
        if failures > 0 {
            warn!("{failures} source(s) could not be loaded");
        }

        let mut panel = if rotation_timer.is_some() {
            Panel::Menu
        } else {
            Panel::All
        };
        let mut lunch = self.kiosk.lunch_view(&self.now()?);
        let mut drawn = 0u64;

        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);

        info!("Watching; press Ctrl-C to exit");

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Interrupted, stopping");
                    break;
                }
                _ = status_timer.tick() => {
                    self.draw(panel, lunch.clone())?;
                    drawn += 1;
                    if ticks.is_some_and(|limit| drawn >= limit) {
                        break;
                    }
                }
                _ = lunch_timer.tick() => {
                    lunch = self.kiosk.lunch_view(&self.now()?);
                }
                _ = tick_optional(&mut reload_timer) => {
                    self.kiosk.reload_all().await;
                    lunch = self.kiosk.lunch_view(&self.now()?);
                }
                _ = tick_optional(&mut rotation_timer) => {
                    panel = panel.next();
                }
            }
        }

        Ok(())
    }

    /// Draw one frame with the cached lunch dashboard. A frame that cannot
    /// be built is replaced by the error screen.
    fn draw(&self, panel: Panel, lunch: Option<LunchView>) -> Result<()> {
        let now = self.now()?;
        match self.kiosk.frame(&now) {
            Ok(mut frame) => {
                frame.lunch = lunch;
                let frame = frame.with_panel(panel);
                if self.json {
                    println!("{}", serde_json::to_string(&frame)?);
                    Ok(())
                } else {
                    self.renderer.clear()?;
                    self.renderer.render(&frame.to_string())
                }
            }
            Err(e) => {
                error!("Failed to build frame: {e}");
                let labels = self.kiosk.config().locale.labels();
                if self.json {
                    println!("{}", serde_json::json!({ "error": e.to_string() }));
                    Ok(())
                } else {
                    self.renderer.clear()?;
                    self.renderer.render(&ErrorScreen::new(labels, e.to_string()).to_string())
                }
            }
        }
    }
}

/// An interval that ticks immediately. Ticks missed during a slow reload
/// are skipped rather than replayed as a burst of redraws.
fn redraw_interval(secs: u64) -> time::Interval {
    let mut timer = time::interval(Duration::from_secs(secs));
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

/// An interval whose first tick is one period from now.
fn delayed_interval(secs: u64) -> time::Interval {
    let period = Duration::from_secs(secs);
    let mut timer = time::interval_at(time::Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

async fn tick_optional(timer: &mut Option<time::Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_timers_skip_missed_ticks() {
        assert_eq!(redraw_interval(1).missed_tick_behavior(), MissedTickBehavior::Skip);
        assert_eq!(delayed_interval(10).missed_tick_behavior(), MissedTickBehavior::Skip);
    }

    #[tokio::test(start_paused = true)]
    async fn test_redraw_interval_does_not_burst_after_stall() {
        let mut timer = redraw_interval(1);
        timer.tick().await;

        // Stall for several periods, as a slow reload would
        time::advance(Duration::from_millis(3500)).await;
        timer.tick().await;

        // The next tick waits for the schedule instead of firing at once
        let before = time::Instant::now();
        timer.tick().await;
        assert!(time::Instant::now() > before);
    }
}
