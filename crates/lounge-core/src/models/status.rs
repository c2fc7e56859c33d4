//! Resolved open/closed status.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Which of the three lounge states applies right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    /// Currently inside an opening interval
    Open,
    /// Closed, with a known next opening
    Closed,
    /// Closed and no opening within the next seven days
    ClosedNoUpcoming,
}

/// Open/closed state plus the instant of the next transition.
///
/// Recomputed on every tick; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStatus {
    pub is_open: bool,
    /// Close time while open, next opening while closed
    pub target: Option<Timestamp>,
    pub label: StatusLabel,
}

impl ResolvedStatus {
    pub fn open_until(target: Timestamp) -> Self {
        Self {
            is_open: true,
            target: Some(target),
            label: StatusLabel::Open,
        }
    }

    pub fn closed_until(target: Timestamp) -> Self {
        Self {
            is_open: false,
            target: Some(target),
            label: StatusLabel::Closed,
        }
    }

    pub fn closed_no_upcoming() -> Self {
        Self {
            is_open: false,
            target: None,
            label: StatusLabel::ClosedNoUpcoming,
        }
    }
}
