//! Display formatting for kiosk frames.
//!
//! The kiosk types in [`crate::kiosk`] hold display-ready strings; this
//! module turns them into markdown for the terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Kiosk Frame    │    │ Display impls & │    │    Markdown     │
//! │ (status, menu)  │───▶│    wrappers     │───▶│  (terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`frame`]: `Display` for [`crate::kiosk::Frame`] and its parts
//! - [`collections`]: the day's lunch sittings as a list
//! - [`status`]: check results and the full-screen error state
//! - [`datetime`]: localized date formatting
//!
//! ```rust
//! use lounge_core::display::OperationStatus;
//!
//! let ok = OperationStatus::success("menu: 12 days".to_string());
//! assert!(ok.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod frame;
pub mod status;

pub use collections::Sittings;
pub use datetime::LocalDate;
pub use frame::{LunchDashboard, MenuPage};
pub use status::{ErrorScreen, OperationStatus};
