pub mod monitor;
pub mod query;

pub use monitor::{PresenceMonitor, PresenceState};
pub use query::{is_in_scheduled_window, PresenceQuery, QueryOutcome, ZoomPresenceQuery};
