//! Schedule document model, sources and the event list loader

mod error;
mod loader;
mod model;
mod source;

pub use error::ScheduleError;
pub use loader::{Diagnostics, EventListLoader, LogDiagnostics, ScheduleOutcome};
pub use model::{Capacity, EventDocument, EventRecord, StatusBadge};
pub use source::{source_for, FileScheduleSource, HttpScheduleSource, ScheduleSource};
