use serde::{Deserialize, Serialize};

use crate::api::{ExportTicket, ToggleOutcome};
use crate::core::LineStyle;

/// Read-only session state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub variations: usize,
    pub active_variations: usize,
    pub line_style: LineStyle,
    pub visible_points: usize,
    pub pending_exports: usize,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    DatasetLoaded { variations: usize, records: usize },
    SelectionChanged { id: String, outcome: ToggleOutcome },
    ToggleRejected { id: String, outcome: ToggleOutcome },
    StyleChanged { style: LineStyle },
    ExportRequested { ticket: ExportTicket },
    ExportFinished { ticket: ExportTicket, succeeded: bool },
    Rendered,
}

/// Hook interface for host-side reactions (analytics, persistence, UI sync).
///
/// Observers read session context but cannot mutate the session.
pub trait SessionObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SessionEvent, context: SessionContext);
}
