use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LineStyle;
use crate::error::ChartResult;

/// Handle returned by an export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExportTicket(pub u64);

/// What was written for one completed export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub ticket: ExportTicket,
    pub path: PathBuf,
    pub bytes_written: usize,
    pub captured_at: DateTime<Utc>,
    pub line_style: LineStyle,
    pub active_ids: Vec<String>,
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub ticket: ExportTicket,
    pub result: ChartResult<ExportReport>,
}

impl ExportOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// FIFO of export requests waiting for the next flush.
#[derive(Debug, Default)]
pub(super) struct ExportQueue {
    pending: VecDeque<ExportTicket>,
    next_ticket: u64,
}

impl ExportQueue {
    pub(super) fn enqueue(&mut self) -> ExportTicket {
        let ticket = ExportTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push_back(ticket);
        ticket
    }

    pub(super) fn drain(&mut self) -> Vec<ExportTicket> {
        self.pending.drain(..).collect()
    }

    pub(super) fn len(&self) -> usize {
        self.pending.len()
    }
}
