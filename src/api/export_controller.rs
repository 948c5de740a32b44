use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};
use crate::extensions::SessionEvent;
use crate::render::{Renderer, SnapshotSurface};

use super::{ChartSession, ExportOutcome, ExportReport, ExportTicket};

impl<R: Renderer> ChartSession<R> {
    /// Attaches the surface used to capture snapshots, replacing any previous one.
    pub fn attach_surface(&mut self, surface: Box<dyn SnapshotSurface>) {
        self.surface = Some(surface);
    }

    pub fn detach_surface(&mut self) -> Option<Box<dyn SnapshotSurface>> {
        self.surface.take()
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Queues a snapshot export without blocking.
    ///
    /// Nothing is captured until `flush_exports`, so the image shows the state
    /// at flush time.
    pub fn request_export(&mut self) -> ExportTicket {
        let ticket = self.exports.enqueue();
        debug!(ticket = ticket.0, "export requested");
        self.emit_event(SessionEvent::ExportRequested { ticket });
        ticket
    }

    #[must_use]
    pub fn pending_exports(&self) -> usize {
        self.exports.len()
    }

    /// Captures the current view once per pending request and writes it to
    /// the configured export path.
    ///
    /// Failures are returned per ticket and never touch selection state.
    pub fn flush_exports(&mut self) -> Vec<ExportOutcome> {
        let tickets = self.exports.drain();
        let mut outcomes = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            let result = self.export_once(ticket);
            match &result {
                Ok(report) => debug!(
                    ticket = ticket.0,
                    path = %report.path.display(),
                    bytes = report.bytes_written,
                    "export written"
                ),
                Err(err) => warn!(ticket = ticket.0, error = %err, "export failed"),
            }
            self.emit_event(SessionEvent::ExportFinished {
                ticket,
                succeeded: result.is_ok(),
            });
            outcomes.push(ExportOutcome { ticket, result });
        }
        outcomes
    }

    fn export_once(&mut self, ticket: ExportTicket) -> ChartResult<ExportReport> {
        let surface = self.surface.as_mut().ok_or(ChartError::ExportUnavailable)?;
        let bytes = surface.capture_png(&self.view)?;
        let captured_at = Utc::now();

        let path = self.config.export_path();
        std::fs::write(&path, &bytes).map_err(|source| ChartError::ExportIo {
            path: path.clone(),
            source,
        })?;

        Ok(ExportReport {
            ticket,
            path,
            bytes_written: bytes.len(),
            captured_at,
            line_style: self.view.line_style,
            active_ids: self.view.series_keys().map(str::to_owned).collect(),
        })
    }
}
