use crate::error::{ChartError, ChartResult};
use crate::extensions::{SessionContext, SessionEvent, SessionObserver};
use crate::render::Renderer;

use super::ChartSession;

impl<R: Renderer> ChartSession<R> {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn SessionObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn session_context(&self) -> SessionContext {
        SessionContext {
            variations: self.selection.total_variations(),
            active_variations: self.selection.active_count(),
            line_style: self.selection.line_style(),
            visible_points: self.view.points.len(),
            pending_exports: self.exports.len(),
        }
    }

    pub(super) fn emit_event(&mut self, event: SessionEvent) {
        let context = self.session_context();
        for observer in &mut self.observers {
            observer.on_event(&event, context);
        }
    }
}
