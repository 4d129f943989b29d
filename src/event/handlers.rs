use std::sync::Arc;

use parking_lot::Mutex;

use super::{EventHandler, SheetEvent};

/// Writes every event to the `log` facade. Cell paints are noisy, so they go
/// to trace while everything else goes to debug.
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &SheetEvent) {
        match event {
            SheetEvent::CellPainted { cell, fill } => log::trace!("painted {} with {}", cell, fill),
            SheetEvent::ModeChanged { old, new } => log::debug!("paint mode {:?} -> {:?}", old, new),
            SheetEvent::ColorSelected(color) => log::debug!("active color {}", color),
            SheetEvent::GridBuilt { resolution } => {
                log::debug!("grid rebuilt at {}x{}", resolution, resolution)
            }
        }
    }
}

/// Collects events into a shared list. Clones share the same list, so one
/// clone can be subscribed while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<SheetEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SheetEvent> {
        self.events.lock().clone()
    }

    /// Returns and forgets everything recorded so far
    pub fn take(&self) -> Vec<SheetEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &SheetEvent) {
        self.events.lock().push(event.clone());
    }
}
