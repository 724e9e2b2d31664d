//! Automator pointer wiring: click routing and the hover overlay.

use tracing::debug;

use autopick_protocols::{Document, DomNode};

use super::{Automator, ClickDisposition, Origin, Overlay, PointerEvent};

impl<D: Document> Automator<D> {
    /// Route a captured pointer click.
    ///
    /// Clicks inside the automation panel, with an empty path, or while a
    /// run is in flight pass through untouched. Anything else is consumed
    /// and selects (or deselects) the event target.
    pub fn pointer_click(&mut self, event: &PointerEvent<D::Node>) -> ClickDisposition {
        if !self.gate.is_enabled() {
            return ClickDisposition::PassThrough;
        }
        let Some(target) = event.target(&self.ignore_attribute).cloned() else {
            return ClickDisposition::PassThrough;
        };
        let outcome = self.select_or_toggle(&target, Origin::User);
        debug!(?outcome, "Pointer click consumed");
        ClickDisposition::Consumed
    }

    /// Track the hovered node for the bounds overlay.
    pub fn pointer_move(&mut self, event: &PointerEvent<D::Node>) -> &Overlay {
        self.overlay = match event.target(&self.ignore_attribute) {
            Some(target) => Overlay {
                visible: true,
                bounds: target.bounding_box(),
            },
            None => Overlay {
                visible: false,
                ..self.overlay
            },
        };
        &self.overlay
    }
}
