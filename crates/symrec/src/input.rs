//! Pointer input capture: collects drag positions into a pending gesture and
//! submits it on release.

use crate::geom::Point;
use crate::recognizer::Recognizer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Drag { button: PointerButton, position: Point },
    Release { button: PointerButton },
}

/// In-progress gesture. Only the primary button draws.
#[derive(Clone, Debug, Default)]
pub struct GestureCapture {
    pending: Vec<Point>,
}

impl GestureCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points collected since the last release.
    #[inline]
    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    /// Feeds one pointer event. A primary release hands the pending points to
    /// `recognizer` (even when empty) and starts a fresh gesture.
    pub fn handle(&mut self, event: PointerEvent, recognizer: &mut Recognizer) {
        match event {
            PointerEvent::Drag {
                button: PointerButton::Primary,
                position,
            } => self.pending.push(position),
            PointerEvent::Release {
                button: PointerButton::Primary,
            } => {
                let points = std::mem::take(&mut self.pending);
                tracing::trace!(n = points.len(), "gesture released");
                recognizer.add_symbol(&points);
            }
            PointerEvent::Drag { .. } | PointerEvent::Release { .. } => {}
        }
    }
}
