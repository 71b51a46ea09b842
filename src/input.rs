//! Input model: mouse buttons, keys, and the interaction mode.
//!
//! `Mode` is the state of the interaction state machine driven by
//! [`crate::engine::EngineCore`]. The selection and drag indices live inside
//! the mode variants, so clearing the selection always clears the drag too.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    ///
    /// Auxiliary buttons (back/forward) map to `Secondary` so they never draw.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            _ => Self::Secondary,
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Enter"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No active curve and no selection.
    #[default]
    Idle,
    /// Appending points to the active curve.
    Drawing,
    /// A committed curve is selected; its control points are grabbable.
    Selected {
        /// Index of the selected committed curve.
        curve: usize,
    },
    /// A control point of the selected curve is following the pointer.
    Dragging {
        /// Index of the selected committed curve.
        curve: usize,
        /// Index of the grabbed point within that curve.
        point: usize,
    },
}

impl Mode {
    /// Whether points are being appended to an active curve.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing)
    }

    /// Index of the selected committed curve, if any.
    #[must_use]
    pub fn selected_curve(self) -> Option<usize> {
        match self {
            Self::Selected { curve } | Self::Dragging { curve, .. } => Some(curve),
            Self::Idle | Self::Drawing => None,
        }
    }
}
