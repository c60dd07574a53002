//! Contracts towards the embedding analytics application.
//!
//! The diagram never owns row lifecycle: the host hands out row handles and
//! the diagram only reads marking state and issues marking commands back.
//! Tooltips, clearing the whole marking, and zoom persistence are host
//! concerns reached through optional callbacks.

use std::rc::Rc;

use crate::data::zoom::ZoomRange;

/// Marking command issued against a host-owned row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkMode {
    /// Replace the current marking with this row.
    Replace,
    /// Toggle this row in the current marking.
    Toggle,
    /// Remove this row from the current marking.
    Subtract,
}

/// A handle to a host-owned data row.
///
/// The diagram reads `is_marked` during rendering and distance filtering and
/// calls `mark` in response to user interaction. Implementations are expected
/// to be cheap to call every frame.
pub trait RowHandle {
    fn is_marked(&self) -> bool;
    fn mark(&self, mode: MarkMode);
}

/// Shared row handle. The diagram runs on the UI thread only, so `Rc` is
/// sufficient (no `Send` requirement).
pub type RowRef = Rc<dyn RowHandle>;

/// Optional host callbacks wired into the diagram.
///
/// Every callback defaults to `None`; a missing callback turns the
/// corresponding action into a no-op.
#[derive(Default)]
pub struct HostActions {
    /// Show a tooltip for the hovered row.
    pub show_tooltip: Option<Box<dyn FnMut(&RowRef)>>,
    /// Hide any visible tooltip.
    pub hide_tooltip: Option<Box<dyn FnMut()>>,
    /// Clear the marking across all rows, including rows not present in this
    /// diagram's panel.
    pub clear_all_marking: Option<Box<dyn FnMut()>>,
    /// The zoom range changed; hosts typically persist it as a property
    /// string (see [`crate::persistence`]).
    pub zoom_changed: Option<Box<dyn FnMut(&ZoomRange)>>,
}

impl HostActions {
    pub(crate) fn show_tooltip(&mut self, row: &RowRef) {
        if let Some(cb) = self.show_tooltip.as_mut() {
            cb(row);
        }
    }

    pub(crate) fn hide_tooltip(&mut self) {
        if let Some(cb) = self.hide_tooltip.as_mut() {
            cb();
        }
    }

    pub(crate) fn clear_all_marking(&mut self) {
        if let Some(cb) = self.clear_all_marking.as_mut() {
            cb();
        }
    }

    pub(crate) fn zoom_changed(&mut self, range: &ZoomRange) {
        if let Some(cb) = self.zoom_changed.as_mut() {
            cb(range);
        }
    }
}
