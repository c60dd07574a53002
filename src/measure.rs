//! Measuring-stick interaction state.
//!
//! An ad-hoc ruler tool, independent of the computed well distances. The
//! controller only tracks state; drawing happens in the renderer's plot
//! pass. There is no "done" transition: the stick stays live until its mode
//! is toggled off or the background is clicked.

/// Ruler flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// Straight segment with a single Euclidean distance label.
    Perpendicular,
    /// Axis-aligned L (vertical drop + horizontal run) with |Δx| and |Δy|
    /// labels.
    RightAngle,
}

/// The live end of the stick: either snapped to a hovered well or following
/// the cursor (inverse-projected into data space by the caller).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureEnd {
    Snapped { x: f64, y: f64 },
    Free { x: f64, y: f64 },
}

impl MeasureEnd {
    pub fn xy(&self) -> (f64, f64) {
        match *self {
            MeasureEnd::Snapped { x, y } | MeasureEnd::Free { x, y } => (x, y),
        }
    }
}

/// Ephemeral stick state while the tool is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuringStick {
    pub mode: MeasureMode,
    /// First anchor, fixed by a point click. Nothing is drawn before it is
    /// set.
    pub start: Option<(f64, f64)>,
    /// Snap candidate set by point hover; `None` means follow the cursor.
    pub end: Option<MeasureEnd>,
}

/// State machine over inactive / active-perpendicular / active-right-angle.
#[derive(Debug, Default)]
pub struct MeasuringStickController {
    stick: Option<MeasuringStick>,
}

impl MeasuringStickController {
    pub fn is_active(&self) -> bool {
        self.stick.is_some()
    }

    pub fn stick(&self) -> Option<&MeasuringStick> {
        self.stick.as_ref()
    }

    /// Toolbar toggle. Inactive -> active in the given mode; the same mode
    /// again -> inactive; the other mode while active -> in-place switch
    /// that clears the anchors but keeps the tool active.
    pub fn toggle(&mut self, mode: MeasureMode) {
        match self.stick {
            None => {
                self.stick = Some(MeasuringStick {
                    mode,
                    start: None,
                    end: None,
                });
            }
            Some(ref stick) if stick.mode != mode => {
                self.stick = Some(MeasuringStick {
                    mode,
                    start: None,
                    end: None,
                });
            }
            Some(_) => self.deactivate(),
        }
    }

    /// Fix (or re-anchor) the start point. Clicking with a stick already
    /// anchored just moves the anchor; it never finalizes anything.
    pub fn set_start(&mut self, x: f64, y: f64) {
        if let Some(stick) = self.stick.as_mut() {
            stick.start = Some((x, y));
        }
    }

    /// Set or clear the hover snap candidate.
    pub fn set_end(&mut self, end: Option<MeasureEnd>) {
        if let Some(stick) = self.stick.as_mut() {
            stick.end = end;
        }
    }

    /// Remove the tool and its state. Idempotent.
    pub fn deactivate(&mut self) {
        self.stick = None;
    }
}
