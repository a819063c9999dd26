//! Stroke widths for the two stroke classes.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::primitive::StrokeClass;

/// Main outline width in points, matching a thick felt-tip line.
const DEFAULT_MAIN_WIDTH_PT: f64 = 4.0;
/// Detail stroke width in points.
const DEFAULT_DETAIL_WIDTH_PT: f64 = 3.0;

/// Immutable stroke configuration handed to the renderer with each scene.
///
/// Widths are in typographic points (1/72 inch) so a page looks the same at
/// every export resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    main_width_pt: f64,
    detail_width_pt: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            main_width_pt: DEFAULT_MAIN_WIDTH_PT,
            detail_width_pt: DEFAULT_DETAIL_WIDTH_PT,
        }
    }
}

impl Style {
    /// Creates a style, rejecting non-positive or non-finite widths.
    pub fn new(main_width_pt: f64, detail_width_pt: f64) -> Result<Self, ValidationError> {
        for (what, w) in [("main width", main_width_pt), ("detail width", detail_width_pt)] {
            if !(w.is_finite() && w > 0.0) {
                return Err(ValidationError::InvalidOption {
                    name: what.to_string(),
                    reason: format!("stroke width must be positive, got {w}"),
                });
            }
        }
        Ok(Self {
            main_width_pt,
            detail_width_pt,
        })
    }

    /// Width in points for the given class.
    pub fn width_pt(&self, class: StrokeClass) -> f64 {
        match class {
            StrokeClass::Main => self.main_width_pt,
            StrokeClass::Detail => self.detail_width_pt,
        }
    }

    /// Width in device pixels at `dpi`.
    pub fn width_px(&self, class: StrokeClass, dpi: u32) -> f64 {
        self.width_pt(class) * f64::from(dpi) / 72.0
    }
}
