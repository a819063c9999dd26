//! Page model: the logical coordinate frame shared by every template.
//!
//! A [`Page`] maps a fixed logical extent (10 units wide, A4 proportions) onto
//! a physical sheet. Templates place themselves in logical units with y
//! growing upward from the bottom edge; only the renderer ever sees pixels.

use glam::{dvec2, DVec2};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::primitive::{Paint, Primitive};

/// Logical page width.
pub const LOGICAL_WIDTH: f64 = 10.0;
/// Logical page height, keeping the A4 ratio (297 / 210 ≈ 1.414).
pub const LOGICAL_HEIGHT: f64 = 14.14;
/// Highest export resolution; 1200 dpi is already a ~140 megapixel A4 page.
pub const MAX_DPI: u32 = 1200;
/// Millimetres per inch.
const MM_PER_INCH: f64 = 25.4;
/// Distance between page edge and the border frame, in logical units.
pub const DEFAULT_FRAME_INSET: f64 = 0.3;
/// Corner radius of the border frame, in logical units.
pub const DEFAULT_FRAME_RADIUS: f64 = 0.4;
/// Vertices per quarter-circle corner of the frame.
const FRAME_CORNER_SEGMENTS: usize = 8;

/// Logical extent plus the physical sheet it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Page {
    width: f64,
    height: f64,
    width_mm: f64,
    height_mm: f64,
}

impl Default for Page {
    fn default() -> Self {
        Self::a4()
    }
}

impl Page {
    /// A4 portrait (210 mm × 297 mm) over the 10 × 14.14 logical extent.
    pub fn a4() -> Self {
        Self {
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
            width_mm: 210.0,
            height_mm: 297.0,
        }
    }

    /// Creates a custom page.
    ///
    /// Returns `ValidationError::DegenerateGeometry` if any dimension is not
    /// finite and positive.
    pub fn new(
        width: f64,
        height: f64,
        width_mm: f64,
        height_mm: f64,
    ) -> Result<Self, ValidationError> {
        for (what, v) in [
            ("width", width),
            ("height", height),
            ("physical width", width_mm),
            ("physical height", height_mm),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ValidationError::DegenerateGeometry {
                    kind: "page",
                    reason: format!("{what} must be positive, got {v}"),
                });
            }
        }
        Ok(Self {
            width,
            height,
            width_mm,
            height_mm,
        })
    }

    /// Logical width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Physical width in millimetres.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Physical height in millimetres.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// Physical height divided by physical width.
    pub fn aspect_ratio(&self) -> f64 {
        self.height_mm / self.width_mm
    }

    /// Whether `p` lies inside the logical extent (edges included).
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Pixel dimensions of the sheet at `dpi`.
    ///
    /// Returns `ValidationError::InvalidDpi` for `dpi == 0`, `dpi` above
    /// [`MAX_DPI`] or a size that does not fit in `u32`.
    pub fn pixel_size(&self, dpi: u32) -> Result<(u32, u32), ValidationError> {
        if dpi == 0 || dpi > MAX_DPI {
            return Err(ValidationError::InvalidDpi(dpi));
        }
        let to_px = |mm: f64| {
            let px = (mm / MM_PER_INCH * f64::from(dpi)).round();
            if px >= 1.0 && px <= f64::from(u32::MAX) {
                Ok(px as u32)
            } else {
                Err(ValidationError::InvalidDpi(dpi))
            }
        };
        Ok((to_px(self.width_mm)?, to_px(self.height_mm)?))
    }

    /// Logical-to-pixel mapping at `dpi`.
    ///
    /// The scale is uniform so circles stay round; the logical extent is
    /// centred on the sheet if its ratio differs slightly from the paper's.
    pub fn pixel_transform(&self, dpi: u32) -> Result<PixelTransform, ValidationError> {
        let (w_px, h_px) = self.pixel_size(dpi)?;
        let (w_px, h_px) = (f64::from(w_px), f64::from(h_px));
        let scale = (w_px / self.width).min(h_px / self.height);
        let offset = dvec2(
            (w_px - self.width * scale) / 2.0,
            (h_px - self.height * scale) / 2.0,
        );
        Ok(PixelTransform {
            scale,
            offset,
            logical_height: self.height,
        })
    }

    /// Rounded-rectangle border `inset` units inside the page edge.
    ///
    /// The frame is a `main` polygon whose corners are quarter circles of
    /// `corner_radius`, sampled at a fixed resolution.
    pub fn frame(&self, inset: f64, corner_radius: f64) -> Result<Primitive, ValidationError> {
        let half_w = self.width / 2.0 - inset;
        let half_h = self.height / 2.0 - inset;
        if !(inset.is_finite() && inset >= 0.0) || half_w <= 0.0 || half_h <= 0.0 {
            return Err(ValidationError::degenerate(
                "frame",
                format!("inset {inset} leaves no room on the page"),
            ));
        }
        if !(corner_radius.is_finite() && corner_radius > 0.0)
            || corner_radius > half_w.min(half_h)
        {
            return Err(ValidationError::degenerate(
                "frame",
                format!("corner radius {corner_radius} does not fit the frame"),
            ));
        }

        let (lo_x, hi_x) = (inset + corner_radius, self.width - inset - corner_radius);
        let (lo_y, hi_y) = (inset + corner_radius, self.height - inset - corner_radius);
        // Corner centres counter-clockwise from bottom-right, each with its
        // quarter's starting angle.
        let corners = [
            (dvec2(hi_x, lo_y), 270.0_f64),
            (dvec2(hi_x, hi_y), 0.0),
            (dvec2(lo_x, hi_y), 90.0),
            (dvec2(lo_x, lo_y), 180.0),
        ];
        let vertices: Vec<DVec2> = corners
            .iter()
            .flat_map(|&(c, start)| {
                (0..=FRAME_CORNER_SEGMENTS).map(move |i| {
                    let a = (start + 90.0 * i as f64 / FRAME_CORNER_SEGMENTS as f64).to_radians();
                    c + corner_radius * dvec2(a.cos(), a.sin())
                })
            })
            .collect();
        Primitive::polygon(vertices, Paint::MAIN)
    }

    /// Border frame with the default inset and corner radius.
    pub fn default_frame(&self) -> Result<Primitive, ValidationError> {
        self.frame(DEFAULT_FRAME_INSET, DEFAULT_FRAME_RADIUS)
    }
}

/// Uniform logical-to-pixel transform with a flipped y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    scale: f64,
    offset: DVec2,
    logical_height: f64,
}

impl PixelTransform {
    /// Pixels per logical unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a logical point to pixel coordinates (origin top-left, y down).
    pub fn apply(&self, p: DVec2) -> DVec2 {
        dvec2(
            self.offset.x + p.x * self.scale,
            self.offset.y + (self.logical_height - p.y) * self.scale,
        )
    }

    /// Maps a logical length to pixels.
    pub fn length(&self, l: f64) -> f64 {
        l * self.scale
    }
}
