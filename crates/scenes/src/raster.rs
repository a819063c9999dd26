//! CPU rasterizer: a [`Scene`] to an 8-bit grayscale [`Bitmap`].
//!
//! Always available (no feature gate); the PNG writer in `export` only
//! encodes what this module produces.
//!
//! Every primitive becomes a `tiny_skia::Path` built in logical units and
//! mapped to pixels with one page transform. Strokes are drawn with round
//! caps and joins at the style's pixel width; fills and markers use the
//! even-odd rule. Ink is opaque black over a white page, so overlaps only
//! ever darken.

use coloring_core::{DVec2, Paint, PixelTransform, Primitive, Shape, Style, ValidationError};
use tiny_skia as sk;
use tracing::{debug, trace};

use crate::scene::Scene;

const WHITE: u8 = 255;

/// Row-major grayscale pixels; 255 is paper, 0 is full ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// An all-white bitmap.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![WHITE; width as usize * height as usize],
        }
    }

    /// Gray levels of an opaque pixmap.
    fn from_pixmap(pixmap: &sk::Pixmap) -> Self {
        // Opaque, achromatic pixels: premultiplied red is the gray level.
        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            pixels: pixmap.pixels().iter().map(|px| px.red()).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at `(x, y)`, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Number of pixels carrying any ink.
    pub fn ink_pixels(&self) -> usize {
        self.pixels.iter().filter(|&&v| v < WHITE).count()
    }
}

/// Renders `scene` onto a page-sized bitmap at `dpi`.
///
/// Returns `ValidationError::InvalidDpi` if the page has no pixel size at
/// that resolution.
pub fn rasterize(scene: &Scene, dpi: u32) -> Result<Bitmap, ValidationError> {
    let page = scene.page();
    let (width, height) = page.pixel_size(dpi)?;
    let to_px = page_transform(&page.pixel_transform(dpi)?);
    let mut pixmap = sk::Pixmap::new(width, height).ok_or(ValidationError::InvalidDpi(dpi))?;
    pixmap.fill(sk::Color::WHITE);
    for prim in scene.primitives() {
        draw(&mut pixmap, prim, to_px, scene.style(), dpi);
    }
    let bitmap = Bitmap::from_pixmap(&pixmap);
    debug!(
        scene = scene.name(),
        dpi,
        width,
        height,
        ink = bitmap.ink_pixels(),
        "rasterized scene"
    );
    Ok(bitmap)
}

/// `PixelTransform` as a tiny-skia matrix: uniform scale, y flipped.
fn page_transform(t: &PixelTransform) -> sk::Transform {
    let origin = t.apply(DVec2::ZERO);
    let s = t.scale() as f32;
    sk::Transform::from_row(s, 0.0, 0.0, -s, origin.x as f32, origin.y as f32)
}

fn ink() -> sk::Paint<'static> {
    let mut paint = sk::Paint::default();
    paint.set_color(sk::Color::BLACK);
    paint.anti_alias = true;
    paint
}

fn draw(pixmap: &mut sk::Pixmap, prim: &Primitive, to_px: sk::Transform, style: &Style, dpi: u32) {
    let Some(path) = outline(prim.shape()).and_then(|p| p.transform(to_px)) else {
        trace!(kind = prim.kind().name(), "primitive has no drawable outline");
        return;
    };
    let paint = ink();
    match (prim.shape(), prim.paint()) {
        // Markers are solid dots whatever their paint.
        (Shape::Marker { .. }, _) | (_, Paint::Fill) => {
            pixmap.fill_path(
                &path,
                &paint,
                sk::FillRule::EvenOdd,
                sk::Transform::identity(),
                None,
            );
        }
        (_, Paint::Stroke(class)) => {
            let stroke = sk::Stroke {
                width: style.width_px(class, dpi) as f32,
                line_cap: sk::LineCap::Round,
                line_join: sk::LineJoin::Round,
                ..sk::Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, sk::Transform::identity(), None);
        }
    }
}

/// Logical-space path of a shape.
fn outline(shape: &Shape) -> Option<sk::Path> {
    match shape {
        Shape::Circle { center, radius } => {
            sk::PathBuilder::from_circle(center.x as f32, center.y as f32, *radius as f32)
        }
        Shape::Marker { center, size } => {
            sk::PathBuilder::from_circle(center.x as f32, center.y as f32, (size / 2.0) as f32)
        }
        Shape::Ellipse {
            center,
            width,
            height,
            rotation,
        } => sk::PathBuilder::from_circle(0.0, 0.0, 1.0)?
            .transform(ellipse_frame(*center, *width, *height, *rotation)),
        Shape::Arc {
            center,
            width,
            height,
            rotation,
            start,
            end,
        } => arc_outline(*width, *height, *start, *end)?
            .transform(ellipse_frame(*center, 2.0, 2.0, *rotation)),
        Shape::Polygon { vertices } => polyline(vertices, true),
        Shape::Line { points } => polyline(points, false),
    }
}

/// Maps the unit circle onto an ellipse of the given size, rotated
/// counter-clockwise by `rotation` degrees about `center`.
fn ellipse_frame(center: DVec2, width: f64, height: f64, rotation: f64) -> sk::Transform {
    sk::Transform::from_scale((width / 2.0) as f32, (height / 2.0) as f32)
        .post_concat(sk::Transform::from_rotate(rotation as f32))
        .post_translate(center.x as f32, center.y as f32)
}

fn polyline(points: &[DVec2], closed: bool) -> Option<sk::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

/// Converts arc end angles to the ellipse's parametric angles.
///
/// `start` and `end` are true angles from the centre, as matplotlib's `Arc`
/// reads them. Returns the parametric start and the counter-clockwise sweep,
/// both in degrees. The sweep is taken modulo 360 and an empty sweep means a
/// full turn.
fn arc_parameters(width: f64, height: f64, start: f64, end: f64) -> (f64, f64) {
    let stretch = |deg: f64| {
        let (sin, cos) = deg.to_radians().sin_cos();
        (width * sin).atan2(height * cos).to_degrees()
    };
    let from = stretch(start);
    let sweep = match (end - start).rem_euclid(360.0) {
        s if s == 0.0 => 360.0,
        _ => (stretch(end) - from).rem_euclid(360.0),
    };
    (from, sweep)
}

/// Arc of an unrotated ellipse centred on the origin, as cubic pieces of at
/// most 90 degrees each.
fn arc_outline(width: f64, height: f64, start: f64, end: f64) -> Option<sk::Path> {
    let (from, sweep) = arc_parameters(width, height, start, end);
    let pieces = (sweep / 90.0).ceil().max(1.0) as usize;
    let step = (sweep / pieces as f64).to_radians();
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    let (a, b) = (width / 2.0, height / 2.0);
    let pt = |x: f64, y: f64| ((a * x) as f32, (b * y) as f32);

    let mut theta = from.to_radians();
    let (mut sin, mut cos) = theta.sin_cos();
    let mut pb = sk::PathBuilder::new();
    let (x, y) = pt(cos, sin);
    pb.move_to(x, y);
    for _ in 0..pieces {
        theta += step;
        let (sin1, cos1) = theta.sin_cos();
        let (x1, y1) = pt(cos - k * sin, sin + k * cos);
        let (x2, y2) = pt(cos1 + k * sin1, sin1 - k * cos1);
        let (x, y) = pt(cos1, sin1);
        pb.cubic_to(x1, y1, x2, y2, x, y);
        (sin, cos) = (sin1, cos1);
    }
    pb.finish()
}
