//! Sky templates: smiling sun, crescent moon and five-pointed star.

use coloring_core::{Paint, Primitive, ValidationError};

use crate::sketch::Sketch;

/// Number of sun rays, spaced evenly starting at 0°.
pub const SUN_RAYS: usize = 6;
/// Ray start and end distance from the sun centre.
const RAY_INNER: f64 = 1.15;
const RAY_OUTER: f64 = 1.6;

pub const STAR_POINTS: usize = 5;
/// Inner vertex radius relative to the tip radius.
const STAR_INNER_RATIO: f64 = 0.4;

/// Smiling sun. Anchor is the centre; the disc has radius `scale`.
///
/// The eyes are the only filled parts.
pub fn sun(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.circle(0.0, 0.0, 1.0, Paint::MAIN)?;
    for i in 0..SUN_RAYS {
        let (sin, cos) = (i as f64 * 360.0 / SUN_RAYS as f64).to_radians().sin_cos();
        s.line(
            &[
                (RAY_INNER * cos, RAY_INNER * sin),
                (RAY_OUTER * cos, RAY_OUTER * sin),
            ],
            Paint::MAIN,
        )?;
    }
    s.circle(-0.3, 0.2, 0.1, Paint::Fill)?
        .circle(0.3, 0.2, 0.1, Paint::Fill)?
        .arc((0.0, -0.2), (0.6, 0.4), 0.0, (180.0, 360.0), Paint::MAIN)?;
    Ok(s.finish())
}

/// Sleeping crescent moon. Anchor is the centre of the full disc the
/// crescent is cut from; the outer edge has radius `scale`.
///
/// The inner edge is a half ellipse of half the width sharing the outer
/// edge's tips, so the crescent is lit on the left.
pub fn moon(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.arc((0.0, 0.0), (2.0, 2.0), 0.0, (90.0, 270.0), Paint::MAIN)?
        .arc((0.0, 0.0), (1.0, 2.0), 0.0, (90.0, 270.0), Paint::MAIN)?
        .arc((-0.74, 0.3), (0.14, 0.1), 0.0, (180.0, 360.0), Paint::DETAIL)?
        .arc((-0.74, -0.25), (0.14, 0.1), 0.0, (180.0, 360.0), Paint::DETAIL)?;
    Ok(s.finish())
}

/// Five-pointed star as one polygon. Anchor is the centre; tips lie at
/// radius `scale`, the first pointing straight up.
pub fn star(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    let step = 180.0 / STAR_POINTS as f64;
    let vertices: Vec<(f64, f64)> = (0..2 * STAR_POINTS)
        .map(|k| {
            let r = if k % 2 == 0 { 1.0 } else { STAR_INNER_RATIO };
            let (sin, cos) = (90.0 + step * k as f64).to_radians().sin_cos();
            (r * cos, r * sin)
        })
        .collect();
    s.polygon(&vertices, Paint::MAIN)?;
    Ok(s.finish())
}
