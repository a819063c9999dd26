//! Plant templates: flower, apple tree and a bunch of grapes.

use coloring_core::{Paint, Primitive, ValidationError};

use crate::sketch::Sketch;

/// Number of petals, spaced evenly around the flower centre.
pub const FLOWER_PETALS: usize = 4;
/// Distance from flower centre to each petal centre.
const PETAL_OFFSET: f64 = 0.7;

/// Apple centres inside the tree crown.
const APPLES: [(f64, f64); 4] = [(-0.3, 0.8), (0.4, 1.2), (-0.6, 0.5), (0.2, 0.6)];

/// Grapes per row, top to bottom.
const GRAPE_ROWS: [usize; 4] = [4, 3, 2, 1];
const GRAPE_RADIUS: f64 = 0.3;
const GRAPE_SPACING: f64 = 0.55;
const GRAPE_ROW_STEP: f64 = 0.48;

/// Flower on a stem with two leaves. Anchor is the flower centre.
///
/// Petal `i` sits at angle `i · 360° / FLOWER_PETALS` and is rotated by the
/// same angle.
pub fn flower(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.circle(0.0, 0.0, 0.3, Paint::MAIN)?;
    for i in 0..FLOWER_PETALS {
        let deg = i as f64 * 360.0 / FLOWER_PETALS as f64;
        let (sin, cos) = deg.to_radians().sin_cos();
        s.ellipse(
            (PETAL_OFFSET * cos, PETAL_OFFSET * sin),
            (0.5, 0.8),
            deg,
            Paint::MAIN,
        )?;
    }
    s.line(&[(0.0, -0.8), (0.0, -3.0)], Paint::MAIN)?
        .polygon(&[(-0.3, -1.5), (-0.8, -1.8), (-0.2, -2.2)], Paint::MAIN)?
        .polygon(&[(0.3, -2.0), (0.8, -2.3), (0.2, -2.7)], Paint::MAIN)?;
    Ok(s.finish())
}

/// Apple tree. Anchor is the top of the trunk.
pub fn tree(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.rect((-0.2, -2.0), (0.4, 2.0), Paint::MAIN)?
        .circle(0.0, 1.0, 1.0, Paint::MAIN)?
        .circle(-0.7, 0.3, 0.8, Paint::MAIN)?
        .circle(0.7, 0.3, 0.8, Paint::MAIN)?;
    for (ax, ay) in APPLES {
        s.circle(ax, ay, 0.12, Paint::DETAIL)?;
    }
    Ok(s.finish())
}

/// Bunch of grapes hanging from a stem with one leaf.
///
/// Anchor is the centre of the top row. Rows of 4, 3, 2 and 1 grapes are
/// centred on the anchor's x and step down by a fixed pitch.
pub fn grapes(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    for (row, &n) in GRAPE_ROWS.iter().enumerate() {
        let gy = -(row as f64) * GRAPE_ROW_STEP;
        for i in 0..n {
            let gx = (i as f64 - (n as f64 - 1.0) / 2.0) * GRAPE_SPACING;
            s.circle(gx, gy, GRAPE_RADIUS, Paint::MAIN)?;
        }
    }
    s.line(&[(0.0, 0.28), (0.12, 0.85)], Paint::MAIN)?
        .polygon(
            &[(0.12, 0.7), (0.55, 1.05), (1.1, 0.95), (0.75, 0.55)],
            Paint::MAIN,
        )?
        .line(&[(0.12, 0.7), (0.95, 0.8)], Paint::DETAIL)?
        .arc((-0.25, 0.75), (0.4, 0.4), 0.0, (0.0, 270.0), Paint::DETAIL)?;
    Ok(s.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::{dvec2, Shape, ShapeKind};

    #[test]
    fn flower_has_exactly_four_petals_ninety_degrees_apart() {
        let prims = flower(5.0, 7.0, 1.0).unwrap();
        let petals: Vec<_> = prims
            .iter()
            .filter_map(|p| match p.shape() {
                Shape::Ellipse {
                    center, rotation, ..
                } => Some((*center, *rotation)),
                _ => None,
            })
            .collect();
        assert_eq!(petals.len(), FLOWER_PETALS);
        for (i, (center, rotation)) in petals.iter().enumerate() {
            assert!((rotation - 90.0 * i as f64).abs() < 1e-12);
            assert!((center.distance(dvec2(5.0, 7.0)) - PETAL_OFFSET).abs() < 1e-12);
        }
    }

    #[test]
    fn flower_leaves_are_triangles() {
        let prims = flower(5.0, 7.0, 1.0).unwrap();
        let leaves: Vec<_> = prims
            .iter()
            .filter(|p| p.kind() == ShapeKind::Polygon)
            .collect();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|l| l.control_points().len() == 3));
    }

    #[test]
    fn tree_has_trunk_three_crowns_and_four_apples() {
        let prims = tree(2.0, 5.0, 1.0).unwrap();
        assert_eq!(prims[0].kind(), ShapeKind::Polygon);
        let main_circles = prims
            .iter()
            .filter(|p| p.kind() == ShapeKind::Circle && p.paint() == Paint::MAIN)
            .count();
        let apples = prims.iter().filter(|p| p.paint() == Paint::DETAIL).count();
        assert_eq!(main_circles, 3);
        assert_eq!(apples, APPLES.len());
    }

    #[test]
    fn grapes_form_a_ten_grape_triangle() {
        let prims = grapes(5.0, 9.0, 1.0).unwrap();
        let grapes: Vec<_> = prims
            .iter()
            .filter(|p| p.kind() == ShapeKind::Circle)
            .collect();
        assert_eq!(grapes.len(), 10);
        // Bottom grape hangs centred under the anchor.
        let bottom = grapes.last().unwrap().control_points()[0];
        assert!((bottom.x - 5.0).abs() < 1e-12);
        assert!((bottom.y - (9.0 - 3.0 * GRAPE_ROW_STEP)).abs() < 1e-12);
    }

    #[test]
    fn plants_reject_negative_scale() {
        assert!(flower(0.0, 0.0, -0.5).is_err());
        assert!(tree(0.0, 0.0, 0.0).is_err());
        assert!(grapes(0.0, 0.0, -1.0).is_err());
    }
}
