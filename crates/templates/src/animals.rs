//! Creature templates: cat, dog, butterfly, fish and a simplified squirrel.
//!
//! Ratios below are in units of `scale`, relative to the anchor. Positive y
//! is up.

use coloring_core::{Paint, Primitive, ValidationError};

use crate::sketch::Sketch;

/// Leg centre x-offsets for the cat, left to right.
const CAT_LEG_X: [f64; 4] = [-0.6, -0.1, 0.3, 0.8];
/// Leg centre x-offsets for the dog, left to right.
const DOG_LEG_X: [f64; 4] = [-0.6, -0.2, 0.2, 0.6];

/// Sitting cat. Anchor is the head centre; the head has radius `scale`.
///
/// Parts in draw order: head, two ears, two eyes, nose, three mouth strokes,
/// four whiskers, body, then four legs each followed by its paw, then tail.
pub fn cat(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.circle(0.0, 0.0, 1.0, Paint::MAIN)?
        .polygon(&[(-0.7, 0.5), (-0.3, 1.2), (-0.1, 0.7)], Paint::MAIN)?
        .polygon(&[(0.1, 0.7), (0.3, 1.2), (0.7, 0.5)], Paint::MAIN)?
        .circle(-0.3, 0.2, 0.15, Paint::DETAIL)?
        .circle(0.3, 0.2, 0.15, Paint::DETAIL)?
        .polygon(&[(0.0, -0.1), (-0.1, -0.3), (0.1, -0.3)], Paint::DETAIL)?;

    // W-shaped mouth.
    s.line(&[(-0.2, -0.5), (0.0, -0.4), (0.2, -0.5)], Paint::MAIN)?
        .line(&[(-0.1, -0.45), (-0.3, -0.6)], Paint::MAIN)?
        .line(&[(0.1, -0.45), (0.3, -0.6)], Paint::MAIN)?;

    s.line(&[(-0.8, 0.0), (-0.5, 0.1)], Paint::DETAIL)?
        .line(&[(-0.8, -0.2), (-0.5, -0.1)], Paint::DETAIL)?
        .line(&[(0.5, 0.1), (0.8, 0.0)], Paint::DETAIL)?
        .line(&[(0.5, -0.1), (0.8, -0.2)], Paint::DETAIL)?;

    s.ellipse((0.0, -2.0), (1.4, 1.8), 0.0, Paint::MAIN)?;
    for lx in CAT_LEG_X {
        s.rect((lx - 0.15, -3.2), (0.3, 0.8), Paint::MAIN)?
            .circle(lx, -3.4, 0.2, Paint::MAIN)?;
    }
    s.arc((1.2, -1.0), (1.0, 2.0), 45.0, (0.0, 180.0), Paint::MAIN)?;
    Ok(s.finish())
}

/// Dog with floppy ears. Anchor is the head centre.
pub fn dog(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.ellipse((0.0, 0.0), (1.4, 1.2), 0.0, Paint::MAIN)?
        .ellipse((-0.6, 0.3), (0.4, 0.8), 0.0, Paint::MAIN)?
        .ellipse((0.6, 0.3), (0.4, 0.8), 0.0, Paint::MAIN)?
        .circle(-0.3, 0.1, 0.15, Paint::DETAIL)?
        .circle(0.3, 0.1, 0.15, Paint::DETAIL)?
        .circle(0.0, -0.3, 0.1, Paint::Fill)?
        .arc((0.0, -0.6), (0.6, 0.4), 0.0, (0.0, 180.0), Paint::MAIN)?
        .ellipse((0.0, -0.8), (0.2, 0.3), 0.0, Paint::MAIN)?
        .ellipse((0.0, -2.0), (1.6, 1.8), 0.0, Paint::MAIN)?;
    for lx in DOG_LEG_X {
        s.rect((lx - 0.125, -3.2), (0.25, 0.8), Paint::MAIN)?
            .circle(lx, -3.4, 0.15, Paint::MAIN)?;
    }
    // Wagging tail.
    s.arc((1.0, -1.5), (0.8, 1.5), 30.0, (0.0, 120.0), Paint::MAIN)?;
    Ok(s.finish())
}

/// Butterfly seen from above. Anchor is the middle of the body stroke.
pub fn butterfly(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.line(&[(0.0, -1.0), (0.0, 1.0)], Paint::MAIN)?
        .line(&[(0.0, 1.0), (-0.2, 1.3)], Paint::DETAIL)?
        .line(&[(0.0, 1.0), (0.2, 1.3)], Paint::DETAIL)?
        .marker(-0.2, 1.3, 0.12, Paint::DETAIL)?
        .marker(0.2, 1.3, 0.12, Paint::DETAIL)?;

    // Upper wings, then lower wings.
    s.ellipse((-0.6, 0.3), (0.8, 1.2), 0.0, Paint::MAIN)?
        .ellipse((0.6, 0.3), (0.8, 1.2), 0.0, Paint::MAIN)?
        .ellipse((-0.5, -0.5), (0.6, 0.8), 0.0, Paint::MAIN)?
        .ellipse((0.5, -0.5), (0.6, 0.8), 0.0, Paint::MAIN)?;

    for wx in [-0.6, 0.6] {
        for wy in [0.5, 0.1] {
            s.circle(wx, wy, 0.1, Paint::DETAIL)?;
        }
    }
    Ok(s.finish())
}

/// Fish swimming left. Anchor is the body centre; the body is `2 × 1.2`.
pub fn fish(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.ellipse((0.0, 0.0), (2.0, 1.2), 0.0, Paint::MAIN)?
        .polygon(&[(0.95, 0.0), (1.6, 0.5), (1.6, -0.5)], Paint::MAIN)?
        .polygon(&[(-0.2, 0.57), (0.15, 0.95), (0.45, 0.5)], Paint::MAIN)?
        .circle(-0.55, 0.15, 0.12, Paint::DETAIL)?
        .line(&[(-1.0, -0.1), (-0.8, -0.15)], Paint::DETAIL)?
        .arc((-0.35, 0.0), (0.4, 0.8), 0.0, (-60.0, 60.0), Paint::DETAIL)?;

    // Scales.
    for (dx, dy) in [(0.1, 0.15), (0.45, -0.1), (0.1, -0.3)] {
        s.arc((dx, dy), (0.3, 0.3), 0.0, (-70.0, 70.0), Paint::DETAIL)?;
    }

    // Bubbles rising from the mouth.
    s.circle(-1.3, 0.4, 0.08, Paint::DETAIL)?
        .circle(-1.5, 0.8, 0.12, Paint::DETAIL)?
        .circle(-1.35, 1.25, 0.1, Paint::DETAIL)?;
    Ok(s.finish())
}

/// Simplified squirrel holding an acorn. Anchor is the head centre.
///
/// Built only from ellipses, polygons, circles and lines.
pub fn squirrel(x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
    let mut s = Sketch::new(x, y, scale)?;
    s.ellipse((0.0, 0.0), (1.0, 0.85), 0.0, Paint::MAIN)?
        .polygon(&[(-0.38, 0.25), (-0.28, 0.72), (-0.08, 0.4)], Paint::MAIN)?
        .polygon(&[(0.08, 0.4), (0.28, 0.72), (0.38, 0.25)], Paint::MAIN)?
        .circle(-0.2, 0.05, 0.08, Paint::DETAIL)?
        .circle(0.2, 0.05, 0.08, Paint::DETAIL)?
        .circle(0.0, -0.15, 0.06, Paint::DETAIL)?
        .line(&[(-0.45, -0.12), (-0.15, -0.18)], Paint::DETAIL)?
        .line(&[(0.15, -0.18), (0.45, -0.12)], Paint::DETAIL)?;

    s.ellipse((0.1, -1.2), (1.2, 1.6), 0.0, Paint::MAIN)?
        .ellipse((1.05, -0.55), (0.9, 2.0), -20.0, Paint::MAIN)?
        .ellipse((-0.2, -2.0), (0.45, 0.2), 0.0, Paint::MAIN)?
        .ellipse((0.4, -2.0), (0.45, 0.2), 0.0, Paint::MAIN)?;

    // Acorn and its cap.
    s.ellipse((-0.55, -1.05), (0.3, 0.4), 0.0, Paint::DETAIL)?
        .polygon(&[(-0.72, -0.88), (-0.38, -0.88), (-0.55, -0.72)], Paint::DETAIL)?;
    Ok(s.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::{dvec2, Shape, ShapeKind};

    fn count(prims: &[Primitive], kind: ShapeKind) -> usize {
        prims.iter().filter(|p| p.kind() == kind).count()
    }

    /// Axis-aligned rectangles (4-vertex polygons) of the given size.
    fn rects(prims: &[Primitive], w: f64, h: f64) -> usize {
        prims
            .iter()
            .filter(|p| match p.shape() {
                Shape::Polygon { vertices } if vertices.len() == 4 => {
                    ((vertices[1].x - vertices[0].x) - w).abs() < 1e-9
                        && ((vertices[2].y - vertices[1].y) - h).abs() < 1e-9
                }
                _ => false,
            })
            .count()
    }

    fn circles_of_radius(prims: &[Primitive], r: f64) -> Vec<&Primitive> {
        prims
            .iter()
            .filter(|p| {
                matches!(p.shape(), Shape::Circle { radius, .. } if (radius - r).abs() < 1e-9)
            })
            .collect()
    }

    #[test]
    fn cat_has_four_legs_and_four_paws() {
        let prims = cat(5.0, 7.0, 1.0).unwrap();
        assert_eq!(rects(&prims, 0.3, 0.8), 4);
        let paws = circles_of_radius(&prims, 0.2);
        assert_eq!(paws.len(), 4);
        // Paws sit under their legs, left to right.
        let xs: Vec<f64> = paws.iter().map(|p| p.control_points()[0].x).collect();
        for (x, lx) in xs.iter().zip(CAT_LEG_X) {
            assert!((x - (5.0 + lx)).abs() < 1e-9);
        }
    }

    #[test]
    fn cat_head_is_first_and_tail_is_last() {
        let prims = cat(5.0, 7.0, 1.5).unwrap();
        assert_eq!(
            prims[0].shape(),
            &Shape::Circle {
                center: dvec2(5.0, 7.0),
                radius: 1.5
            }
        );
        assert_eq!(prims.last().map(Primitive::kind), Some(ShapeKind::Arc));
    }

    #[test]
    fn cat_features_use_detail_strokes_and_nothing_is_filled() {
        let prims = cat(5.0, 7.0, 1.0).unwrap();
        assert!(prims.iter().all(|p| !p.is_filled()));
        let details = prims.iter().filter(|p| p.paint() == Paint::DETAIL).count();
        // Two eyes, nose, four whiskers.
        assert_eq!(details, 7);
    }

    #[test]
    fn dog_nose_is_the_only_fill() {
        let prims = dog(5.0, 7.0, 1.0).unwrap();
        let filled: Vec<_> = prims.iter().filter(|p| p.is_filled()).collect();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled[0].control_points()[0], dvec2(5.0, 6.7));
        assert_eq!(rects(&prims, 0.25, 0.8), 4);
        assert_eq!(circles_of_radius(&prims, 0.15).len(), 6); // eyes + paws
    }

    #[test]
    fn butterfly_has_four_wings_two_antenna_tips_and_four_spots() {
        let prims = butterfly(7.0, 10.0, 0.5).unwrap();
        assert_eq!(count(&prims, ShapeKind::Ellipse), 4);
        assert_eq!(count(&prims, ShapeKind::Marker), 2);
        assert_eq!(circles_of_radius(&prims, 0.05).len(), 4);
    }

    #[test]
    fn fish_has_tail_fin_and_three_bubbles() {
        let prims = fish(3.0, 5.0, 1.0).unwrap();
        assert_eq!(count(&prims, ShapeKind::Polygon), 2);
        assert_eq!(count(&prims, ShapeKind::Circle), 4); // eye + bubbles
        assert_eq!(count(&prims, ShapeKind::Arc), 4); // gill + scales
    }

    #[test]
    fn squirrel_has_ellipse_head_polygon_ears_and_no_arcs() {
        let prims = squirrel(5.0, 8.0, 1.0).unwrap();
        assert_eq!(prims[0].kind(), ShapeKind::Ellipse);
        assert_eq!(prims[0].control_points()[0], dvec2(5.0, 8.0));
        assert!(count(&prims, ShapeKind::Polygon) >= 2);
        assert_eq!(count(&prims, ShapeKind::Arc), 0);
    }

    #[test]
    fn creatures_reject_non_positive_scale() {
        for f in [cat, dog, butterfly, fish, squirrel] {
            assert_eq!(f(1.0, 1.0, 0.0).unwrap_err(), ValidationError::NonPositiveScale(0.0));
            assert!(f(1.0, 1.0, -1.0).is_err());
        }
    }
}
