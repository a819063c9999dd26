//! Anchor-relative primitive builder shared by all templates.
//!
//! A [`Sketch`] owns an anchor point and a scale. Every offset and length
//! passed to it is a ratio that gets multiplied by the scale, so a template
//! written against a `Sketch` is scale- and translation-invariant by
//! construction. Angles pass through untouched.

use coloring_core::{dvec2, DVec2, Paint, Primitive, ValidationError};

pub struct Sketch {
    anchor: DVec2,
    scale: f64,
    out: Vec<Primitive>,
}

impl Sketch {
    /// Starts a sketch at `(x, y)`.
    ///
    /// Returns `ValidationError::NonPositiveScale` unless `scale` is finite
    /// and positive, and `ValidationError::NonFiniteValue` for a non-finite
    /// anchor.
    pub fn new(x: f64, y: f64, scale: f64) -> Result<Self, ValidationError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ValidationError::NonPositiveScale(scale));
        }
        let anchor = dvec2(x, y);
        if !anchor.is_finite() {
            return Err(ValidationError::NonFiniteValue("template anchor"));
        }
        Ok(Self {
            anchor,
            scale,
            out: Vec::new(),
        })
    }

    /// Absolute position of the ratio offset `(dx, dy)`.
    pub fn at(&self, dx: f64, dy: f64) -> DVec2 {
        self.anchor + dvec2(dx, dy) * self.scale
    }

    /// Absolute length of the ratio `r`.
    pub fn len(&self, r: f64) -> f64 {
        r * self.scale
    }

    fn push(
        &mut self,
        p: Result<Primitive, ValidationError>,
    ) -> Result<&mut Self, ValidationError> {
        self.out.push(p?);
        Ok(self)
    }

    pub fn circle(
        &mut self,
        dx: f64,
        dy: f64,
        r: f64,
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let p = Primitive::circle(self.at(dx, dy), self.len(r), paint);
        self.push(p)
    }

    pub fn ellipse(
        &mut self,
        (dx, dy): (f64, f64),
        (w, h): (f64, f64),
        rotation: f64,
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let p = Primitive::ellipse(self.at(dx, dy), self.len(w), self.len(h), rotation, paint);
        self.push(p)
    }

    pub fn polygon(
        &mut self,
        vertices: &[(f64, f64)],
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let pts: Vec<DVec2> = vertices.iter().map(|&(dx, dy)| self.at(dx, dy)).collect();
        self.push(Primitive::polygon(pts, paint))
    }

    /// Axis-aligned rectangle with its lower-left corner at `(dx, dy)`.
    pub fn rect(
        &mut self,
        (dx, dy): (f64, f64),
        (w, h): (f64, f64),
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        if !(w > 0.0 && h > 0.0) {
            return Err(ValidationError::DegenerateGeometry {
                kind: "polygon",
                reason: format!("rectangle {w} x {h} has no area"),
            });
        }
        self.polygon(&[(dx, dy), (dx + w, dy), (dx + w, dy + h), (dx, dy + h)], paint)
    }

    /// Elliptical arc from `start` to `end` degrees (counter-clockwise).
    pub fn arc(
        &mut self,
        (dx, dy): (f64, f64),
        (w, h): (f64, f64),
        rotation: f64,
        (start, end): (f64, f64),
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let p = Primitive::arc(
            self.at(dx, dy),
            self.len(w),
            self.len(h),
            rotation,
            start,
            end,
            paint,
        );
        self.push(p)
    }

    pub fn line(
        &mut self,
        points: &[(f64, f64)],
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let pts: Vec<DVec2> = points.iter().map(|&(dx, dy)| self.at(dx, dy)).collect();
        self.push(Primitive::line(pts, paint))
    }

    pub fn marker(
        &mut self,
        dx: f64,
        dy: f64,
        size: f64,
        paint: Paint,
    ) -> Result<&mut Self, ValidationError> {
        let p = Primitive::marker(self.at(dx, dy), self.len(size), paint);
        self.push(p)
    }

    pub fn finish(self) -> Vec<Primitive> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::Shape;

    #[test]
    fn rejects_non_positive_and_non_finite_scale() {
        assert_eq!(
            Sketch::new(0.0, 0.0, 0.0).err(),
            Some(ValidationError::NonPositiveScale(0.0))
        );
        assert!(Sketch::new(0.0, 0.0, -2.0).is_err());
        assert!(Sketch::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_non_finite_anchor() {
        assert!(Sketch::new(f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn offsets_and_lengths_scale_from_anchor() {
        let s = Sketch::new(2.0, 3.0, 1.5).unwrap();
        assert_eq!(s.at(1.0, -2.0), dvec2(3.5, 0.0));
        assert!((s.len(0.4) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn rect_emits_four_counter_clockwise_vertices() {
        let mut s = Sketch::new(0.0, 0.0, 2.0).unwrap();
        s.rect((-0.5, -0.5), (1.0, 1.0), Paint::MAIN).unwrap();
        let prims = s.finish();
        let Shape::Polygon { vertices } = prims[0].shape() else {
            panic!("rect must be a polygon");
        };
        assert_eq!(
            vertices,
            &vec![dvec2(-1.0, -1.0), dvec2(1.0, -1.0), dvec2(1.0, 1.0), dvec2(-1.0, 1.0)]
        );
    }

    #[test]
    fn degenerate_parts_propagate_errors() {
        let mut s = Sketch::new(0.0, 0.0, 1.0).unwrap();
        assert!(s.circle(0.0, 0.0, 0.0, Paint::MAIN).is_err());
        assert!(s.rect((0.0, 0.0), (0.0, 1.0), Paint::MAIN).is_err());
        assert!(s.line(&[(0.0, 0.0)], Paint::DETAIL).is_err());
    }

    #[test]
    fn chaining_preserves_insertion_order() {
        let mut s = Sketch::new(0.0, 0.0, 1.0).unwrap();
        s.circle(0.0, 0.0, 1.0, Paint::MAIN)
            .unwrap()
            .line(&[(0.0, 0.0), (1.0, 1.0)], Paint::DETAIL)
            .unwrap()
            .marker(0.0, 0.0, 0.1, Paint::DETAIL)
            .unwrap();
        let kinds: Vec<_> = s.finish().iter().map(|p| p.kind().name()).collect();
        assert_eq!(kinds, ["circle", "line", "marker"]);
    }
}
