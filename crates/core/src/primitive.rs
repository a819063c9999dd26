//! Drawable primitives: the exchange format between templates and the renderer.
//!
//! A [`Primitive`] pairs a [`Shape`] (geometry in page logical units, y up)
//! with a [`Paint`]. Construction validates the geometry, so every primitive
//! that exists is drawable. Angles are in degrees, counter-clockwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Stroke-width class of an outlined primitive.
///
/// `Main` marks outline-defining strokes, `Detail` marks secondary features.
/// The actual widths live in [`Style`](crate::style::Style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeClass {
    Main,
    Detail,
}

/// How a primitive is painted: outlined with a stroke class, or solid black.
///
/// A filled primitive has no stroke class by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Stroke(StrokeClass),
    Fill,
}

impl Paint {
    pub const MAIN: Paint = Paint::Stroke(StrokeClass::Main);
    pub const DETAIL: Paint = Paint::Stroke(StrokeClass::Detail);
}

/// The kind of a primitive, without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Polygon,
    Arc,
    Line,
    Marker,
}

impl ShapeKind {
    /// All kinds in declaration order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Polygon,
        ShapeKind::Arc,
        ShapeKind::Line,
        ShapeKind::Marker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Arc => "arc",
            ShapeKind::Line => "line",
            ShapeKind::Marker => "marker",
        }
    }
}

/// Geometry of a primitive, in page logical units.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle {
        center: DVec2,
        radius: f64,
    },
    /// Full ellipse; `width`/`height` are diameters before rotation.
    Ellipse {
        center: DVec2,
        width: f64,
        height: f64,
        rotation: f64,
    },
    /// Closed outline through the vertices in order.
    Polygon { vertices: Vec<DVec2> },
    /// Section of an ellipse from `start` to `end` degrees counter-clockwise.
    /// Angles are true angles from the centre in the ellipse's rotated frame.
    Arc {
        center: DVec2,
        width: f64,
        height: f64,
        rotation: f64,
        start: f64,
        end: f64,
    },
    /// Open polyline through the points in order.
    Line { points: Vec<DVec2> },
    /// A solid dot of diameter `size`.
    Marker { center: DVec2, size: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Arc { .. } => ShapeKind::Arc,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Marker { .. } => ShapeKind::Marker,
        }
    }

    /// Checks that the geometry is finite and non-degenerate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let kind = self.kind().name();
        match self {
            Shape::Circle { center, radius } => {
                check_point(*center, "circle center")?;
                check_positive(kind, "radius", *radius)
            }
            Shape::Ellipse {
                center,
                width,
                height,
                rotation,
            } => {
                check_point(*center, "ellipse center")?;
                check_finite(*rotation, "ellipse rotation")?;
                check_positive(kind, "width", *width)?;
                check_positive(kind, "height", *height)
            }
            Shape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(ValidationError::degenerate(
                        kind,
                        format!("needs at least 3 vertices, got {}", vertices.len()),
                    ));
                }
                vertices
                    .iter()
                    .try_for_each(|&v| check_point(v, "polygon vertex"))
            }
            Shape::Arc {
                center,
                width,
                height,
                rotation,
                start,
                end,
            } => {
                check_point(*center, "arc center")?;
                check_finite(*rotation, "arc rotation")?;
                check_finite(*start, "arc start angle")?;
                check_finite(*end, "arc end angle")?;
                check_positive(kind, "width", *width)?;
                check_positive(kind, "height", *height)
            }
            Shape::Line { points } => {
                if points.len() < 2 {
                    return Err(ValidationError::degenerate(
                        kind,
                        format!("needs at least 2 points, got {}", points.len()),
                    ));
                }
                points.iter().try_for_each(|&p| check_point(p, "line point"))
            }
            Shape::Marker { center, size } => {
                check_point(*center, "marker center")?;
                check_positive(kind, "size", *size)
            }
        }
    }

    /// Positional points of the shape: centers, vertices or line points.
    pub fn control_points(&self) -> Vec<DVec2> {
        match self {
            Shape::Circle { center, .. }
            | Shape::Ellipse { center, .. }
            | Shape::Arc { center, .. }
            | Shape::Marker { center, .. } => vec![*center],
            Shape::Polygon { vertices } => vertices.clone(),
            Shape::Line { points } => points.clone(),
        }
    }

    /// Applies `f` to every position and `g` to every linear dimension.
    fn map(&self, f: impl Fn(DVec2) -> DVec2, g: impl Fn(f64) -> f64) -> Shape {
        match self {
            Shape::Circle { center, radius } => Shape::Circle {
                center: f(*center),
                radius: g(*radius),
            },
            Shape::Ellipse {
                center,
                width,
                height,
                rotation,
            } => Shape::Ellipse {
                center: f(*center),
                width: g(*width),
                height: g(*height),
                rotation: *rotation,
            },
            Shape::Polygon { vertices } => Shape::Polygon {
                vertices: vertices.iter().map(|&v| f(v)).collect(),
            },
            Shape::Arc {
                center,
                width,
                height,
                rotation,
                start,
                end,
            } => Shape::Arc {
                center: f(*center),
                width: g(*width),
                height: g(*height),
                rotation: *rotation,
                start: *start,
                end: *end,
            },
            Shape::Line { points } => Shape::Line {
                points: points.iter().map(|&p| f(p)).collect(),
            },
            Shape::Marker { center, size } => Shape::Marker {
                center: f(*center),
                size: g(*size),
            },
        }
    }

    /// Scalar parameters in a fixed order: lengths first, then angles.
    fn scalars(&self) -> Vec<f64> {
        match self {
            Shape::Circle { radius, .. } => vec![*radius],
            Shape::Ellipse {
                width,
                height,
                rotation,
                ..
            } => vec![*width, *height, *rotation],
            Shape::Arc {
                width,
                height,
                rotation,
                start,
                end,
                ..
            } => vec![*width, *height, *rotation, *start, *end],
            Shape::Marker { size, .. } => vec![*size],
            Shape::Polygon { .. } | Shape::Line { .. } => Vec::new(),
        }
    }
}

/// One drawable unit: validated geometry plus paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primitive {
    #[serde(flatten)]
    shape: Shape,
    paint: Paint,
}

impl Primitive {
    /// Wraps a shape after validating it.
    pub fn new(shape: Shape, paint: Paint) -> Result<Self, ValidationError> {
        shape.validate()?;
        Ok(Self { shape, paint })
    }

    pub fn circle(center: DVec2, radius: f64, paint: Paint) -> Result<Self, ValidationError> {
        Self::new(Shape::Circle { center, radius }, paint)
    }

    pub fn ellipse(
        center: DVec2,
        width: f64,
        height: f64,
        rotation: f64,
        paint: Paint,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Ellipse {
                center,
                width,
                height,
                rotation,
            },
            paint,
        )
    }

    pub fn polygon(
        vertices: impl Into<Vec<DVec2>>,
        paint: Paint,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Polygon {
                vertices: vertices.into(),
            },
            paint,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        center: DVec2,
        width: f64,
        height: f64,
        rotation: f64,
        start: f64,
        end: f64,
        paint: Paint,
    ) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Arc {
                center,
                width,
                height,
                rotation,
                start,
                end,
            },
            paint,
        )
    }

    pub fn line(points: impl Into<Vec<DVec2>>, paint: Paint) -> Result<Self, ValidationError> {
        Self::new(
            Shape::Line {
                points: points.into(),
            },
            paint,
        )
    }

    pub fn marker(center: DVec2, size: f64, paint: Paint) -> Result<Self, ValidationError> {
        Self::new(Shape::Marker { center, size }, paint)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn paint(&self) -> Paint {
        self.paint
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn is_filled(&self) -> bool {
        self.paint == Paint::Fill
    }

    /// The stroke class, or `None` for filled primitives.
    pub fn stroke_class(&self) -> Option<StrokeClass> {
        match self.paint {
            Paint::Stroke(class) => Some(class),
            Paint::Fill => None,
        }
    }

    pub fn control_points(&self) -> Vec<DVec2> {
        self.shape.control_points()
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: DVec2) -> Self {
        Self {
            shape: self.shape.map(|p| p + offset, |l| l),
            paint: self.paint,
        }
    }

    /// Returns a copy scaled uniformly about `origin`. Angles are unchanged.
    ///
    /// Fails with [`ValidationError::NonPositiveScale`] unless `factor` is
    /// finite and positive.
    pub fn scaled_about(&self, origin: DVec2, factor: f64) -> Result<Self, ValidationError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ValidationError::NonPositiveScale(factor));
        }
        Ok(Self {
            shape: self
                .shape
                .map(|p| origin + (p - origin) * factor, |l| l * factor),
            paint: self.paint,
        })
    }

    /// Compares kind, paint and every parameter within an absolute tolerance.
    pub fn approx_eq(&self, other: &Primitive, eps: f64) -> bool {
        if self.kind() != other.kind() || self.paint != other.paint {
            return false;
        }
        let (pa, pb) = (self.control_points(), other.control_points());
        let (sa, sb) = (self.shape.scalars(), other.shape.scalars());
        pa.len() == pb.len()
            && pa.iter().zip(&pb).all(|(a, b)| a.abs_diff_eq(*b, eps))
            && sa.iter().zip(&sb).all(|(a, b)| (a - b).abs() <= eps)
    }
}

fn check_finite(value: f64, what: &'static str) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteValue(what))
    }
}

fn check_point(p: DVec2, what: &'static str) -> Result<(), ValidationError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteValue(what))
    }
}

fn check_positive(kind: &'static str, what: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::degenerate(kind, format!("{what} is not finite")));
    }
    if value <= 0.0 {
        return Err(ValidationError::degenerate(
            kind,
            format!("{what} must be positive, got {value}"),
        ));
    }
    Ok(())
}
