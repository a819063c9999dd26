#![deny(unsafe_code)]
//! Core types for the coloring-book engine.
//!
//! Provides the [`Primitive`] exchange format shared by templates and the
//! renderer, the immutable stroke [`Style`], the [`Page`] coordinate model,
//! [`ValidationError`], the [`RandomSource`] used by decorations, strict JSON
//! option helpers and the serializable [`RenderPlan`].

pub mod error;
pub mod page;
pub mod params;
pub mod plan;
pub mod primitive;
pub mod prng;
pub mod style;

pub use glam::{dvec2, DVec2};

pub use error::ValidationError;
pub use page::{Page, PixelTransform, MAX_DPI};
pub use plan::RenderPlan;
pub use primitive::{Paint, Primitive, Shape, ShapeKind, StrokeClass};
pub use prng::{RandomSource, Xorshift64};
pub use style::Style;
