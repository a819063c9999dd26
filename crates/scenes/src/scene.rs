//! Scene composition: a recipe folded into one ordered primitive list.
//!
//! The composer emits the optional border frame, then every placement in
//! recipe order, then every decoration in recipe order. Draw order is
//! z-order, so later primitives paint over earlier ones. Composition either
//! yields a whole [`Scene`] or the first error; nothing partial escapes.

use std::collections::BTreeMap;
use std::ops::Range;

use coloring_core::{params, Page, Primitive, RandomSource, ShapeKind, Style, ValidationError};
use coloring_templates::{Decoration, TemplateId, MAX_BAND_COUNT};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::recipe::Recipe;

/// Knobs a caller may turn without editing the recipe.
///
/// `grass_blades` and `clouds` override the element count of every grass or
/// cloud band in the recipe; `None` keeps the band's own count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComposeOptions {
    pub frame: bool,
    pub grass_blades: Option<usize>,
    pub clouds: Option<usize>,
}

impl ComposeOptions {
    pub const KEYS: &'static [&'static str] = &["frame", "grass_blades", "clouds"];

    /// Reads options from a JSON object such as `{"frame": true, "clouds": 5}`.
    ///
    /// Unknown keys, wrongly typed values and band counts above
    /// [`MAX_BAND_COUNT`] are `InvalidOption`.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        params::reject_unknown(value, Self::KEYS)?;
        let count = |key: &str| -> Result<Option<usize>, ValidationError> {
            match value.get(key) {
                None | Some(Value::Null) => Ok(None),
                Some(_) => match params::opt_usize(value, key, 0)? {
                    n if n > MAX_BAND_COUNT => Err(ValidationError::InvalidOption {
                        name: key.to_string(),
                        reason: format!("must be at most {MAX_BAND_COUNT}, got {n}"),
                    }),
                    n => Ok(Some(n)),
                },
            }
        };
        Ok(Self {
            frame: params::opt_bool(value, "frame", false)?,
            grass_blades: count("grass_blades")?,
            clouds: count("clouds")?,
        })
    }

    fn apply(&self, decoration: Decoration) -> Decoration {
        match decoration {
            Decoration::Grass(mut band) => {
                band.blades = self.grass_blades.unwrap_or(band.blades);
                Decoration::Grass(band)
            }
            Decoration::Clouds(mut band) => {
                band.clouds = self.clouds.unwrap_or(band.clouds);
                Decoration::Clouds(band)
            }
        }
    }
}

/// What produced a run of primitives in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "name", rename_all = "snake_case")]
pub enum Source {
    Frame,
    Template(TemplateId),
    Decoration(&'static str),
}

/// A contiguous run of primitives contributed by one [`Source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub source: Source,
    pub start: usize,
    pub len: usize,
}

impl Segment {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// An immutable composed page: primitives in draw order plus the page and
/// stroke style they are meant to be rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    name: String,
    page: Page,
    style: Style,
    primitives: Vec<Primitive>,
    segments: Vec<Segment>,
}

impl Scene {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Runs of primitives in draw order, one per frame, placement or
    /// decoration.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The primitives contributed by one segment.
    pub fn segment_primitives(&self, segment: &Segment) -> &[Primitive] {
        &self.primitives[segment.range()]
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of primitives of each kind; every kind is present, possibly 0.
    pub fn kind_counts(&self) -> BTreeMap<ShapeKind, usize> {
        let mut counts: BTreeMap<ShapeKind, usize> =
            ShapeKind::ALL.into_iter().map(|k| (k, 0)).collect();
        for p in &self.primitives {
            *counts.entry(p.kind()).or_default() += 1;
        }
        counts
    }
}

/// Turns recipes into scenes on a fixed page with a fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Composer {
    page: Page,
    style: Style,
    options: ComposeOptions,
}

impl Composer {
    pub fn new(options: ComposeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Composes `recipe` into a scene called `name`.
    ///
    /// Decorations draw from `rng` in recipe order, so the same recipe and
    /// seed always produce the same scene.
    pub fn compose<R: RandomSource + ?Sized>(
        &self,
        name: &str,
        recipe: &Recipe,
        rng: &mut R,
    ) -> Result<Scene, ValidationError> {
        let mut primitives = Vec::new();
        let mut segments = Vec::new();
        let mut push = |source: Source, prims: Vec<Primitive>| {
            segments.push(Segment {
                source,
                start: primitives.len(),
                len: prims.len(),
            });
            primitives.extend(prims);
        };

        if self.options.frame {
            push(Source::Frame, vec![self.page.default_frame()?]);
        }
        for placement in &recipe.placements {
            let prims = placement
                .template
                .draw(placement.x, placement.y, placement.scale)?;
            trace!(
                template = placement.template.name(),
                x = placement.x,
                y = placement.y,
                scale = placement.scale,
                primitives = prims.len(),
                "placed template"
            );
            push(Source::Template(placement.template), prims);
        }
        for decoration in &recipe.decorations {
            let decoration = self.options.apply(*decoration);
            let prims = decoration.generate(rng)?;
            trace!(
                decoration = decoration.name(),
                primitives = prims.len(),
                "generated decoration"
            );
            push(Source::Decoration(decoration.name()), prims);
        }

        debug!(
            scene = name,
            placements = recipe.placements.len(),
            decorations = recipe.decorations.len(),
            primitives = primitives.len(),
            frame = self.options.frame,
            "composed scene"
        );
        Ok(Scene {
            name: name.to_string(),
            page: self.page,
            style: self.style,
            primitives,
            segments,
        })
    }
}
