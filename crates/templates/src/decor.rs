//! Decorative generators: a strip of grass and a row of clouds.
//!
//! Unlike templates these fill a band of the page rather than sitting on an
//! anchor. Element count and x-positions are fixed (evenly spaced, like
//! `linspace`); only per-element size or lean is drawn from the caller's
//! [`RandomSource`], each from a documented uniform range.

use std::ops::Range;

use coloring_core::{dvec2, Paint, Primitive, RandomSource, ValidationError};
use serde::{Deserialize, Serialize};

/// Blade height is drawn from this range.
pub const GRASS_HEIGHT: Range<f64> = 0.2..0.6;
/// Horizontal offset of a blade's tip from its root.
pub const GRASS_LEAN: Range<f64> = -0.1..0.1;
/// Cloud size (radius of the main puff) is drawn from this range.
pub const CLOUD_SIZE: Range<f64> = 0.6..0.8;
/// Upper bound on the element count of any band.
pub const MAX_BAND_COUNT: usize = 1000;
/// Puffs of one cloud as `(dx, dy, r)`, all multiples of the cloud size.
const CLOUD_PUFFS: [(f64, f64, f64); 4] = [
    (0.0, 0.0, 1.0),
    (0.7, 0.0, 0.8),
    (1.2, 0.2, 0.6),
    (0.3, 0.3, 0.7),
];

/// Evenly spaced positions from `start` to `end` inclusive.
///
/// A single element sits at `start`; zero elements yield nothing.
fn spaced(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}

fn check_band(name: &str, count: usize, values: &[f64]) -> Result<(), ValidationError> {
    if count > MAX_BAND_COUNT {
        return Err(ValidationError::InvalidOption {
            name: name.to_string(),
            reason: format!("at most {MAX_BAND_COUNT} elements per band, got {count}"),
        });
    }
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteValue("decoration band"))
    }
}

/// A strip of grass blades along a horizontal baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrassBand {
    pub baseline: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub blades: usize,
}

impl Default for GrassBand {
    fn default() -> Self {
        Self {
            baseline: 2.5,
            x_start: 0.5,
            x_end: 9.5,
            blades: 25,
        }
    }
}

impl GrassBand {
    /// One `detail` line per blade, left to right.
    ///
    /// Each blade draws its height, then its lean. More than
    /// [`MAX_BAND_COUNT`] blades is `InvalidOption`.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Primitive>, ValidationError> {
        check_band("grass_blades", self.blades, &[self.baseline, self.x_start, self.x_end])?;
        spaced(self.x_start, self.x_end, self.blades)
            .map(|x| {
                let height = rng.uniform(GRASS_HEIGHT.start, GRASS_HEIGHT.end);
                let lean = rng.uniform(GRASS_LEAN.start, GRASS_LEAN.end);
                Primitive::line(
                    vec![
                        dvec2(x, self.baseline),
                        dvec2(x + lean, self.baseline + height),
                    ],
                    Paint::DETAIL,
                )
            })
            .collect()
    }
}

/// A row of puffy clouds at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudBand {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub clouds: usize,
}

impl Default for CloudBand {
    fn default() -> Self {
        Self {
            y: 11.8,
            x_start: 1.5,
            x_end: 6.0,
            clouds: 3,
        }
    }
}

impl CloudBand {
    /// Four `detail` circles per cloud, clouds left to right. More than
    /// [`MAX_BAND_COUNT`] clouds is `InvalidOption`.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Primitive>, ValidationError> {
        check_band("clouds", self.clouds, &[self.y, self.x_start, self.x_end])?;
        let mut out = Vec::new();
        for x in spaced(self.x_start, self.x_end, self.clouds) {
            let size = rng.uniform(CLOUD_SIZE.start, CLOUD_SIZE.end);
            for (dx, dy, r) in CLOUD_PUFFS {
                out.push(Primitive::circle(
                    dvec2(x + dx * size, self.y + dy * size),
                    r * size,
                    Paint::DETAIL,
                )?);
            }
        }
        Ok(out)
    }
}

/// A decorative generator with its band configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Grass(GrassBand),
    Clouds(CloudBand),
}

impl Decoration {
    pub const NAMES: &'static [&'static str] = &["grass", "clouds"];

    /// The generator named `name` with its default band.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "grass" => Ok(Decoration::Grass(GrassBand::default())),
            "clouds" => Ok(Decoration::Clouds(CloudBand::default())),
            _ => Err(ValidationError::UnknownDecoration(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Decoration::Grass(_) => "grass",
            Decoration::Clouds(_) => "clouds",
        }
    }

    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Primitive>, ValidationError> {
        match self {
            Decoration::Grass(band) => band.generate(rng),
            Decoration::Clouds(band) => band.generate(rng),
        }
    }
}
