#![deny(unsafe_code)]
//! Parametric shape templates and decorative generators.
//!
//! Every template is a pure function `(x, y, scale) -> Vec<Primitive>` that
//! places its parts at `anchor + ratio * scale`. [`TemplateId`] names the
//! closed set of templates and dispatches to them; [`decor`] holds the two
//! band-filling generators that take a random source.

pub mod animals;
pub mod decor;
pub mod objects;
pub mod plants;
pub mod sketch;
pub mod sky;

use std::fmt;
use std::str::FromStr;

use coloring_core::{Primitive, ValidationError};
use serde::{Deserialize, Serialize};

pub use decor::{CloudBand, Decoration, GrassBand, MAX_BAND_COUNT};

/// Every shape template in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Cat,
    Dog,
    Flower,
    House,
    Sun,
    Tree,
    Butterfly,
    Boat,
    Fish,
    Rocket,
    Moon,
    Star,
    /// Car with its road and traffic signal.
    Car,
    Grapes,
    Squirrel,
}

impl TemplateId {
    pub const ALL: [TemplateId; 15] = [
        TemplateId::Cat,
        TemplateId::Dog,
        TemplateId::Flower,
        TemplateId::House,
        TemplateId::Sun,
        TemplateId::Tree,
        TemplateId::Butterfly,
        TemplateId::Boat,
        TemplateId::Fish,
        TemplateId::Rocket,
        TemplateId::Moon,
        TemplateId::Star,
        TemplateId::Car,
        TemplateId::Grapes,
        TemplateId::Squirrel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemplateId::Cat => "cat",
            TemplateId::Dog => "dog",
            TemplateId::Flower => "flower",
            TemplateId::House => "house",
            TemplateId::Sun => "sun",
            TemplateId::Tree => "tree",
            TemplateId::Butterfly => "butterfly",
            TemplateId::Boat => "boat",
            TemplateId::Fish => "fish",
            TemplateId::Rocket => "rocket",
            TemplateId::Moon => "moon",
            TemplateId::Star => "star",
            TemplateId::Car => "car",
            TemplateId::Grapes => "grapes",
            TemplateId::Squirrel => "squirrel",
        }
    }

    /// Looks a template up by name.
    ///
    /// Returns `ValidationError::UnknownTemplate` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ValidationError::UnknownTemplate(name.to_string()))
    }

    /// Names of all templates, in library order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// Runs the template at `(x, y)` with the given scale.
    pub fn draw(self, x: f64, y: f64, scale: f64) -> Result<Vec<Primitive>, ValidationError> {
        match self {
            TemplateId::Cat => animals::cat(x, y, scale),
            TemplateId::Dog => animals::dog(x, y, scale),
            TemplateId::Flower => plants::flower(x, y, scale),
            TemplateId::House => objects::house(x, y, scale),
            TemplateId::Sun => sky::sun(x, y, scale),
            TemplateId::Tree => plants::tree(x, y, scale),
            TemplateId::Butterfly => animals::butterfly(x, y, scale),
            TemplateId::Boat => objects::boat(x, y, scale),
            TemplateId::Fish => animals::fish(x, y, scale),
            TemplateId::Rocket => objects::rocket(x, y, scale),
            TemplateId::Moon => sky::moon(x, y, scale),
            TemplateId::Star => sky::star(x, y, scale),
            TemplateId::Car => objects::car(x, y, scale),
            TemplateId::Grapes => plants::grapes(x, y, scale),
            TemplateId::Squirrel => animals::squirrel(x, y, scale),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::{dvec2, Paint};

    #[test]
    fn names_round_trip() {
        for t in TemplateId::ALL {
            assert_eq!(TemplateId::from_name(t.name()).unwrap(), t);
            assert_eq!(t.to_string().parse::<TemplateId>().unwrap(), t);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            TemplateId::from_name("dragon").unwrap_err(),
            ValidationError::UnknownTemplate("dragon".into())
        );
    }

    #[test]
    fn serde_uses_template_names() {
        assert_eq!(
            serde_json::to_string(&TemplateId::Grapes).unwrap(),
            "\"grapes\""
        );
        let t: TemplateId = serde_json::from_str("\"squirrel\"").unwrap();
        assert_eq!(t, TemplateId::Squirrel);
    }

    #[test]
    fn every_template_produces_primitives() {
        for t in TemplateId::ALL {
            let prims = t.draw(5.0, 7.0, 1.0).unwrap();
            assert!(!prims.is_empty(), "{t} drew nothing");
        }
    }

    #[test]
    fn every_template_rejects_zero_and_negative_scale() {
        for t in TemplateId::ALL {
            assert_eq!(
                t.draw(5.0, 7.0, 0.0).unwrap_err(),
                ValidationError::NonPositiveScale(0.0),
                "{t}"
            );
            assert!(t.draw(5.0, 7.0, -0.5).is_err(), "{t}");
        }
    }

    #[test]
    fn only_the_documented_features_are_filled() {
        let filled: Vec<(TemplateId, usize)> = TemplateId::ALL
            .into_iter()
            .map(|t| {
                let n = t
                    .draw(5.0, 7.0, 1.0)
                    .unwrap()
                    .iter()
                    .filter(|p| p.paint() == Paint::Fill)
                    .count();
                (t, n)
            })
            .filter(|&(_, n)| n > 0)
            .collect();
        assert_eq!(
            filled,
            vec![
                (TemplateId::Dog, 1),
                (TemplateId::House, 1),
                (TemplateId::Sun, 2)
            ]
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_template() -> impl Strategy<Value = TemplateId> {
            proptest::sample::select(TemplateId::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn drawing_is_deterministic(
                t in any_template(),
                x in 0.0_f64..10.0,
                y in 0.0_f64..14.0,
                s in 0.1_f64..3.0,
            ) {
                prop_assert_eq!(t.draw(x, y, s).unwrap(), t.draw(x, y, s).unwrap());
            }

            #[test]
            fn scaling_matches_unit_template_scaled_about_anchor(
                t in any_template(),
                x in 0.0_f64..10.0,
                y in 0.0_f64..14.0,
                s in 0.1_f64..3.0,
            ) {
                let anchor = dvec2(x, y);
                let unit = t.draw(x, y, 1.0).unwrap();
                let scaled = t.draw(x, y, s).unwrap();
                prop_assert_eq!(unit.len(), scaled.len());
                for (u, p) in unit.iter().zip(&scaled) {
                    let expected = u.scaled_about(anchor, s).unwrap();
                    prop_assert!(p.approx_eq(&expected, 1e-9), "{t}: {p:?} vs {expected:?}");
                }
            }

            #[test]
            fn pairwise_distances_scale_linearly(
                t in any_template(),
                s in 0.1_f64..3.0,
            ) {
                let first_points = |scale: f64| -> Vec<_> {
                    t.draw(5.0, 7.0, scale)
                        .unwrap()
                        .iter()
                        .map(|p| p.control_points()[0])
                        .collect()
                };
                let (unit, scaled) = (first_points(1.0), first_points(s));
                for i in 0..unit.len() {
                    for j in i + 1..unit.len() {
                        let d1 = unit[i].distance(unit[j]);
                        let ds = scaled[i].distance(scaled[j]);
                        prop_assert!((ds - s * d1).abs() < 1e-9, "{t}: {ds} vs {}", s * d1);
                    }
                }
            }

            #[test]
            fn translation_moves_every_primitive_by_the_offset(
                t in any_template(),
                x in 0.0_f64..10.0,
                y in 0.0_f64..14.0,
                dx in -5.0_f64..5.0,
                dy in -5.0_f64..5.0,
                s in 0.1_f64..3.0,
            ) {
                let base = t.draw(x, y, s).unwrap();
                let moved = t.draw(x + dx, y + dy, s).unwrap();
                prop_assert_eq!(base.len(), moved.len());
                for (b, m) in base.iter().zip(&moved) {
                    prop_assert!(m.approx_eq(&b.translated(dvec2(dx, dy)), 1e-9));
                }
            }
        }
    }
}
