#![deny(unsafe_code)]
//! Theme registry: maps theme names to recipes and composes them into scenes.
//!
//! This crate sits between `coloring-templates` (the shape library) and the
//! CLI. It owns the closed set of built-in themes, the composer that folds a
//! recipe into one ordered primitive list, the CPU rasterizer and, behind the
//! `png` feature, PNG export.

pub mod error;
pub mod raster;
pub mod recipe;
pub mod scene;

#[cfg(feature = "png")]
pub mod export;

use std::fmt;
use std::str::FromStr;

use coloring_core::{RandomSource, ValidationError};
use coloring_templates::{CloudBand, Decoration, GrassBand};

pub use error::ExportError;
pub use raster::{rasterize, Bitmap};
pub use recipe::{Placement, Recipe};
pub use scene::{ComposeOptions, Composer, Scene, Segment, Source};

use coloring_templates::TemplateId as T;

/// Sun in the top-right corner, shared by most outdoor themes.
const SUN: Placement = Placement::new(T::Sun, 8.5, 12.5, 0.8);

const CAT_GARDEN: &[Placement] = &[
    Placement::new(T::Cat, 5.0, 9.0, 1.5),
    Placement::new(T::Flower, 2.0, 5.0, 1.0),
    Placement::new(T::Flower, 8.0, 4.5, 0.9),
    Placement::new(T::Butterfly, 7.0, 7.0, 0.6),
    SUN,
];

const ANIMALS: &[Placement] = &[
    Placement::new(T::Cat, 3.0, 10.0, 1.2),
    Placement::new(T::Dog, 7.0, 10.0, 1.2),
    SUN,
    Placement::new(T::Butterfly, 5.0, 12.0, 0.6),
];

const NATURE: &[Placement] = &[
    Placement::new(T::Tree, 2.0, 8.0, 1.5),
    Placement::new(T::Flower, 5.0, 6.0, 1.2),
    Placement::new(T::Flower, 7.5, 5.5, 0.9),
    Placement::new(T::Butterfly, 6.5, 8.5, 0.7),
    SUN,
];

const HOUSE: &[Placement] = &[
    Placement::new(T::House, 5.0, 8.0, 1.2),
    Placement::new(T::Tree, 1.5, 6.0, 1.0),
    SUN,
    Placement::new(T::Flower, 8.0, 4.5, 0.8),
];

const OCEAN: &[Placement] = &[
    Placement::new(T::Boat, 5.0, 8.5, 1.2),
    Placement::new(T::Fish, 2.8, 5.0, 0.9),
    Placement::new(T::Fish, 7.0, 4.0, 0.7),
    SUN,
];

const SPACE: &[Placement] = &[
    Placement::new(T::Rocket, 5.0, 6.5, 1.5),
    Placement::new(T::Moon, 2.5, 11.5, 1.0),
    Placement::new(T::Star, 7.5, 11.5, 0.5),
    Placement::new(T::Star, 1.8, 5.5, 0.4),
    Placement::new(T::Star, 8.3, 4.0, 0.35),
    Placement::new(T::Star, 4.2, 12.6, 0.3),
];

const TRANSPORT: &[Placement] = &[
    Placement::new(T::Car, 4.5, 5.5, 1.0),
    Placement::new(T::Butterfly, 2.0, 9.5, 0.6),
    SUN,
];

const FRUITS_GRAPES: &[Placement] = &[
    Placement::new(T::Grapes, 5.0, 9.5, 1.5),
    Placement::new(T::Grapes, 2.5, 5.5, 0.9),
    Placement::new(T::Grapes, 7.5, 5.0, 0.8),
    Placement::new(T::Butterfly, 8.0, 11.5, 0.6),
];

const SQUIRREL: &[Placement] = &[
    Placement::new(T::Squirrel, 4.5, 8.0, 1.6),
    Placement::new(T::Tree, 8.0, 7.5, 1.1),
    Placement::new(T::Flower, 1.6, 5.5, 0.7),
];

const MIXED: &[Placement] = &[
    Placement::new(T::House, 5.0, 9.0, 1.0),
    Placement::new(T::Cat, 2.5, 6.0, 0.9),
    Placement::new(T::Tree, 8.0, 7.0, 1.1),
    Placement::new(T::Flower, 7.0, 4.5, 0.7),
    Placement::new(T::Butterfly, 6.0, 11.0, 0.5),
    SUN,
];

/// Decoration slots of a built-in theme, in draw order.
#[derive(Clone, Copy)]
enum Band {
    Grass,
    Clouds,
}

impl Band {
    fn decoration(self) -> Decoration {
        match self {
            Band::Grass => Decoration::Grass(GrassBand::default()),
            Band::Clouds => Decoration::Clouds(CloudBand::default()),
        }
    }
}

/// Every built-in theme.
///
/// Use [`Theme::from_name`] for string-based lookup (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    CatGarden,
    Animals,
    Nature,
    House,
    Ocean,
    Space,
    Transport,
    FruitsGrapes,
    Squirrel,
    Mixed,
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::CatGarden,
        Theme::Animals,
        Theme::Nature,
        Theme::House,
        Theme::Ocean,
        Theme::Space,
        Theme::Transport,
        Theme::FruitsGrapes,
        Theme::Squirrel,
        Theme::Mixed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::CatGarden => "cat_garden",
            Theme::Animals => "animals",
            Theme::Nature => "nature",
            Theme::House => "house",
            Theme::Ocean => "ocean",
            Theme::Space => "space",
            Theme::Transport => "transport",
            Theme::FruitsGrapes => "fruits_grapes",
            Theme::Squirrel => "squirrel",
            Theme::Mixed => "mixed",
        }
    }

    /// Looks a theme up by name.
    ///
    /// Returns `ValidationError::UnknownTheme` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| ValidationError::UnknownTheme(name.to_string()))
    }

    /// Returns all recognized theme names, in registry order.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    fn table(self) -> (&'static [Placement], &'static [Band]) {
        match self {
            Theme::CatGarden => (CAT_GARDEN, &[Band::Grass]),
            Theme::Animals => (ANIMALS, &[Band::Grass]),
            Theme::Nature => (NATURE, &[Band::Grass, Band::Clouds]),
            Theme::House => (HOUSE, &[Band::Grass, Band::Clouds]),
            Theme::Ocean => (OCEAN, &[Band::Clouds]),
            Theme::Space => (SPACE, &[]),
            Theme::Transport => (TRANSPORT, &[Band::Grass, Band::Clouds]),
            Theme::FruitsGrapes => (FRUITS_GRAPES, &[Band::Grass]),
            Theme::Squirrel => (SQUIRREL, &[Band::Grass]),
            Theme::Mixed => (MIXED, &[Band::Grass]),
        }
    }

    /// A fresh copy of this theme's recipe.
    pub fn recipe(self) -> Recipe {
        let (placements, bands) = self.table();
        Recipe::new(
            placements.to_vec(),
            bands.iter().map(|b| b.decoration()).collect(),
        )
    }

    /// Composes this theme with `composer`.
    pub fn compose<R: RandomSource + ?Sized>(
        self,
        composer: &Composer,
        rng: &mut R,
    ) -> Result<Scene, ValidationError> {
        composer.compose(self.name(), &self.recipe(), rng)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Looks up `name` and composes it on an A4 page with the default style.
pub fn compose_theme<R: RandomSource + ?Sized>(
    name: &str,
    options: &ComposeOptions,
    rng: &mut R,
) -> Result<Scene, ValidationError> {
    Theme::from_name(name)?.compose(&Composer::new(*options), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coloring_core::{Page, ShapeKind, Xorshift64};

    fn compose(name: &str, seed: u64) -> Scene {
        compose_theme(name, &ComposeOptions::default(), &mut Xorshift64::new(seed)).unwrap()
    }

    #[test]
    fn names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()).unwrap(), theme);
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!(Theme::list_names().len(), 10);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let err = compose_theme("jungle", &ComposeOptions::default(), &mut Xorshift64::new(1))
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownTheme("jungle".into()));
    }

    #[test]
    fn every_theme_composes_a_non_empty_scene() {
        for theme in Theme::ALL {
            let scene = compose(theme.name(), 42);
            assert!(!scene.is_empty(), "{theme} is empty");
            assert_eq!(scene.name(), theme.name());
        }
    }

    #[test]
    fn every_placement_anchor_is_on_the_page() {
        let page = Page::a4();
        for theme in Theme::ALL {
            for p in theme.recipe().placements {
                assert!(
                    page.contains(coloring_core::dvec2(p.x, p.y)),
                    "{theme}: {} off page",
                    p.template
                );
            }
        }
    }

    #[test]
    fn mixed_theme_preserves_recipe_order() {
        let scene = compose("mixed", 42);
        let sources: Vec<Source> = scene.segments().iter().map(|s| s.source).collect();
        assert_eq!(
            sources,
            vec![
                Source::Template(T::House),
                Source::Template(T::Cat),
                Source::Template(T::Tree),
                Source::Template(T::Flower),
                Source::Template(T::Butterfly),
                Source::Template(T::Sun),
                Source::Decoration("grass"),
            ]
        );
        let starts: Vec<usize> = scene.segments().iter().map(|s| s.start).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        // The house is drawn first, exactly as the template produces it.
        let house = T::House.draw(5.0, 9.0, 1.0).unwrap();
        assert_eq!(&scene.primitives()[..house.len()], house.as_slice());
    }

    #[test]
    fn squirrel_theme_end_to_end() {
        let scene = compose("squirrel", 42);
        let counts = scene.kind_counts();
        assert!(!scene.is_empty());
        assert!(counts[&ShapeKind::Ellipse] >= 1);
        assert!(counts[&ShapeKind::Polygon] >= 2);
        assert_eq!(counts[&ShapeKind::Arc], 0);
    }

    #[test]
    fn same_seed_gives_identical_scene() {
        for theme in Theme::ALL {
            assert_eq!(compose(theme.name(), 7), compose(theme.name(), 7), "{theme}");
        }
    }

    #[test]
    fn seed_only_moves_decoration_jitter() {
        let (a, b) = (compose("nature", 1), compose("nature", 2));
        assert_eq!(a.len(), b.len());
        assert_eq!(a.segments(), b.segments());
        let grass = a
            .segments()
            .iter()
            .find(|s| s.source == Source::Decoration("grass"))
            .unwrap();
        assert_eq!(
            a.primitives()[..grass.start],
            b.primitives()[..grass.start]
        );
        assert_ne!(a.primitives(), b.primitives());
    }

    #[test]
    fn recipes_are_fresh_copies() {
        let mut recipe = Theme::Space.recipe();
        recipe.placements.clear();
        assert_eq!(Theme::Space.recipe().placements.len(), SPACE.len());
    }

    #[test]
    fn space_has_no_decorations() {
        let scene = compose("space", 3);
        assert!(scene
            .segments()
            .iter()
            .all(|s| matches!(s.source, Source::Template(_))));
    }
}
