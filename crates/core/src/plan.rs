//! Reproducible description of one rendered coloring page.
//!
//! A [`RenderPlan`] records every input that affects the output file: theme,
//! random seed, export resolution, composition options, stroke style and, for
//! pages built from a custom recipe, the recipe itself. The CLI writes it next
//! to each PNG so a page can be regenerated exactly.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::page::MAX_DPI;
use crate::params::as_object;
use crate::style::Style;

/// Print resolution used when none is given.
pub const DEFAULT_DPI: u32 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderPlan {
    pub theme: String,
    pub seed: u64,
    pub dpi: u32,
    #[serde(default = "empty_options")]
    pub options: serde_json::Value,
    #[serde(default)]
    pub style: Style,
    /// Custom recipe the page was composed from instead of a built-in theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<serde_json::Value>,
}

fn empty_options() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl RenderPlan {
    /// Creates a plan with empty options, default style and [`DEFAULT_DPI`].
    pub fn new(theme: &str, seed: u64) -> Self {
        Self {
            theme: theme.to_string(),
            seed,
            dpi: DEFAULT_DPI,
            options: empty_options(),
            style: Style::default(),
            recipe: None,
        }
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_options(mut self, options: serde_json::Value) -> Self {
        self.options = options;
        self
    }

    pub fn with_recipe(mut self, recipe: serde_json::Value) -> Self {
        self.recipe = Some(recipe);
        self
    }

    /// Checks the fields that can be checked without the theme registry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dpi == 0 || self.dpi > MAX_DPI {
            return Err(ValidationError::InvalidDpi(self.dpi));
        }
        as_object(&self.options)?;
        Ok(())
    }
}
