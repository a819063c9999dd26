//! Scene recipes: ordered template placements followed by decorations.
//!
//! Built-in themes carry static recipes; callers may also load a recipe from
//! JSON. Names inside a JSON recipe are checked against the closed template
//! and decoration sets when the recipe is parsed, not when it is composed.

use coloring_core::params;
use coloring_core::ValidationError;
use coloring_templates::{Decoration, TemplateId};
use serde::Serialize;
use serde_json::Value;

/// One template instance on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub template: TemplateId,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Placement {
    pub const fn new(template: TemplateId, x: f64, y: f64, scale: f64) -> Self {
        Self {
            template,
            x,
            y,
            scale,
        }
    }
}

/// Placements in draw order, then decorations in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub placements: Vec<Placement>,
    pub decorations: Vec<Decoration>,
}

impl Recipe {
    pub fn new(placements: Vec<Placement>, decorations: Vec<Decoration>) -> Self {
        Self {
            placements,
            decorations,
        }
    }

    /// Parses a recipe of the form
    /// `{"placements": [{"template": "cat", "x": 5, "y": 7, "scale": 1}], "decorations": ["grass"]}`.
    ///
    /// `decorations` may be omitted. Unknown template or decoration names are
    /// `UnknownTemplate` / `UnknownDecoration`; any other structural problem
    /// is `InvalidRecipe`.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value
            .as_object()
            .ok_or_else(|| ValidationError::InvalidRecipe("recipe must be a JSON object".into()))?;
        if let Some(key) = obj
            .keys()
            .find(|k| !matches!(k.as_str(), "placements" | "decorations"))
        {
            return Err(ValidationError::InvalidRecipe(format!("unknown field `{key}`")));
        }

        let placements = obj
            .get("placements")
            .and_then(Value::as_array)
            .ok_or_else(|| ValidationError::InvalidRecipe("`placements` must be an array".into()))?
            .iter()
            .enumerate()
            .map(|(i, p)| parse_placement(i, p))
            .collect::<Result<Vec<_>, _>>()?;

        let decorations = match obj.get("decorations") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(names)) => names
                .iter()
                .map(|n| {
                    n.as_str()
                        .ok_or_else(|| {
                            ValidationError::InvalidRecipe(
                                "decoration names must be strings".into(),
                            )
                        })
                        .and_then(Decoration::from_name)
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(ValidationError::InvalidRecipe(
                    "`decorations` must be an array of names".into(),
                ))
            }
        };

        Ok(Self::new(placements, decorations))
    }
}

fn parse_placement(index: usize, value: &Value) -> Result<Placement, ValidationError> {
    let invalid =
        |reason: String| ValidationError::InvalidRecipe(format!("placement {index}: {reason}"));

    let name = value
        .get("template")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing `template` name".into()))?;
    let template = TemplateId::from_name(name)?;

    let coord = |key: &str| -> Result<f64, ValidationError> {
        if value.get(key).map_or(true, Value::is_null) {
            return Err(invalid(format!("missing `{key}`")));
        }
        params::opt_f64(value, key, 0.0).map_err(|e| invalid(e.to_string()))
    };
    let (x, y) = (coord("x")?, coord("y")?);
    let scale = if value.get("scale").map_or(true, Value::is_null) {
        1.0
    } else {
        coord("scale")?
    };
    params::reject_unknown(value, &["template", "x", "y", "scale"])
        .map_err(|e| invalid(e.to_string()))?;

    Ok(Placement::new(template, x, y, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_placements_and_decorations_in_order() {
        let recipe = Recipe::from_json(&json!({
            "placements": [
                {"template": "cat", "x": 5, "y": 7, "scale": 1.5},
                {"template": "sun", "x": 8.5, "y": 12.5}
            ],
            "decorations": ["clouds", "grass"]
        }))
        .unwrap();
        assert_eq!(
            recipe.placements,
            vec![
                Placement::new(TemplateId::Cat, 5.0, 7.0, 1.5),
                Placement::new(TemplateId::Sun, 8.5, 12.5, 1.0),
            ]
        );
        let names: Vec<_> = recipe.decorations.iter().map(Decoration::name).collect();
        assert_eq!(names, vec!["clouds", "grass"]);
    }

    #[test]
    fn decorations_are_optional() {
        let recipe = Recipe::from_json(&json!({"placements": []})).unwrap();
        assert!(recipe.placements.is_empty());
        assert!(recipe.decorations.is_empty());
    }

    #[test]
    fn unknown_template_is_reported_by_name() {
        let err = Recipe::from_json(&json!({
            "placements": [{"template": "dragon", "x": 1, "y": 1}]
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::UnknownTemplate("dragon".into()));
    }

    #[test]
    fn unknown_decoration_is_reported_by_name() {
        let err = Recipe::from_json(&json!({
            "placements": [],
            "decorations": ["rain"]
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::UnknownDecoration("rain".into()));
    }

    #[test]
    fn structural_problems_are_invalid_recipe() {
        for bad in [
            json!([]),
            json!({}),
            json!({"placements": {}}),
            json!({"placements": [{"x": 1, "y": 1}]}),
            json!({"placements": [{"template": "cat", "y": 1}]}),
            json!({"placements": [{"template": "cat", "x": "left", "y": 1}]}),
            json!({"placements": [{"template": "cat", "x": 1, "y": 1, "size": 2}]}),
            json!({"placements": [], "decorations": "grass"}),
            json!({"placements": [], "decorations": [3]}),
            json!({"placements": [], "theme": "cat_garden"}),
        ] {
            assert!(
                matches!(Recipe::from_json(&bad), Err(ValidationError::InvalidRecipe(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn serializes_template_names() {
        let recipe = Recipe::new(vec![Placement::new(TemplateId::Grapes, 1.0, 2.0, 0.5)], vec![]);
        let v = serde_json::to_value(&recipe).unwrap();
        assert_eq!(v["placements"][0]["template"], "grapes");
    }
}
