//! The extraction core: ingredient-line parsing, instruction segmentation,
//! fragment annotation, and recipe assembly.

mod annotate;
mod ingredient;
mod segment;
mod time;

pub use annotate::{Annotations, Annotator};
pub use ingredient::IngredientLineParser;
pub use segment::{Fragment, FragmentSegmenter, SentenceModel};
pub use time::TimeExtractor;

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::metadata::RecipeMetadata;
use crate::model::{Ingredient, Recipe, Step};

/// Turns recipe metadata into a normalized [`Recipe`].
///
/// Construction compiles every matcher and the sentence model once; the
/// extractor is read-only afterwards and can be shared across threads.
/// Reuse one extractor when parsing many recipes.
pub struct RecipeExtractor {
    parser: IngredientLineParser,
    segmenter: FragmentSegmenter,
    annotator: Annotator,
    default_title: String,
}

impl RecipeExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self::with_model(Arc::new(SentenceModel::new()), config)
    }

    /// Build an extractor around an already-loaded sentence model, so hosts
    /// running several extractors can share one.
    pub fn with_model(model: Arc<SentenceModel>, config: ExtractionConfig) -> Self {
        Self {
            parser: IngredientLineParser::new(),
            segmenter: FragmentSegmenter::new(model),
            annotator: Annotator::new(config.fuzzy_threshold),
            default_title: config.default_title,
        }
    }

    /// Extract a recipe. Total: heuristic misses degrade to defaults, never
    /// to errors.
    pub fn extract(&self, metadata: &RecipeMetadata) -> Recipe {
        let title = metadata.title_or(&self.default_title);

        let raw_ingredients = metadata.ingredient_lines();
        let ingredients: Vec<Ingredient> = raw_ingredients
            .iter()
            .map(|line| self.parser.parse(line))
            .collect();
        let ingredient_names: Vec<String> =
            ingredients.iter().map(|ing| ing.name.clone()).collect();

        let blocks = metadata.instruction_blocks();
        let fragments = self.segmenter.segment(&blocks);
        debug!(
            "{:?}: {} ingredient lines, {} instruction blocks, {} fragments",
            title,
            raw_ingredients.len(),
            blocks.len(),
            fragments.len()
        );

        let steps: Vec<Step> = fragments
            .iter()
            .enumerate()
            .map(|(index, fragment)| {
                let annotations = self.annotator.annotate(&fragment.text, &ingredient_names);
                Step {
                    step_number: index as u32 + 1,
                    text: fragment.text.clone(),
                    ingredients: annotations.ingredients,
                    tools: annotations.tools,
                    methods: annotations.methods,
                    time: annotations.time,
                }
            })
            .collect();

        assemble_recipe(title, raw_ingredients, ingredients, steps)
    }

    /// Locate and extract a recipe from a metadata JSON value.
    pub fn extract_from_value(&self, value: &Value) -> Result<Recipe, ExtractError> {
        let metadata = RecipeMetadata::from_value(value)?;
        Ok(self.extract(&metadata))
    }

    /// Parse `json` and extract the recipe it describes.
    pub fn extract_from_str(&self, json: &str) -> Result<Recipe, ExtractError> {
        let value: Value = serde_json::from_str(json)?;
        self.extract_from_value(&value)
    }
}

impl Default for RecipeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose the final recipe, deriving the recipe-level `tools` and `methods`
/// as the union over all steps in first-seen step order.
pub fn assemble_recipe(
    title: String,
    raw_ingredients: Vec<String>,
    ingredients: Vec<Ingredient>,
    steps: Vec<Step>,
) -> Recipe {
    debug_assert_eq!(raw_ingredients.len(), ingredients.len());

    let mut tools: Vec<String> = Vec::new();
    let mut methods: Vec<String> = Vec::new();
    for step in &steps {
        for tool in &step.tools {
            if !tools.contains(tool) {
                tools.push(tool.clone());
            }
        }
        for method in &step.methods {
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }
    }

    Recipe {
        title,
        raw_ingredients,
        ingredients,
        tools,
        methods,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepTime;

    fn step(number: u32, tools: &[&str], methods: &[&str]) -> Step {
        Step {
            step_number: number,
            text: String::new(),
            ingredients: vec![],
            tools: tools.iter().map(|s| s.to_string()).collect(),
            methods: methods.iter().map(|s| s.to_string()).collect(),
            time: StepTime::default(),
        }
    }

    #[test]
    fn test_derived_sets_union_in_first_seen_order() {
        let steps = vec![
            step(1, &["oven"], &["preheat"]),
            step(2, &["bowl", "oven"], &["mix"]),
            step(3, &["skillet"], &["mix", "sear"]),
        ];
        let recipe = assemble_recipe("Test".to_string(), vec![], vec![], steps);
        assert_eq!(recipe.tools, vec!["oven", "bowl", "skillet"]);
        assert_eq!(recipe.methods, vec!["preheat", "mix", "sear"]);
    }

    #[test]
    fn test_step_numbers_are_global_across_blocks() {
        let metadata = RecipeMetadata::from_parts(
            Some("Two Blocks".to_string()),
            vec![],
            vec![
                "Mix well; add salt. Stir.".to_string(),
                "Bake until set.".to_string(),
            ],
        );
        let recipe = RecipeExtractor::new().extract(&metadata);
        let numbers: Vec<u32> = recipe.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(recipe.steps[3].text, "Bake until set.");
    }

    #[test]
    fn test_raw_and_parsed_ingredients_correspond() {
        let metadata = RecipeMetadata::from_parts(
            None,
            vec!["2 cups flour".to_string(), "salt, or to taste".to_string()],
            vec![],
        );
        let recipe = RecipeExtractor::new().extract(&metadata);
        assert_eq!(recipe.raw_ingredients.len(), recipe.ingredients.len());
        assert_eq!(recipe.raw_ingredients[0], "2 cups flour");
        assert_eq!(recipe.ingredients[0].name, "flour");
        assert_eq!(recipe.title, "Unknown Title");
    }
}
