use html_escape::decode_html_entities;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ExtractError;

/// Source metadata for one recipe, as handed over by the collaborator that
/// fetched the page and pulled out its structured markup.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeMetadata {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: RecipeInstructions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<String>),
    MultipleObject(Vec<InstructionBlock>),
}

#[derive(Debug, Clone, Deserialize)]
struct InstructionBlock {
    text: String,
}

fn decode_html_symbols(text: &str) -> String {
    // entities in the wild are often double-encoded
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// True if the entity declares `@type` "Recipe" (string or list form).
fn is_recipe_entity(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(kind)) => kind == "Recipe",
        Some(Value::Array(kinds)) => kinds.iter().any(|kind| kind.as_str() == Some("Recipe")),
        _ => false,
    }
}

fn locate_recipe(value: &Value) -> Result<&Value, ExtractError> {
    match value {
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph").and_then(Value::as_array) {
                debug!("searching @graph with {} entries", graph.len());
                return graph
                    .iter()
                    .find(|entry| is_recipe_entity(entry))
                    .ok_or(ExtractError::NoRecipeFound);
            }
            Ok(value)
        }
        Value::Array(entries) => entries
            .iter()
            .find(|entry| is_recipe_entity(entry))
            .ok_or(ExtractError::NoRecipeFound),
        _ => Err(ExtractError::InvalidShape(
            "expected a JSON object or array of objects".to_string(),
        )),
    }
}

impl RecipeMetadata {
    /// Locate the recipe entity inside `value` and deserialize it.
    ///
    /// Accepts a bare recipe object, a top-level array, or an object with an
    /// `@graph` array; in the latter two the first entry typed "Recipe" is
    /// used. A value of the wrong shape is an [`ExtractError::InvalidShape`].
    pub fn from_value(value: &Value) -> Result<Self, ExtractError> {
        let entity = locate_recipe(value)?;
        serde_json::from_value(entity.clone())
            .map_err(|err| ExtractError::InvalidShape(err.to_string()))
    }

    /// Build metadata from already-separated parts.
    pub fn from_parts(
        name: Option<String>,
        ingredient_lines: Vec<String>,
        instruction_blocks: Vec<String>,
    ) -> Self {
        Self {
            name,
            recipe_ingredient: ingredient_lines,
            recipe_instructions: RecipeInstructions::Multiple(instruction_blocks),
        }
    }

    /// The recipe title, or `default` when the source has none.
    pub fn title_or(&self, default: &str) -> String {
        match &self.name {
            Some(name) => decode_html_symbols(name),
            None => default.to_string(),
        }
    }

    /// Raw ingredient lines, entity-decoded and trimmed, in source order.
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.recipe_ingredient
            .iter()
            .map(|line| decode_html_symbols(line.trim()))
            .collect()
    }

    /// Instruction blocks in source order; empty blocks are dropped.
    pub fn instruction_blocks(&self) -> Vec<String> {
        let blocks: Vec<String> = match &self.recipe_instructions {
            RecipeInstructions::String(text) => vec![text.clone()],
            RecipeInstructions::Multiple(texts) => texts.clone(),
            RecipeInstructions::MultipleObject(blocks) => {
                blocks.iter().map(|block| block.text.clone()).collect()
            }
        };
        blocks
            .iter()
            .map(|block| decode_html_symbols(block.trim()))
            .filter(|block| !block.is_empty())
            .collect()
    }
}
