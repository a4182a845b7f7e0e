pub mod config;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod model;
pub mod vocab;

pub use config::ExtractionConfig;
pub use error::ExtractError;
pub use extract::{
    Annotator, FragmentSegmenter, IngredientLineParser, RecipeExtractor, SentenceModel,
    TimeExtractor,
};
pub use metadata::RecipeMetadata;
pub use model::{Ingredient, Recipe, Step, StepTime};

/// Extract a recipe from metadata JSON with the default configuration.
///
/// Builds a fresh [`RecipeExtractor`] per call; when parsing many recipes,
/// construct one extractor and reuse it so the sentence model is only built
/// once.
pub fn extract_recipe(value: &serde_json::Value) -> Result<Recipe, ExtractError> {
    RecipeExtractor::new().extract_from_value(value)
}
