use serde::Serialize;

/// One parsed ingredient line.
///
/// `descriptor` and `preparation`, when present, were excised from the raw
/// line, so `name` never contains them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Option<String>,
    pub measurement: Option<String>,
    pub descriptor: Option<String>,
    pub preparation: Option<String>,
}

/// Timing information attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepTime {
    pub duration: Option<String>,
    pub condition: Option<String>,
}

/// One atomic instruction clause with its annotations.
///
/// The mention lists are deduplicated in first-seen order so that output is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step_number: u32,
    pub text: String,
    pub ingredients: Vec<String>,
    pub tools: Vec<String>,
    pub methods: Vec<String>,
    pub time: StepTime,
}

/// A fully extracted recipe.
///
/// `raw_ingredients` and `ingredients` correspond positionally to the same
/// source lines. `tools` and `methods` are the union over all steps in
/// first-seen step order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub raw_ingredients: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub tools: Vec<String>,
    pub methods: Vec<String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Serialize to the nested JSON structure consumed downstream.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
