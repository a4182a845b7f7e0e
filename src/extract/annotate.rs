use regex::Regex;
use strsim::normalized_damerau_levenshtein;

use crate::extract::time::TimeExtractor;
use crate::model::StepTime;
use crate::vocab;

/// Everything recognized inside one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotations {
    pub tools: Vec<String>,
    pub methods: Vec<String>,
    pub ingredients: Vec<String>,
    pub time: StepTime,
}

/// Attaches tool, method, ingredient and time annotations to a fragment.
pub struct Annotator {
    tools: Regex,
    methods: Regex,
    time: TimeExtractor,
    fuzzy_threshold: f64,
}

impl Annotator {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self {
            tools: vocab::word_matcher(vocab::TOOLS),
            methods: vocab::word_matcher(vocab::METHODS),
            time: TimeExtractor::new(),
            fuzzy_threshold,
        }
    }

    /// Annotate one fragment against the set of known ingredient names.
    ///
    /// Ingredient mentions are found in two passes: an exact case-insensitive
    /// substring pass, then an approximate pass comparing each fragment token
    /// against the remaining names. The approximate pass trades false
    /// positives on short tokens for recall on misspellings and inflections;
    /// the first qualifying token wins and scanning stops for that name.
    pub fn annotate(&self, fragment: &str, known_ingredients: &[String]) -> Annotations {
        let lowered = fragment.to_lowercase();

        let tools = collect_unique(self.tools.find_iter(&lowered).map(|m| m.as_str()));
        let methods = collect_unique(self.methods.find_iter(&lowered).map(|m| m.as_str()));

        let mut ingredients: Vec<String> = Vec::new();
        for name in known_ingredients {
            // an empty needle would match every fragment
            if name.is_empty() {
                continue;
            }
            if lowered.contains(&name.to_lowercase()) && !ingredients.contains(name) {
                ingredients.push(name.clone());
            }
        }
        for name in known_ingredients {
            if name.is_empty() || ingredients.contains(name) {
                continue;
            }
            let target = name.to_lowercase();
            for token in lowered.split_whitespace() {
                if normalized_damerau_levenshtein(token, &target) >= self.fuzzy_threshold {
                    ingredients.push(name.clone());
                    break;
                }
            }
        }

        Annotations {
            tools,
            methods,
            ingredients,
            time: self.time.extract(fragment),
        }
    }
}

fn collect_unique<'a>(found: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in found {
        if !out.iter().any(|existing| existing == item) {
            out.push(item.to_string());
        }
    }
    out
}
