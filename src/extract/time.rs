use regex::Regex;

use crate::model::StepTime;

/// Extracts a duration phrase and a condition phrase from a fragment.
///
/// Both scans keep overwriting as they go, so the last match in
/// left-to-right order wins; downstream consumers rely on that, so any
/// change here must keep the overwrite.
pub struct TimeExtractor {
    duration: Regex,
    condition: Regex,
    leading_keyword: Regex,
}

impl TimeExtractor {
    pub fn new() -> Self {
        Self {
            // bare "N unit", "about N unit", "for N unit"
            duration: Regex::new(
                r"(?i)\d+\s*(?:more)?\s*(?:seconds?|minutes?|hours?|sec|min|hrs?)|about\s+\d+\s*(?:seconds?|minutes?|hours?)|for\s+\d+\s*(?:seconds?|minutes?|hours?)",
            )
            .unwrap(),
            condition: Regex::new(r"(?i)until\s+[\w\s]+|once\s+[\w\s]+|when\s+[\w\s]+").unwrap(),
            leading_keyword: Regex::new(r"(?i)^(?:for|about)\s+").unwrap(),
        }
    }

    pub fn extract(&self, fragment: &str) -> StepTime {
        let mut duration = None;
        for found in self.duration.find_iter(fragment) {
            let cleaned = self.leading_keyword.replace(found.as_str(), "");
            duration = Some(cleaned.trim().to_string());
        }

        let mut condition = None;
        for found in self.condition.find_iter(fragment) {
            condition = Some(found.as_str().trim().to_string());
        }

        StepTime {
            duration,
            condition,
        }
    }
}

impl Default for TimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
