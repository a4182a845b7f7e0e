use regex::Regex;

use crate::model::Ingredient;
use crate::vocab;

/// Parses one raw ingredient line into a structured [`Ingredient`].
///
/// Parsing never fails; a line with no recognizable structure comes back as
/// a bare name. All matchers are compiled once in [`IngredientLineParser::new`].
pub struct IngredientLineParser {
    to_taste: Vec<Regex>,
    // leading numeric token, parenthesized measurement, rest
    parenthetical: Regex,
    // leading numeric token, unit token, rest
    standard: Regex,
    descriptor: Regex,
    preparation: Regex,
}

impl IngredientLineParser {
    pub fn new() -> Self {
        let units = vocab::UNITS
            .iter()
            .map(|unit| regex::escape(unit))
            .collect::<Vec<_>>()
            .join("|");
        Self {
            to_taste: vocab::TO_TASTE_PHRASES
                .iter()
                .map(|phrase| Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap())
                .collect(),
            parenthetical: Regex::new(r"^(\d+/\d+|\d+\.\d+|\d+)?\s*\((.*?)\)\s*(.*)").unwrap(),
            standard: Regex::new(&format!(
                r"(?i)^(\d+/\d+|\d+\.\d+|\d+)?\s*(\b(?:{units})\b)?\s*(.*)"
            ))
            .unwrap(),
            descriptor: vocab::word_matcher(vocab::DESCRIPTORS),
            preparation: vocab::word_matcher(vocab::PREPARATIONS),
        }
    }

    /// Parse a raw ingredient line.
    ///
    /// Stages, in order: to-taste detection, quantity/measurement extraction
    /// (parenthetical form, then standard form), descriptor excision,
    /// preparation excision.
    pub fn parse(&self, raw: &str) -> Ingredient {
        let mut working = raw.trim().to_string();
        let mut quantity: Option<String> = None;

        for matcher in &self.to_taste {
            if let Some(found) = matcher.find(&working) {
                let range = found.range();
                working.replace_range(range, "");
                working = working.trim().to_string();
                quantity = Some("to taste".to_string());
            }
        }

        let mut measurement: Option<String> = None;
        let name_text: String;
        if let Some(caps) = self.parenthetical.captures(&working) {
            measurement = caps.get(2).map(|m| m.as_str().trim().to_string());
            name_text = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();
            // a parenthetical measurement with no count means one of the thing;
            // a quantity set by the to-taste stage is never overwritten
            if quantity.is_none() {
                quantity = Some(
                    caps.get(1)
                        .map(|m| m.as_str().trim().to_string())
                        .unwrap_or_else(|| "1".to_string()),
                );
            }
        } else if let Some(caps) = self.standard.captures(&working) {
            if let Some(number) = caps.get(1) {
                quantity = Some(number.as_str().trim().to_string());
            }
            measurement = caps.get(2).map(|m| m.as_str().trim().to_string());
            let rest = caps.get(3).map_or("", |m| m.as_str()).trim();
            name_text = if rest.is_empty() {
                working.clone()
            } else {
                rest.to_string()
            };
        } else {
            name_text = working.clone();
        }

        let (descriptor, name_text) = excise_first(&self.descriptor, &name_text);
        let (preparation, name_text) = excise_first(&self.preparation, &name_text);

        Ingredient {
            name: tidy_name(&name_text),
            quantity,
            measurement,
            descriptor,
            preparation,
        }
    }
}

impl Default for IngredientLineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Record the first vocabulary match and excise every occurrence of that
/// word from the text. Other vocabulary words stay in place; at most one is
/// ever recorded.
fn excise_first(matcher: &Regex, text: &str) -> (Option<String>, String) {
    let found: Vec<(std::ops::Range<usize>, String)> = matcher
        .find_iter(text)
        .map(|m| (m.range(), m.as_str().to_string()))
        .collect();
    let Some((_, first)) = found.first() else {
        return (None, text.to_string());
    };

    let mut remainder = String::with_capacity(text.len());
    let mut position = 0;
    for (range, matched) in &found {
        if matched.eq_ignore_ascii_case(first) {
            remainder.push_str(&text[position..range.start]);
            position = range.end;
        }
    }
    remainder.push_str(&text[position..]);
    (Some(first.to_lowercase()), remainder)
}

fn tidy_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches(',').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Ingredient {
        IngredientLineParser::new().parse(line)
    }

    #[test]
    fn test_quantity_unit_name() {
        let ing = parse("2 cups flour");
        assert_eq!(ing.quantity.as_deref(), Some("2"));
        assert_eq!(ing.measurement.as_deref(), Some("cups"));
        assert_eq!(ing.name, "flour");
        assert_eq!(ing.descriptor, None);
        assert_eq!(ing.preparation, None);
    }

    #[test]
    fn test_fraction_quantity() {
        let ing = parse("1/2 cup milk");
        assert_eq!(ing.quantity.as_deref(), Some("1/2"));
        assert_eq!(ing.measurement.as_deref(), Some("cup"));
        assert_eq!(ing.name, "milk");
    }

    #[test]
    fn test_decimal_quantity() {
        let ing = parse("1.5 teaspoons vanilla extract");
        assert_eq!(ing.quantity.as_deref(), Some("1.5"));
        assert_eq!(ing.measurement.as_deref(), Some("teaspoons"));
        assert_eq!(ing.name, "vanilla extract");
    }

    #[test]
    fn test_compound_to_taste() {
        let ing = parse("salt, or to taste");
        assert_eq!(ing.quantity.as_deref(), Some("to taste"));
        assert_eq!(ing.name, "salt");
        assert_eq!(ing.measurement, None);
    }

    #[test]
    fn test_bare_to_taste() {
        let ing = parse("black pepper to taste");
        assert_eq!(ing.quantity.as_deref(), Some("to taste"));
        assert_eq!(ing.name, "black pepper");
    }

    #[test]
    fn test_parenthetical_measurement() {
        let ing = parse("1 (15 oz) can crushed tomatoes");
        assert_eq!(ing.quantity.as_deref(), Some("1"));
        assert_eq!(ing.measurement.as_deref(), Some("15 oz"));
        assert!(ing.name.contains("crushed tomatoes"));
        assert_eq!(ing.descriptor.as_deref(), Some("can"));
    }

    #[test]
    fn test_parenthetical_without_count_defaults_to_one() {
        let ing = parse("(8 oz) package cream cheese");
        assert_eq!(ing.quantity.as_deref(), Some("1"));
        assert_eq!(ing.measurement.as_deref(), Some("8 oz"));
        assert_eq!(ing.descriptor.as_deref(), Some("package"));
        assert_eq!(ing.name, "cream cheese");
    }

    #[test]
    fn test_descriptor_excised() {
        let ing = parse("2 pounds boneless chicken breast");
        assert_eq!(ing.measurement.as_deref(), Some("pounds"));
        assert_eq!(ing.descriptor.as_deref(), Some("boneless"));
        assert_eq!(ing.name, "chicken breast");
    }

    #[test]
    fn test_preparation_excised() {
        let ing = parse("1 onion, finely chopped");
        assert_eq!(ing.quantity.as_deref(), Some("1"));
        assert_eq!(ing.preparation.as_deref(), Some("finely chopped"));
        assert_eq!(ing.name, "onion");
    }

    #[test]
    fn test_descriptor_and_preparation_together() {
        let ing = parse("2 cups fresh basil, chopped");
        assert_eq!(ing.descriptor.as_deref(), Some("fresh"));
        assert_eq!(ing.preparation.as_deref(), Some("chopped"));
        assert_eq!(ing.name, "basil");
    }

    #[test]
    fn test_second_vocabulary_word_stays_in_name() {
        // only the first match is recorded and excised
        let ing = parse("1 small ripe avocado");
        assert_eq!(ing.descriptor.as_deref(), Some("small"));
        assert_eq!(ing.name, "ripe avocado");
    }

    #[test]
    fn test_plain_name_line() {
        let ing = parse("garlic powder");
        assert_eq!(ing.quantity, None);
        assert_eq!(ing.measurement, None);
        assert_eq!(ing.name, "garlic powder");
    }

    #[test]
    fn test_unit_without_quantity() {
        let ing = parse("pinch of saffron");
        assert_eq!(ing.quantity, None);
        assert_eq!(ing.measurement.as_deref(), Some("pinch"));
        assert_eq!(ing.name, "of saffron");
    }

    #[test]
    fn test_unit_matches_whole_words_only() {
        // "l" and "g" must not be clipped out of ordinary words
        let ing = parse("lemon zest");
        assert_eq!(ing.measurement, None);
        assert_eq!(ing.name, "lemon zest");
    }

    #[test]
    fn test_name_never_contains_excised_words() {
        let lines = [
            "2 cups flour",
            "1 (15 oz) can crushed tomatoes",
            "2 pounds boneless skinless chicken thighs",
            "3 cloves garlic, minced",
            "1 cup fresh cilantro, roughly chopped",
            "salt, or to taste",
        ];
        let parser = IngredientLineParser::new();
        for line in lines {
            let ing = parser.parse(line);
            let lowered = ing.name.to_lowercase();
            if let Some(descriptor) = &ing.descriptor {
                assert!(
                    !lowered.contains(descriptor),
                    "{line:?}: name {:?} still contains descriptor {descriptor:?}",
                    ing.name
                );
            }
            if let Some(preparation) = &ing.preparation {
                assert!(
                    !lowered.contains(preparation),
                    "{line:?}: name {:?} still contains preparation {preparation:?}",
                    ing.name
                );
            }
        }
    }
}
