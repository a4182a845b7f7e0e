//! Static vocabulary tables driving the extraction rules.
//!
//! Tables are plain data consumed by [`word_matcher`]; the matching logic
//! lives with the components that use it. Table order matters: alternations
//! try entries in table order at each position, so a multi-word entry must
//! come before any entry that is a prefix of it ("aluminum foil" before
//! "foil", "finely chopped" before "chopped").

use regex::Regex;

/// Measurement unit tokens recognized in ingredient lines.
pub const UNITS: &[&str] = &[
    "cup",
    "cups",
    "teaspoon",
    "teaspoons",
    "tbsp",
    "tablespoon",
    "tablespoons",
    "oz",
    "ounce",
    "ounces",
    "pound",
    "pounds",
    "g",
    "grams",
    "kg",
    "kilograms",
    "ml",
    "milliliters",
    "l",
    "liters",
    "handful",
    "pinch",
    "pinches",
    "dash",
    "dashes",
    "slice",
    "slices",
    "clove",
    "cloves",
    "package",
    "packages",
    "piece",
    "pieces",
    "milligrams",
    "tsp",
    "quart",
    "quarts",
    "pint",
    "pints",
    "fluid ounce",
    "fluid ounces",
    "gal",
    "gallon",
    "gallons",
    "dl",
];

/// Descriptor words excised from ingredient names ("fresh basil").
pub const DESCRIPTORS: &[&str] = &[
    "fresh",
    "extra-virgin",
    "dehydrated",
    "heirloom",
    "aged",
    "low-fat",
    "reduced-fat",
    "lean",
    "package",
    "packages",
    "packaged",
    "packed",
    "box",
    "boxed",
    "jar",
    "jarred",
    "jars",
    "ripe",
    "can",
    "cans",
    "canned",
    "frozen",
    "organic",
    "large",
    "small",
    "medium",
    "smoked",
    "thick-cut",
    "thinly",
    "boneless",
    "skinless",
    "bone-in",
];

/// Preparation words excised from ingredient names ("onion, finely chopped").
pub const PREPARATIONS: &[&str] = &[
    "finely chopped",
    "chopped",
    "shredded",
    "divided",
    "finely shredded",
    "minced",
    "sliced",
    "diced",
    "grated",
    "ground",
    "julienned",
    "peeled",
    "squeezed",
    "dried",
    "roughly chopped",
    "roughly diced",
    "pureed",
    "smashed",
    "zested",
    "beaten",
    "marinated",
    "mashed",
    "sliced thinly",
    "halved",
    "quartered",
    "cut into chunks",
    "brushed",
    "trimmed",
    "cored",
    "cubed",
    "butterflied",
];

/// Kitchen tools recognized in instruction text.
pub const TOOLS: &[&str] = &[
    "oven",
    "pot",
    "skillet",
    "baking pan",
    "bowl",
    "plate",
    "aluminum foil",
    "foil",
    "tray",
    "sheet",
    "spatula",
    "strainer",
    "ladle",
    "colander",
    "saucepan",
    "grater",
    "microplane",
    "peeler",
    "tongs",
    "mortar",
    "pestle",
    "slotted spoon",
    "mandoline",
    "rolling pin",
    "measuring cup",
    "measuring spoon",
    "baster",
    "mixing bowl",
    "blender",
    "pressure cooker",
    "air fryer",
];

/// Cooking methods recognized in instruction text.
pub const METHODS: &[&str] = &[
    "preheat",
    "boil",
    "cook",
    "stir",
    "mix",
    "layer",
    "bake",
    "drain",
    "broil",
    "poach",
    "roast",
    "grill",
    "steam",
    "sear",
    "saute",
    "braise",
    "whisk",
    "knead",
    "caramelize",
    "marinate",
    "simmer",
    "parboil",
    "blanch",
    "whip",
    "fold",
    "beat",
    "blend",
    "pulse",
    "scald",
    "deglaze",
    "fillet",
    "infuse",
    "deep-fry",
    "deep fry",
    "score",
    "smoke",
];

/// Quantity placeholders; the compound form comes first so the bare phrase
/// check does not leave a dangling comma behind.
pub const TO_TASTE_PHRASES: &[&str] = &[", or to taste", "to taste"];

/// Tokens that end with a period without ending a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "approx", "deg", "dr", "e.g", "etc", "fl", "hr", "hrs", "i.e", "lb", "lbs", "min", "mr",
    "mrs", "no", "oz", "pkg", "pt", "qt", "sec", "st", "tbsp", "tsp", "vs",
];

/// Compile a case-insensitive whole-word alternation over a vocabulary
/// table. Panics only on a malformed table, which is a programming error.
pub(crate) fn word_matcher(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
}
