use std::env;
use std::fs;
use std::io::Read;

use log::debug;
use recipe_extract::RecipeExtractor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Metadata JSON comes from the path argument, or stdin when absent
    let args: Vec<String> = env::args().collect();
    let input = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let extractor = RecipeExtractor::new();
    let recipe = extractor.extract_from_str(&input)?;
    debug!("{:#?}", recipe);

    println!("{}", serde_json::to_string_pretty(&recipe)?);

    Ok(())
}
