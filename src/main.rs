use blockframe::markup::blocks_from_text;
use blockframe::{Document, DocumentConfig, DocumentError};
use std::env;
use std::fs;

/// Paginates a plain text file into a PDF.
fn main() -> Result<(), DocumentError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Paginates a plain text file into a PDF.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/input.txt> <path/to/output.pdf> [path/to/config.json]",
            args.first().map_or("blockframe", String::as_str)
        );
        eprintln!();
        eprintln!("Blank lines separate paragraphs; a paragraph starting with '# ' is a heading.");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let config = match args.get(3) {
        Some(config_path) => {
            println!("Loading configuration from {}", config_path);
            DocumentConfig::from_file(config_path)?
        }
        None => DocumentConfig::default(),
    };

    println!("Reading {}", input_path);
    let input = fs::read_to_string(input_path)?;

    let mut document = Document::new(config);
    for block in blocks_from_text(&input) {
        document.write_boxed(block);
    }

    let pages = document.write_file(output_path)?;
    println!("Successfully generated {} ({} pages)", output_path, pages);
    Ok(())
}
