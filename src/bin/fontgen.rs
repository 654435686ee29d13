use std::env;
use assetgen::cli::{fontgen_help, parse_fontgen_args};
use assetgen::error::Result;
use assetgen::generator::convert_fonts;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", fontgen_help());
        return Ok(());
    }

    let config = parse_fontgen_args(&args)?;

    println!("Fonts generation\n");

    let summary = convert_fonts(&config)?;

    println!("Font conversion summary:");
    println!("  - {} categories scanned", summary.directories_visited);
    println!("  - {} fonts converted", summary.succeeded());
    if summary.failures > 0 {
        println!("  - {} conversions failed", summary.failures);
    }

    println!("\nFonts generated");
    Ok(())
}
