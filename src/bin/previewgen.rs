use std::env;
use assetgen::cli::{parse_previewgen_args, previewgen_help};
use assetgen::error::Result;
use assetgen::generator::generate_previews;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", previewgen_help());
        return Ok(());
    }

    let config = parse_previewgen_args(&args)?;

    println!("Clipart preview generation\n");

    let summary = generate_previews(&config)?;

    println!("Preview generation summary:");
    println!("  - {} categories scanned", summary.directories_visited);
    println!("  - {} preview dirs created", summary.directories_created);
    println!("  - {} previews generated", summary.succeeded());
    if summary.failures > 0 {
        println!("  - {} conversions failed", summary.failures);
    }
    if summary.strays_deleted > 0 {
        println!("  - {} stray files deleted", summary.strays_deleted);
    }

    println!("\nPreviews generated");
    Ok(())
}
