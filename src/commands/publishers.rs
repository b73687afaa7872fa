use std::path::Path;

use crate::error::Result;
use crate::services;

pub fn run(input: &Path) {
    println!("📇 Publisher Catalog\n");

    match list_publishers(input) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn list_publishers(input: &Path) -> Result<()> {
    let response = services::load_publishers(input)?;

    if response.publishers.is_empty() {
        println!("⚠️  No publishers found.");
        return Ok(());
    }

    println!("📈 Total Publishers: {}\n", response.publishers.len());
    for code in &response.publishers {
        println!("   {}", code);
    }

    Ok(())
}
