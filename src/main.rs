// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Result};
use std::env;
use std::path::Path;

use safari_stays::HotelCatalog;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("check") => run_check()?,
        Some("export") => run_export(args.get(2).map(String::as_str))?,
        _ => run_ui_mode()?,
    }

    Ok(())
}

fn run_check() -> Result<()> {
    println!("🏨 Safari Stays - Catalog Check");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let catalog = HotelCatalog::with_defaults();
    catalog.verify()?;
    println!("✓ {} hotels listed, identifiers unique", catalog.len());

    let locations = catalog.unique_locations();
    println!("✓ {} distinct locations", locations.len());

    let min_price = catalog.iter().map(|h| h.price).min().unwrap_or(0);
    let max_price = catalog.iter().map(|h| h.price).max().unwrap_or(0);
    println!("✓ Nightly prices KSh {} - KSh {}", min_price, max_price);

    for beds in 1..=4 {
        let count = catalog.iter().filter(|h| h.beds == beds).count();
        if count > 0 {
            println!("  {} bed(s): {} hotels", beds, count);
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Catalog check complete");

    Ok(())
}

fn run_export(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        bail!("Usage: safari-stays export <path.csv>");
    };

    println!("📂 Exporting catalog...");
    let catalog = HotelCatalog::with_defaults();
    catalog.export_csv(Path::new(path))?;
    println!("✓ Wrote {} hotels to {}", catalog.len(), path);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading Safari Stays browser...\n");

    let catalog = HotelCatalog::with_defaults();
    catalog.verify()?;

    println!("📊 {} hotels loaded", catalog.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the API: cargo run --bin stays-server --features server");
    std::process::exit(1);
}
