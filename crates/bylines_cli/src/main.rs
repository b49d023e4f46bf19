//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `bylines_core` linkage with a tiny sample catalog.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `BYLINES_LOG_DIR` to an absolute path to also write core logs.

use bylines_core::{CatalogService, RepoResult};
use log::warn;

fn main() {
    println!("bylines_core ping={}", bylines_core::ping());
    println!("bylines_core version={}", bylines_core::core_version());

    if let Ok(log_dir) = std::env::var("BYLINES_LOG_DIR") {
        if let Err(err) = bylines_core::init_logging(bylines_core::default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = print_sample() {
        warn!("event=cli_sample module=cli status=error kind={:?}", err.kind());
        eprintln!("sample catalog failed: {err}");
        std::process::exit(1);
    }
}

fn print_sample() -> RepoResult<()> {
    let mut catalog = CatalogService::in_memory();
    let ann = catalog.create_author("Ann Writer")?;
    let bob = catalog.create_author("Bob Reporter")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let wired = catalog.create_magazine("Wired", "Technology")?;

    for title in ["Spring Looks", "Summer Edit", "Autumn Layers"] {
        catalog.add_article(ann, vogue, title)?;
    }
    catalog.add_article(ann, wired, "Wearable Futures")?;
    catalog.add_article(bob, vogue, "Runway Report")?;

    println!("articles={}", catalog.articles().len());
    println!(
        "ann.topic_areas={}",
        catalog.topic_areas(ann)?.unwrap_or_default().join(",")
    );
    println!("vogue.titles={}", catalog.article_titles(vogue)?.join("|"));
    let frequent: Vec<String> = catalog
        .contributing_authors(vogue)?
        .iter()
        .map(|author| author.name().to_string())
        .collect();
    println!("vogue.contributing_authors={}", frequent.join(","));
    Ok(())
}
