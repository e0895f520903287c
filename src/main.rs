// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary entry point: run the search with the compile-time configuration
//! and report the total.

use anyhow::Result;

use cubic_search::{Search, SearchConfig};

fn main() -> Result<()> {
    let config = SearchConfig::default();
    let summary = Search::new(config).run()?;
    println!(
        "Total {} solutions found, with up to {} faces.",
        summary.total(),
        summary.max_faces
    );
    Ok(())
}
