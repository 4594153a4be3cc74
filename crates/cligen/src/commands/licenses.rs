//! `cligen licenses` command handler

use anyhow::Result;
use cligen_core::LicenseCatalog;

use crate::output;

/// List the embedded license catalog
pub fn run() -> Result<()> {
    let catalog = LicenseCatalog::embedded()?;

    output::header("Available Licenses");
    for license in catalog.licenses() {
        let aliases: Vec<&str> = license
            .aliases
            .iter()
            .map(String::as_str)
            .filter(|a| !a.is_empty())
            .collect();
        output::kv(&license.name, &aliases.join(", "));
    }
    Ok(())
}
