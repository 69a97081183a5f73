use anyhow::Context;
use scad_catalog::generate_catalog;

/// Root of the design-file library shipped with the browsing UI.
const LIBRARY_ROOT: &str = "public/SFLibs";

fn main() -> anyhow::Result<()> {
    generate_catalog(LIBRARY_ROOT)
        .with_context(|| format!("Failed to generate catalog for {LIBRARY_ROOT}"))?;
    Ok(())
}
