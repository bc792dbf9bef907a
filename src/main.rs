//! colorband — map a scalar reading onto a blended color palette.
//!
//! Run with:  `RUST_LOG=info colorband <value> [alpha]`

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("colorband v{} starting", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let query: f64 = args
        .next()
        .context("usage: colorband <value> [alpha]")?
        .parse()
        .context("the query value must be a number")?;
    let alpha: Option<f64> = match args.next() {
        Some(raw) => Some(raw.parse().context("the alpha override must be a number")?),
        None => None,
    };

    let path = band_config::default_path();
    let map = if path.exists() {
        band_config::load(&path)?.build_map()?
    } else {
        tracing::info!("no palette config; using the built-in temperature table");
        band_temp::TempColorMap::new().map().clone()
    };
    let color = map.resolve(query, alpha)?;

    println!("{color}");
    println!("{}", color.to_hex_string());
    Ok(())
}
