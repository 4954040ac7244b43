// main.rs
//
// Solve the spiral, cut it into facets, and write `line.dxf` plus a
// `line.svg` preview.
//
//   logspiral [run.json] [output-dir]
//
// Without a run file the defaults are used: pitch 12 → 66 mm, one-revolution
// arc length 200 mm, 12 facets.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use logspiral_facets::config::RunConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => RunConfig::load(&path)?,
        None => RunConfig::default(),
    };
    let out_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    fs::create_dir_all(&out_dir)?;

    let (params, sampling) = match config.run() {
        Ok(solved) => solved,
        Err(error) => {
            tracing::error!(spec = ?config.spiral, facet_count = config.facet_count, %error, "run failed");
            return Err(error.into());
        },
    };
    tracing::info!(
        turns = params.turns(),
        arc_length = params.arc_length(),
        "solved: {params}"
    );

    let dxf_path = out_dir.join("line.dxf");
    fs::write(&dxf_path, sampling.to_dxf()?)?;
    tracing::info!(path = %dxf_path.display(), facets = sampling.facet_count(), "DXF exported");

    let svg_path = out_dir.join("line.svg");
    fs::write(&svg_path, sampling.to_svg())?;
    tracing::info!(path = %svg_path.display(), "SVG preview written");

    Ok(())
}
