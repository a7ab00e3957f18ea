//! Command-line driver: loads a scene and an optional config, then runs one export.
//!
//! All behavior lives in the library; this only wires files and logging to it.

use anyhow::{bail, Context, Result};
use log::info;
use std::path::PathBuf;
use trackmap::{export, ExportConfig, SceneDocument};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let scene_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: trackmap <scene.json> [config.json]"),
    };
    let config = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            ExportConfig::load(&path).with_context(|| format!("Unable to read config {}", path.display()))?
        }
        None => ExportConfig::default(),
    };

    let scene =
        SceneDocument::load(&scene_path).with_context(|| format!("Unable to read scene {}", scene_path.display()))?;
    let source = scene
        .element(&config.node, &config.element)
        .context("Track path not found")?;
    info!(
        "exporting {}/{} at t = {}",
        config.node,
        source.name(),
        config.sample_time
    );

    export(&source, &config).with_context(|| format!("Export to {} failed", config.destination.display()))?;
    Ok(())
}
