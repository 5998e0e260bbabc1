//! `lom-indices`: print the positional indices of a canonical path.
//!
//! Usage:
//!   lom-indices '<path>'
//!
//! Writes a JSON object to stdout. Set `RUST_LOG` for diagnostics on stderr.

use std::io::{self, Write};

use lom_path::parse_path;
use serde_json::json;
use tracing::debug;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let input = match args.get(1) {
        Some(p) => p.clone(),
        None => {
            eprintln!("First argument must be a canonical path.");
            std::process::exit(1);
        }
    };

    let path = match parse_path(&input) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    debug!(segments = path.depth(), "parsed path");

    let indices = path.indices();
    let out = json!({
        "path": path.to_string(),
        "category": indices.category.map(|c| c.as_str()),
        "track_index": indices.track_index,
        "return_track_index": indices.return_track_index,
        "scene_index": indices.scene_index,
        "clip_slot_index": indices.clip_slot_index,
        "device_index": indices.device_index,
    });

    let mut stdout = io::stdout();
    if let Err(e) = writeln!(stdout, "{out}") {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
