//! Ships the workspace `config.toml` beside the backend binary, where
//! `shared::config::load_config` looks first. A missing or unusable file is
//! reported as a cargo warning; the binary then runs on its embedded default.

use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

fn main() {
    let manifest_dir = PathBuf::from(std::env::var_os("CARGO_MANIFEST_DIR").unwrap_or_default());
    let source = manifest_dir.join("..").join("..").join(CONFIG_FILE);
    println!("cargo:rerun-if-changed={}", source.display());

    if let Err(message) = ship_config(&source) {
        println!("cargo:warning={}", message);
    }
}

fn ship_config(source: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(source)
        .map_err(|e| format!("{} not readable ({}), the embedded default will be used", source.display(), e))?;
    check_warehouse_url(&text).map_err(|reason| format!("{}: {}", source.display(), reason))?;

    let destination = binary_dir()?.join(CONFIG_FILE);
    std::fs::copy(source, &destination)
        .map(|_| ())
        .map_err(|e| format!("copying config to {} failed: {}", destination.display(), e))
}

/// The binary must not start against an empty warehouse URL
fn check_warehouse_url(text: &str) -> Result<(), String> {
    let table: toml::Table = text.parse().map_err(|e| format!("invalid TOML: {}", e))?;
    let url = table
        .get("warehouse")
        .and_then(|w| w.get("url"))
        .and_then(|u| u.as_str())
        .unwrap_or_default();
    if url.trim().is_empty() {
        return Err("[warehouse] url is missing".to_string());
    }
    Ok(())
}

/// target/<profile>, found by walking up from OUT_DIR
fn binary_dir() -> Result<PathBuf, String> {
    let out_dir = std::env::var("OUT_DIR").map_err(|e| format!("OUT_DIR: {}", e))?;
    let profile = std::env::var("PROFILE").map_err(|e| format!("PROFILE: {}", e))?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("no {} directory above {}, config not copied", profile, out_dir))
}
