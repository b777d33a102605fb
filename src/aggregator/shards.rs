use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Enumerate shard sources: the `.json` files directly inside `dir`.
///
/// Listing is non-recursive and the extension match ignores case. Results are
/// sorted by path for stable reporting; the aggregate itself is invariant to
/// shard order.
pub fn discover_shards(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    let mut shards = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("failed to list directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            shards.push(path.to_path_buf());
        }
    }

    shards.sort();
    Ok(shards)
}
