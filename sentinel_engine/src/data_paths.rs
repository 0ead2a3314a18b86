use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
///
/// Checks the working directory first (workspace root, then a flattened `data/`),
/// then the same layouts next to the executable and one level above it.
fn detect_data_root() -> PathBuf {
    let mut bases = vec![PathBuf::new()];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        bases.push(dir.to_path_buf());
        if let Some(parent) = dir.parent() {
            bases.push(parent.to_path_buf());
        }
    }

    bases
        .iter()
        .flat_map(|base| [base.join("sentinel_engine/data"), base.join("data")])
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("data"))
}
