//! JSON files checked into the workspace: golden records under `contracts/`
//! and sample data under `seeds/`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Reads workspace JSON files by path relative to the workspace root.
///
/// ```no_run
/// use holonet_testing::fixture::Fixture;
/// let golden = Fixture::load("contracts/favorites/favorite_with_detail.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Parse `path` as untyped JSON. Panics when the file is missing or malformed.
    pub fn load(path: &str) -> Value {
        Self::load_as(path)
    }

    /// Parse `path` into `T`. Panics when the file is missing or does not match `T`.
    pub fn load_as<T: DeserializeOwned>(path: &str) -> T {
        let full_path = workspace_root().join(path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", full_path.display()));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("cannot parse {}: {e}", full_path.display()))
    }
}

/// First ancestor of the running crate that holds a `contracts/` directory.
fn workspace_root() -> PathBuf {
    let start = std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default();
    let root = start
        .ancestors()
        .find(|dir| dir.join("contracts").is_dir())
        .map(Path::to_path_buf);
    root.unwrap_or(start)
}
