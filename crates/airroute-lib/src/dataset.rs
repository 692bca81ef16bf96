use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the flight dataset.
pub const DATASET_FILENAME: &str = "flights.csv";

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV_VAR: &str = "AIRROUTE_DATA";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "airroute", "airroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Locate the flight dataset.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `AIRROUTE_DATA` environment variable.
/// 3. Platform-specific project data directory.
///
/// A directory resolves to the `flights.csv` inside it. The resolved file must
/// exist.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_dataset_path(explicit)
    } else if let Some(env_path) = env::var_os(DATASET_ENV_VAR) {
        canonical_dataset_path(Path::new(&env_path))
    } else {
        default_dataset_path()?
    };

    debug!(path = %resolved.display(), "resolved dataset path");
    if !resolved.is_file() {
        return Err(Error::DatasetNotFound { path: resolved });
    }
    Ok(resolved)
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DATASET_FILENAME);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_resolves_to_dataset_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join(DATASET_FILENAME);
        std::fs::write(&file, "city1\n").expect("write dataset");

        let resolved = resolve_dataset_path(Some(dir.path())).expect("dataset resolves");
        assert_eq!(resolved, file);
    }

    #[test]
    fn explicit_file_is_used_as_is() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("custom.csv");
        std::fs::write(&file, "city1\n").expect("write dataset");

        assert_eq!(resolve_dataset_path(Some(&file)).unwrap(), file);
    }

    #[test]
    fn missing_dataset_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.csv");

        let error = resolve_dataset_path(Some(&missing)).unwrap_err();
        assert!(matches!(error, Error::DatasetNotFound { ref path } if path == &missing));
    }
}
