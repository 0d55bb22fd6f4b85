use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use log::{debug, info};

use crate::error::InstallError;

pub const COMPOSE_EXECUTABLE: &str = "docker-compose";
pub const DOCKER_EXECUTABLE: &str = "docker";

/// External tools the generated files rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependencies {
    /// Absolute location of `docker-compose`, written into the unit file
    pub compose: PathBuf,
    pub docker: PathBuf,
}

impl Dependencies {
    /// Looks both tools up on `search_path`, or on `PATH` when `None`.
    ///
    /// The compose binary is checked first, matching the order the operator
    /// is told about them.
    pub fn discover(search_path: Option<&OsStr>) -> Result<Self> {
        let owned;
        let search_path = match search_path {
            Some(path) => path,
            None => {
                owned = env::var_os("PATH").unwrap_or_default();
                owned.as_os_str()
            }
        };

        let compose = require(COMPOSE_EXECUTABLE, search_path)?;
        let docker = require(DOCKER_EXECUTABLE, search_path)?;
        Ok(Self { compose, docker })
    }
}

fn require(name: &str, search_path: &OsStr) -> Result<PathBuf> {
    match find_executable(name, search_path) {
        Some(path) => {
            info!("found {name} at {}", path.display());
            Ok(path)
        }
        None => Err(InstallError::MissingDependency {
            name: name.to_string(),
        }
        .into()),
    }
}

/// First executable file called `name` in the directories of `search_path`.
///
/// Empty entries are skipped rather than meaning the current directory.
#[must_use]
pub fn find_executable(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| {
            let found = is_executable(candidate);
            debug!("checking {} -> {found}", candidate.display());
            found
        })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = mode;
        path
    }

    fn joined(dirs: &[&Path]) -> OsString {
        env::join_paths(dirs).unwrap()
    }

    #[test]
    fn test_finds_both_tools() {
        let bin = tempfile::tempdir().unwrap();
        let compose = touch(bin.path(), COMPOSE_EXECUTABLE, 0o755);
        let docker = touch(bin.path(), DOCKER_EXECUTABLE, 0o755);

        let deps = Dependencies::discover(Some(&joined(&[bin.path()]))).unwrap();

        assert_eq!(deps.compose, compose);
        assert_eq!(deps.docker, docker);
    }

    #[test]
    fn test_first_directory_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let expected = touch(first.path(), "tool", 0o755);
        touch(second.path(), "tool", 0o755);

        let found = find_executable("tool", &joined(&[first.path(), second.path()]));

        assert_eq!(found, Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_executable_files() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        touch(first.path(), "tool", 0o644);
        let expected = touch(second.path(), "tool", 0o700);

        let found = find_executable("tool", &joined(&[first.path(), second.path()]));

        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_skips_directories() {
        let bin = tempfile::tempdir().unwrap();
        fs::create_dir(bin.path().join("tool")).unwrap();

        assert_eq!(find_executable("tool", &joined(&[bin.path()])), None);
    }

    #[test]
    fn test_missing_compose_is_reported_by_name() {
        let bin = tempfile::tempdir().unwrap();
        touch(bin.path(), DOCKER_EXECUTABLE, 0o755);

        let err = Dependencies::discover(Some(&joined(&[bin.path()]))).unwrap_err();

        assert_eq!(
            err.downcast_ref::<InstallError>(),
            Some(&InstallError::MissingDependency {
                name: COMPOSE_EXECUTABLE.into()
            })
        );
    }

    #[test]
    fn test_missing_docker_is_reported_by_name() {
        let bin = tempfile::tempdir().unwrap();
        touch(bin.path(), COMPOSE_EXECUTABLE, 0o755);

        let err = Dependencies::discover(Some(&joined(&[bin.path()]))).unwrap_err();

        assert_eq!(
            err.downcast_ref::<InstallError>(),
            Some(&InstallError::MissingDependency {
                name: DOCKER_EXECUTABLE.into()
            })
        );
    }

    #[test]
    fn test_empty_search_path() {
        assert_eq!(find_executable("docker", OsStr::new("")), None);
    }
}
