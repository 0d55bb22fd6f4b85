use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
#[cfg(unix)]
use log::debug;

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("GIT_VERSION");
pub const PROJECT_VERSION_HASH: &str = env!("GIT_HASH");

/// Name of the platform being installed, as shown to the operator.
pub const PLATFORM_NAME: &str = "RACTF";

/// Contribution link printed when the installer refuses to run.
pub const CONTRIBUTE_URL: &str = "https://github.com/ractf/install";

#[must_use]
pub fn version_line() -> String {
    format!("{PROJECT_NAME} {PROJECT_VERSION} ({PROJECT_VERSION_HASH})")
}

/// Returns the project data directory, creating it with secure permissions if needed.
///
/// Returns: Path to `~/.local/share/ractf-install` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"))?;

    let project_data_dir = data_dir.join(PROJECT_NAME);

    create_secure_directory(&project_data_dir)?;

    Ok(project_data_dir)
}

/// Creates a directory with secure permissions (0700 on Unix).
///
/// The directory is created if missing, and permissions are forced to
/// owner-only even if it already existed with different ones. The generated
/// compose file carries database passwords and API keys, so its directory
/// goes through here as well.
#[cfg(unix)]
pub fn create_secure_directory(dir: &Path) -> Result<()> {
    use std::fs::DirBuilder;
    use std::os::unix::fs::DirBuilderExt;
    use std::os::unix::fs::PermissionsExt;

    let dir_exists = dir.exists();
    debug!(
        "Creating secure directory: {} (exists={})",
        dir.display(),
        dir_exists
    );

    let mut builder = DirBuilder::new();
    builder.recursive(true).mode(0o700);

    builder
        .create(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;

    if dir_exists
        && let Ok(metadata) = fs::metadata(dir)
    {
        let current_mode = metadata.permissions().mode() & 0o777;
        if current_mode != 0o700 {
            debug!(
                "Fixing directory permissions: {} (current={current_mode:o}, target=0700)",
                dir.display()
            );
        }
    }

    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)
        .with_context(|| format!("Unable to set permissions on directory: {}", dir.display()))?;

    Ok(())
}

#[cfg(not(unix))]
pub fn create_secure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;
    Ok(())
}
