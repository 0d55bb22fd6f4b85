//! Compose and unit files rendered from the embedded templates.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use bon::Builder;
use log::info;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use rust_embed::Embed;
use serde::Serialize;

use crate::{
    common::{PROJECT_VERSION, create_secure_directory},
    error::InstallError,
    model::InstallOptions,
};

pub const COMPOSE_TEMPLATE: &str = "docker-compose.yaml.j2";
pub const UNIT_TEMPLATE: &str = "systemd-unit.service.j2";

const COMPOSE_FILE_NAME: &str = "docker-compose.yaml";
const DEFAULT_INSTALL_BASE: &str = "/opt/ractf";
const DEFAULT_UNIT_DIR: &str = "/etc/systemd/system";

#[derive(Embed)]
#[folder = "resources/templates/"]
#[include = "*.j2"]
struct Templates;

/// Where artifacts land on disk.
///
/// `root` prefixes every written path, so a staged install can be produced
/// under a scratch directory. Paths baked into the files stay unprefixed.
#[derive(Debug, Clone, Builder)]
pub struct InstallLayout {
    #[builder(default = PathBuf::from("/"), into)]
    root: PathBuf,
    #[builder(default = PathBuf::from(DEFAULT_INSTALL_BASE), into)]
    install_base: PathBuf,
    #[builder(default = PathBuf::from(DEFAULT_UNIT_DIR), into)]
    unit_dir: PathBuf,
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl InstallLayout {
    /// Directory the stack runs from, as seen by systemd.
    #[must_use]
    pub fn install_dir(&self, internal_name: &str) -> PathBuf {
        self.install_base.join(internal_name)
    }

    #[must_use]
    pub fn compose_file(&self, internal_name: &str) -> PathBuf {
        self.rooted(&self.install_dir(internal_name))
            .join(COMPOSE_FILE_NAME)
    }

    #[must_use]
    pub fn unit_file(&self, internal_name: &str) -> PathBuf {
        self.rooted(&self.unit_dir)
            .join(format!("ractf_{internal_name}.service"))
    }

    fn rooted(&self, path: &Path) -> PathBuf {
        self.root.join(path.strip_prefix("/").unwrap_or(path))
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub template: &'static str,
    pub path: PathBuf,
    pub contents: String,
    /// Unix permission bits of the written file
    pub mode: u32,
    /// Whether the parent directory is restricted to the owner
    pub private_dir: bool,
}

#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    options: &'a InstallOptions,
    install_dir: &'a Path,
    installer_version: &'a str,
}

fn template_source(name: &'static str) -> Result<String> {
    let file = Templates::get(name).ok_or_else(|| InstallError::Artifact {
        name: name.to_string(),
        reason: "template is not embedded".to_string(),
    })?;
    String::from_utf8(file.data.into_owned()).map_err(|_| {
        InstallError::Artifact {
            name: name.to_string(),
            reason: "template is not UTF-8".to_string(),
        }
        .into()
    })
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env
}

fn render(
    env: &Environment<'_>,
    name: &'static str,
    source: &str,
    ctx: &TemplateContext<'_>,
) -> Result<String> {
    env.render_named_str(name, source, ctx).map_err(|e| {
        InstallError::Artifact {
            name: name.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Renders both files. Nothing touches the disk here, so a template error
/// leaves the system as it was.
pub fn render_all(options: &InstallOptions, layout: &InstallLayout) -> Result<Vec<Artifact>> {
    let install_dir = layout.install_dir(&options.internal_name);
    let ctx = TemplateContext {
        options,
        install_dir: &install_dir,
        installer_version: PROJECT_VERSION,
    };
    let env = environment();

    let compose_source = template_source(COMPOSE_TEMPLATE)?;
    let unit_source = template_source(UNIT_TEMPLATE)?;

    Ok(vec![
        Artifact {
            template: COMPOSE_TEMPLATE,
            path: layout.compose_file(&options.internal_name),
            contents: render(&env, COMPOSE_TEMPLATE, &compose_source, &ctx)?,
            mode: 0o600,
            private_dir: true,
        },
        Artifact {
            template: UNIT_TEMPLATE,
            path: layout.unit_file(&options.internal_name),
            contents: render(&env, UNIT_TEMPLATE, &unit_source, &ctx)?,
            mode: 0o644,
            private_dir: false,
        },
    ])
}

/// Writes each artifact in order, creating parent directories. Stops at the
/// first failure without removing what was already written.
pub fn write_all(artifacts: &[Artifact]) -> Result<()> {
    for artifact in artifacts {
        write_artifact(artifact)?;
        info!("wrote {}", artifact.path.display());
    }
    Ok(())
}

fn write_artifact(artifact: &Artifact) -> Result<()> {
    let parent = artifact
        .path
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", artifact.path.display()))?;

    if artifact.private_dir {
        create_secure_directory(parent)?;
    } else {
        fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory: {}", parent.display()))?;
    }

    fs::write(&artifact.path, &artifact.contents)
        .with_context(|| format!("Unable to write {}", artifact.path.display()))?;
    set_file_mode(&artifact.path, artifact.mode)
}

#[cfg(unix)]
fn set_file_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .with_context(|| format!("Unable to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}
