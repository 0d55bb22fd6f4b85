use derive_more::Display;

/// Failures the installer reports to the operator by name.
///
/// Everything else (filesystem errors in particular) travels as a plain
/// `anyhow::Error` with context attached at the failing step.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[display("This script doesn't currently support {_0}.")]
    UnsupportedPlatform(&'static str),

    #[display("{name}, a dependency of this script, doesn't appear to be installed.")]
    MissingDependency { name: String },

    #[display("There was an error displaying a prompt.")]
    Prompt,

    #[display("You must select at least one service to continue.")]
    NothingSelected,

    #[display("Invalid value for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[display("Could not generate {name}: {reason}")]
    Artifact { name: String, reason: String },
}

impl std::error::Error for InstallError {}
