//! The answers collected by the installer and handed to the templates.

use std::{path::PathBuf, str::FromStr};

use anyhow::bail;
use derive_more::Display;
use serde::Serialize;

use crate::prompt::Selection;

/// A deployable RACTF service.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Andromeda,
    Core,
    Shell,
}

impl Component {
    /// Catalog order, as shown in the service picker.
    pub const ALL: [Self; 3] = [Self::Andromeda, Self::Core, Self::Shell];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Andromeda => "Andromeda",
            Self::Core => "Core",
            Self::Shell => "Shell",
        }
    }

    #[must_use]
    pub fn catalog() -> [&'static str; 3] {
        Self::ALL.map(Self::label)
    }
}

/// Which services are part of this install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Components {
    pub andromeda: bool,
    pub core: bool,
    pub shell: bool,
}

impl Components {
    #[must_use]
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            andromeda: selection.is_enabled(Component::Andromeda.label()),
            core: selection.is_enabled(Component::Core.label()),
            shell: selection.is_enabled(Component::Shell.label()),
        }
    }

    #[must_use]
    pub const fn contains(&self, component: Component) -> bool {
        match component {
            Component::Andromeda => self.andromeda,
            Component::Core => self.core,
            Component::Shell => self.shell,
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        Component::ALL.iter().filter(|c| self.contains(**c)).count()
    }

    /// Enabled services in catalog order.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        Component::ALL
            .iter()
            .filter(|c| self.contains(**c))
            .map(|c| c.label())
            .collect()
    }
}

/// How the platform sends email.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum EmailMode {
    #[display("AWS")]
    Aws,
    #[display("Sendgrid")]
    Sendgrid,
    #[display("SMTP")]
    Smtp,
}

impl EmailMode {
    /// Prompt order.
    pub const ALL: [Self; 3] = [Self::Aws, Self::Sendgrid, Self::Smtp];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Sendgrid => "Sendgrid",
            Self::Smtp => "SMTP",
        }
    }
}

impl FromStr for EmailMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aws" | "ses" => Ok(Self::Aws),
            "sendgrid" => Ok(Self::Sendgrid),
            "smtp" => Ok(Self::Smtp),
            other => bail!("unknown email mode '{other}', expected one of AWS, SES, Sendgrid or SMTP"),
        }
    }
}

/// Provider credentials. Serialized with a `mode` tag of `AWS`, `SENDGRID`
/// or `SMTP`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum EmailSettings {
    Aws {
        access_key_id: String,
        secret_access_key: String,
    },
    Sendgrid {
        api_key: String,
    },
    Smtp {
        server: String,
        user: String,
        password: String,
    },
}

impl EmailSettings {
    #[must_use]
    pub const fn mode(&self) -> EmailMode {
        match self {
            Self::Aws { .. } => EmailMode::Aws,
            Self::Sendgrid { .. } => EmailMode::Sendgrid,
            Self::Smtp { .. } => EmailMode::Smtp,
        }
    }
}

/// Everything the templates need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallOptions {
    pub event_name: String,
    /// Lower-cased, path-safe form of `event_name`
    pub internal_name: String,
    pub components: Components,
    /// Sent to LetsEncrypt for certificate provisioning
    pub user_email: String,
    /// API host without scheme, e.g. `api.ractf.co.uk`
    pub api_domain: String,
    /// Frontend host without scheme, e.g. `2020.ractf.co.uk`
    pub frontend_url: String,
    /// API base URL with the operator's scheme, e.g. `https://api.ractf.co.uk/`
    pub api_url: String,
    /// Frontend base URL with the operator's scheme
    pub site_url: String,
    pub andromeda_ip: String,
    pub email: EmailSettings,
    pub secret_key: String,
    pub andromeda_key: String,
    pub database_password: String,
    pub use_watchtower: bool,
    pub compose_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        assert_eq!(Component::catalog(), ["Andromeda", "Core", "Shell"]);
    }

    #[test]
    fn test_components_from_selection() {
        let selection = Selection::with_enabled(&Component::catalog(), |l| l != "Andromeda");
        let components = Components::from_selection(&selection);

        assert!(!components.andromeda);
        assert!(components.core);
        assert!(components.shell);
        assert_eq!(components.count(), 2);
        assert_eq!(components.labels(), vec!["Core", "Shell"]);
    }

    #[test]
    fn test_email_mode_parse() {
        assert_eq!("aws".parse::<EmailMode>().unwrap(), EmailMode::Aws);
        assert_eq!("SES".parse::<EmailMode>().unwrap(), EmailMode::Aws);
        assert_eq!("SendGrid".parse::<EmailMode>().unwrap(), EmailMode::Sendgrid);
        assert_eq!(" smtp ".parse::<EmailMode>().unwrap(), EmailMode::Smtp);
        assert!("pigeon".parse::<EmailMode>().is_err());
    }

    #[test]
    fn test_email_mode_labels_match_display() {
        for mode in EmailMode::ALL {
            assert_eq!(mode.to_string(), mode.label());
        }
    }

    #[test]
    fn test_email_settings_mode() {
        let settings = EmailSettings::Sendgrid {
            api_key: "SG.key".into(),
        };
        assert_eq!(settings.mode(), EmailMode::Sendgrid);
    }
}
