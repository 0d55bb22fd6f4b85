//! Answers supplied up front, from flags or an answers file.
//!
//! Every present field skips the matching prompt.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Presets {
    /// Whether to install Shell
    #[arg(long)]
    pub shell: bool,

    /// Whether to install Core
    #[arg(long)]
    pub core: bool,

    /// Whether to install Andromeda
    #[arg(long)]
    pub andromeda: bool,

    /// The name of the event
    #[arg(long = "eventname", value_name = "NAME")]
    pub event_name: Option<String>,

    /// The public URL of your shell instance
    #[arg(long = "frontendurl", value_name = "URL")]
    pub frontend_url: Option<String>,

    /// The public URL of your core instance
    #[arg(long = "apidomain", value_name = "URL")]
    pub api_domain: Option<String>,

    /// The email sent to LetsEncrypt for certificate provisioning
    #[arg(long, value_name = "ADDRESS")]
    pub email: Option<String>,

    /// How emails should be sent: SMTP, SES (AWS) or Sendgrid
    #[arg(long = "emailmode", value_name = "MODE")]
    pub email_mode: Option<String>,

    /// AWS Access Key ID (for mail)
    #[arg(long = "awsaccesskeyid", value_name = "KEY")]
    pub aws_access_key_id: Option<String>,

    /// AWS Secret Access Key (for mail)
    #[arg(long = "awsaccesskeysecret", value_name = "SECRET")]
    pub aws_secret_access_key: Option<String>,

    /// Sendgrid API key
    #[arg(long = "sendgridapikey", value_name = "KEY")]
    pub sendgrid_api_key: Option<String>,

    /// SMTP server
    #[arg(long = "smtpserver", value_name = "HOST")]
    pub smtp_server: Option<String>,

    /// SMTP user
    #[arg(long = "smtpuser", value_name = "USER")]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[arg(long = "smtppass", alias = "smptpass", value_name = "PASSWORD")]
    pub smtp_pass: Option<String>,

    /// Whether to use Watchtower to auto-update RACTF
    #[arg(long = "usewatchtower")]
    pub use_watchtower: bool,

    /// IP or hostname users access challenges through
    #[arg(long = "andromedaip", value_name = "HOST")]
    pub andromeda_ip: Option<String>,
}

impl Presets {
    /// Reads an answers file. Keys are the field names above.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read answers file {}", path.display()))?;
        let presets: Self = toml::from_str(&content)
            .with_context(|| format!("Unable to parse answers file {}", path.display()))?;
        debug!("loaded answers from {}", path.display());
        Ok(presets)
    }

    /// Fields set here win; unset ones fall back to `fallback`.
    #[must_use]
    pub fn merge(self, fallback: Self) -> Self {
        Self {
            shell: self.shell || fallback.shell,
            core: self.core || fallback.core,
            andromeda: self.andromeda || fallback.andromeda,
            event_name: self.event_name.or(fallback.event_name),
            frontend_url: self.frontend_url.or(fallback.frontend_url),
            api_domain: self.api_domain.or(fallback.api_domain),
            email: self.email.or(fallback.email),
            email_mode: self.email_mode.or(fallback.email_mode),
            aws_access_key_id: self.aws_access_key_id.or(fallback.aws_access_key_id),
            aws_secret_access_key: self.aws_secret_access_key.or(fallback.aws_secret_access_key),
            sendgrid_api_key: self.sendgrid_api_key.or(fallback.sendgrid_api_key),
            smtp_server: self.smtp_server.or(fallback.smtp_server),
            smtp_user: self.smtp_user.or(fallback.smtp_user),
            smtp_pass: self.smtp_pass.or(fallback.smtp_pass),
            use_watchtower: self.use_watchtower || fallback.use_watchtower,
            andromeda_ip: self.andromeda_ip.or(fallback.andromeda_ip),
        }
    }

    /// Drops blank answers, so `--email ""` asks. Answers are trimmed except
    /// the SMTP password and Sendgrid key, which are kept as given.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        fn verbatim(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            event_name: clean(self.event_name),
            frontend_url: clean(self.frontend_url),
            api_domain: clean(self.api_domain),
            email: clean(self.email),
            email_mode: clean(self.email_mode),
            aws_access_key_id: clean(self.aws_access_key_id),
            aws_secret_access_key: clean(self.aws_secret_access_key),
            sendgrid_api_key: verbatim(self.sendgrid_api_key),
            smtp_server: clean(self.smtp_server),
            smtp_user: clean(self.smtp_user),
            smtp_pass: verbatim(self.smtp_pass),
            andromeda_ip: clean(self.andromeda_ip),
            ..self
        }
    }

    /// True when any component flag was given.
    #[must_use]
    pub const fn picks_components(&self) -> bool {
        self.shell || self.core || self.andromeda
    }
}
