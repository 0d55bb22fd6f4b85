//! The installer, start to finish.

use std::{env, ffi::OsString, path::PathBuf};

use anyhow::{Result, anyhow};
use bon::Builder;
use log::{info, warn};

use super::{
    artifacts::{InstallLayout, render_all, write_all},
    deps::Dependencies,
};
use crate::{
    common::{CONTRIBUTE_URL, PLATFORM_NAME},
    error::InstallError,
    model::{Component, Components, EmailMode, EmailSettings, InstallOptions},
    presets::Presets,
    prompt::{Endpoint, cumulative_select, require_answer, validators},
    random::generate_random_string,
    tui::{ConfigEntry, ConfigView, Progress, Stylist, Terminal, Tone, ValidationResult},
};

const SECRET_KEY_LEN: usize = 64;
const DATABASE_PASSWORD_LEN: usize = 32;

pub const SERVICES_LABEL: &str = "Which services would you like to install?";
pub const EMAIL_PROVIDER_LABEL: &str = "What email provider do you want to use for sending emails?";

/// One free-text question.
struct Question {
    field: &'static str,
    label: &'static str,
    validator: fn(&str) -> ValidationResult,
    masked: bool,
    /// Whether surrounding whitespace is dropped from the answer
    trim: bool,
}

impl Question {
    const fn plain(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            validator: validators::non_empty,
            masked: false,
            trim: true,
        }
    }

    const fn with_validator(mut self, validator: fn(&str) -> ValidationResult) -> Self {
        self.validator = validator;
        self
    }

    /// Hidden while typed and kept exactly as entered.
    const fn masked(mut self) -> Self {
        self.masked = true;
        self.trim = false;
        self
    }

    const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}

const EVENT_NAME: Question = Question::plain(
    "event name",
    "What's the (short) name of your event (e.g. RACTF)?",
)
.with_validator(validators::event_name);

const USER_EMAIL: Question = Question::plain(
    "email",
    "Which email should be sent to LetsEncrypt for certificate provisioning (Use one you control)?",
)
.with_validator(validators::email_address);

const API_DOMAIN: Question = Question::plain(
    "API domain",
    "What's the public URL of your API? (e.g https://api.ractf.co.uk/)",
)
.with_validator(validators::endpoint);

const FRONTEND_URL: Question = Question::plain(
    "frontend URL",
    "What URL will visitors access your site through? (e.g. https://2020.ractf.co.uk/)",
)
.with_validator(validators::endpoint);

const ANDROMEDA_IP: Question = Question::plain(
    "Andromeda IP",
    "What IP/hostname will users access challenges through? (e.g. 1.1.1.1)",
);

const AWS_ACCESS_KEY_ID: Question = Question::plain("AWS access key ID", "AWS Access Key ID for mail?")
    .with_validator(validators::aws_access_key_id);

const AWS_SECRET_ACCESS_KEY: Question =
    Question::plain("AWS secret access key", "AWS Secret Access Key for mail?")
        .with_validator(validators::aws_secret_access_key)
        .masked()
        .trimmed();

const SENDGRID_API_KEY: Question =
    Question::plain("Sendgrid API key", "Sendgrid API Key for mail?").masked();

const SMTP_SERVER: Question = Question::plain("SMTP server", "SMTP Server?");
const SMTP_USER: Question = Question::plain("SMTP user", "SMTP Username?");
const SMTP_PASS: Question = Question::plain("SMTP password", "SMTP Password?").masked();

/// Uses `preset` when given, otherwise asks. A preset that fails validation
/// is fatal; typed answers are re-asked until valid. Answers are trimmed
/// unless the question keeps them verbatim.
fn ask(terminal: &mut dyn Terminal, question: &Question, preset: Option<&str>) -> Result<String> {
    if let Some(value) = preset {
        return match (question.validator)(value) {
            ValidationResult::Valid => {
                info!("{} supplied up front", question.field);
                Ok(value.to_string())
            }
            ValidationResult::Invalid(reason) => Err(InstallError::Validation {
                field: question.field,
                reason,
            }
            .into()),
        };
    }

    let shape = |input: &str| -> String {
        if question.trim {
            input.trim().to_string()
        } else {
            input.to_string()
        }
    };
    let validator = |input: &str| (question.validator)(&shape(input));
    let answer = require_answer(terminal.input(question.label, question.masked, &validator))?;
    Ok(shape(&answer))
}

fn ask_endpoint(
    terminal: &mut dyn Terminal,
    question: &Question,
    preset: Option<&str>,
) -> Result<Endpoint> {
    let answer = ask(terminal, question, preset)?;
    Endpoint::parse(&answer).map_err(|e| {
        InstallError::Validation {
            field: question.field,
            reason: e.to_string(),
        }
        .into()
    })
}

fn choose_components(terminal: &mut dyn Terminal, presets: &Presets) -> Result<Components> {
    let components = if presets.picks_components() {
        Components {
            andromeda: presets.andromeda,
            core: presets.core,
            shell: presets.shell,
        }
    } else {
        let selection = cumulative_select(terminal, SERVICES_LABEL, &Component::catalog())?;
        Components::from_selection(&selection)
    };

    if components.count() == 0 {
        return Err(InstallError::NothingSelected.into());
    }
    info!("installing {}", components.labels().join(", "));
    Ok(components)
}

fn choose_email_mode(terminal: &mut dyn Terminal, preset: Option<&str>) -> Result<EmailMode> {
    if let Some(value) = preset {
        return value.parse().map_err(|e: anyhow::Error| {
            InstallError::Validation {
                field: "email mode",
                reason: e.to_string(),
            }
            .into()
        });
    }

    let labels = EmailMode::ALL.map(EmailMode::label);
    let index = require_answer(terminal.select(EMAIL_PROVIDER_LABEL, &labels, 0))?;
    EmailMode::ALL
        .get(index)
        .copied()
        .ok_or_else(|| anyhow!("email provider choice {index} is out of range"))
}

fn collect_email_settings(
    terminal: &mut dyn Terminal,
    mode: EmailMode,
    presets: &Presets,
) -> Result<EmailSettings> {
    Ok(match mode {
        EmailMode::Aws => EmailSettings::Aws {
            access_key_id: ask(terminal, &AWS_ACCESS_KEY_ID, presets.aws_access_key_id.as_deref())?,
            secret_access_key: ask(
                terminal,
                &AWS_SECRET_ACCESS_KEY,
                presets.aws_secret_access_key.as_deref(),
            )?,
        },
        EmailMode::Sendgrid => EmailSettings::Sendgrid {
            api_key: ask(terminal, &SENDGRID_API_KEY, presets.sendgrid_api_key.as_deref())?,
        },
        EmailMode::Smtp => EmailSettings::Smtp {
            server: ask(terminal, &SMTP_SERVER, presets.smtp_server.as_deref())?,
            user: ask(terminal, &SMTP_USER, presets.smtp_user.as_deref())?,
            password: ask(terminal, &SMTP_PASS, presets.smtp_pass.as_deref())?,
        },
    })
}

/// What a finished install produced.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub options: InstallOptions,
    /// Files written, in order
    pub written: Vec<PathBuf>,
}

/// Asks the operator for everything the deployment needs and writes the
/// compose and unit files.
#[derive(Builder)]
pub struct Installer<'a> {
    terminal: &'a mut dyn Terminal,
    stylist: &'a dyn Stylist,
    #[builder(default)]
    presets: Presets,
    #[builder(default)]
    layout: InstallLayout,
    /// Directories searched for docker tools instead of `PATH`
    search_path: Option<OsString>,
}

impl Installer<'_> {
    pub fn run(self) -> Result<InstallReport> {
        let Self {
            terminal,
            stylist,
            presets,
            layout,
            search_path,
        } = self;
        let presets = presets.normalized();

        if env::consts::OS == "windows" {
            return Err(InstallError::UnsupportedPlatform("windows").into());
        }

        println!(
            "{} {} {}",
            stylist.paint("Welcome to the", Tone::Info),
            stylist.paint(PLATFORM_NAME, Tone::Emphasis),
            stylist.paint("setup script", Tone::Info)
        );

        let deps = Dependencies::discover(search_path.as_deref())?;
        let components = choose_components(terminal, &presets)?;

        let event_name = ask(terminal, &EVENT_NAME, presets.event_name.as_deref())?;
        let internal_name = validators::internal_name(&event_name);
        let user_email = ask(terminal, &USER_EMAIL, presets.email.as_deref())?;
        let api = ask_endpoint(terminal, &API_DOMAIN, presets.api_domain.as_deref())?;
        let site = ask_endpoint(terminal, &FRONTEND_URL, presets.frontend_url.as_deref())?;
        let andromeda_ip = ask(terminal, &ANDROMEDA_IP, presets.andromeda_ip.as_deref())?;

        let mode = choose_email_mode(terminal, presets.email_mode.as_deref())?;
        let email = collect_email_settings(terminal, mode, &presets)?;
        info!("email provider: {mode}");

        let options = InstallOptions {
            event_name,
            internal_name,
            components,
            user_email,
            api_domain: api.host().to_string(),
            frontend_url: site.host().to_string(),
            api_url: api.url(),
            site_url: site.url(),
            andromeda_ip,
            email,
            secret_key: generate_random_string(SECRET_KEY_LEN),
            andromeda_key: generate_random_string(SECRET_KEY_LEN),
            database_password: generate_random_string(DATABASE_PASSWORD_LEN),
            use_watchtower: presets.use_watchtower,
            compose_path: deps.compose,
        };

        println!(
            "{} {} {}",
            stylist.paint("Proceeding with installation of", Tone::Success),
            stylist.paint(&components.count().to_string(), Tone::Emphasis),
            stylist.paint("components.", Tone::Success)
        );
        ConfigView::new("Installation summary", summary(&options, &layout)).print(stylist);

        let progress = Progress::start("Writing configuration", stylist);
        let artifacts = render_all(&options, &layout).inspect_err(|e| {
            progress.fail(format!("{e:#}"));
        })?;
        for artifact in &artifacts {
            progress.step(artifact.path.display().to_string());
        }
        write_all(&artifacts).inspect_err(|e| {
            warn!("install stopped while writing files: {e:#}");
            progress.fail(format!("{e:#}"));
        })?;
        progress.done("Selected services successfully installed.");

        for line in next_steps(&options.internal_name, stylist) {
            println!("{line}");
        }

        Ok(InstallReport {
            written: artifacts.into_iter().map(|a| a.path).collect(),
            options,
        })
    }
}

fn summary(options: &InstallOptions, layout: &InstallLayout) -> Vec<ConfigEntry> {
    let mut entries = vec![
        ConfigEntry::new("Event", &options.event_name),
        ConfigEntry::new("Internal name", &options.internal_name),
        ConfigEntry::new("Services", options.components.labels().join(", ")),
        ConfigEntry::new("LetsEncrypt email", &options.user_email),
        ConfigEntry::new("API domain", &options.api_domain),
        ConfigEntry::new("Frontend URL", &options.site_url),
        ConfigEntry::new("Andromeda IP", &options.andromeda_ip),
        ConfigEntry::new("Email provider", options.email.mode().label()),
    ];

    match &options.email {
        EmailSettings::Aws {
            access_key_id,
            secret_access_key,
        } => {
            entries.push(ConfigEntry::new("AWS access key ID", access_key_id));
            entries.push(ConfigEntry::secret("AWS secret key", secret_access_key));
        }
        EmailSettings::Sendgrid { api_key } => {
            entries.push(ConfigEntry::secret("Sendgrid API key", api_key));
        }
        EmailSettings::Smtp {
            server,
            user,
            password,
        } => {
            entries.push(ConfigEntry::new("SMTP server", server));
            entries.push(ConfigEntry::new("SMTP user", user));
            entries.push(ConfigEntry::secret("SMTP password", password));
        }
    }

    entries.push(ConfigEntry::bool("Watchtower", options.use_watchtower));
    entries.push(ConfigEntry::new(
        "Compose file",
        layout.compose_file(&options.internal_name).display().to_string(),
    ));
    entries.push(ConfigEntry::new(
        "Unit file",
        layout.unit_file(&options.internal_name).display().to_string(),
    ));
    entries
}

/// What the operator still has to do once the files exist.
#[must_use]
pub fn next_steps(internal_name: &str, stylist: &dyn Stylist) -> Vec<String> {
    vec![
        stylist.paint(&"-".repeat(30), Tone::Rule),
        stylist.paint("What you still need to do (if you haven't already!):", Tone::Warning),
        format!(
            " -  {}",
            stylist.paint("Set your DNS so that the requisite domains point to this box", Tone::Success)
        ),
        format!(
            " -  {} {} {} {}",
            stylist.paint("Run", Tone::Success),
            stylist.paint(&format!("`systemctl enable --now ractf_{internal_name}`"), Tone::Warning),
            stylist.paint("to start the RACTF service on this box.", Tone::Success),
            stylist.paint("(This might take a while on first run!)", Tone::Error)
        ),
    ]
}

/// Lines shown when the install stops on `err`.
#[must_use]
pub fn describe_failure(err: &anyhow::Error, stylist: &dyn Stylist) -> Vec<String> {
    let lines = match err.downcast_ref::<InstallError>() {
        Some(e @ InstallError::UnsupportedPlatform(_)) => vec![
            e.to_string(),
            format!(
                "Maybe with your help, it could! Contributions to this script are welcome at {CONTRIBUTE_URL}"
            ),
        ],
        Some(e @ InstallError::MissingDependency { .. }) => vec![
            e.to_string(),
            "If it is, ensure its executable is in the current user's PATH.".to_string(),
        ],
        Some(e) => vec![e.to_string()],
        None => vec![format!("{err:#}")],
    };

    lines
        .iter()
        .map(|line| stylist.paint(line, Tone::Error))
        .collect()
}
