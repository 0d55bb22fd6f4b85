//! Dependency checks, the question flow and the files it produces.

mod artifacts;
mod deps;
mod flow;

pub use artifacts::{
    Artifact, COMPOSE_TEMPLATE, InstallLayout, UNIT_TEMPLATE, render_all, write_all,
};
pub use deps::{COMPOSE_EXECUTABLE, DOCKER_EXECUTABLE, Dependencies, find_executable};
pub use flow::{
    EMAIL_PROVIDER_LABEL, InstallReport, Installer, SERVICES_LABEL, describe_failure, next_steps,
};
