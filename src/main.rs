use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use ractf_install::{
    InstallLayout, Installer, Logging, PROJECT_NAME, PROJECT_VERSION, Presets, describe_failure,
    tui::{Colored, Plain, Stylist, Tone, TuiTerminal},
    version_line,
};

/// Sets up a RACTF deployment: asks a few questions, then writes the
/// docker-compose file and the systemd unit that runs it.
#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(flatten)]
    presets: Presets,

    /// TOML file with answers; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// Write files under this directory instead of /
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_verbose(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

fn run(args: UserArgs, stylist: &dyn Stylist) -> Result<()> {
    let presets = match &args.answers {
        Some(path) => args.presets.merge(Presets::load(path)?),
        None => args.presets,
    };

    let layout = match args.root {
        Some(root) => InstallLayout::builder().root(root).build(),
        None => InstallLayout::default(),
    };

    let mut terminal = TuiTerminal;
    let report = Installer::builder()
        .terminal(&mut terminal)
        .stylist(stylist)
        .presets(presets)
        .layout(layout)
        .build()
        .run()?;

    info!(
        "install of {} finished, {} files written",
        report.options.internal_name,
        report.written.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = UserArgs::parse();

    let stylist: &dyn Stylist = if args.no_color { &Plain } else { &Colored };

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{}", stylist.paint(&format!("{e:#}"), Tone::Warning));
    }
    info!("starting {}", version_line());

    match run(args, stylist) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("install failed: {e:#}");
            for line in describe_failure(&e, stylist) {
                println!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}
