use services::provisioner::{required_capabilities, ManualInstaller, SystemProbe};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod modals;
mod state;
mod types;
mod utils;
mod widgets;
mod window;

use bootstrap::Bootstrap;
use window::NativeLauncher;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let interrupt = bootstrap::install_interrupt_handler();

    let root = utils::app_root();
    let working_dir = std::env::current_dir().unwrap_or_else(|_| root.clone());
    tracing::debug!(root = %root.display(), cwd = %working_dir.display(), "starting");

    let bootstrap = Bootstrap {
        root,
        requirements: required_capabilities(),
        probe: &SystemProbe,
        installer: &ManualInstaller,
        interrupt,
        on_phase: None,
    };
    let mut launcher = NativeLauncher::new(working_dir);

    ExitCode::from(bootstrap.run(&mut launcher))
}
