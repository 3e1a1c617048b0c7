//! Ordered startup: dependencies, directories, config, window.
//!
//! Every failure carries an [`ErrorKind`] chosen where it happened. The
//! top level prints one remediation hint for that kind and maps the outcome
//! to a process exit code.

use services::provisioner::{
    ensure_config, ensure_dependencies, ensure_directories, load_config, ConfigStatus,
    DependencyStatus, Installer, Probe, ProvisionError, Requirement,
};
use shared::errors::ErrorKind;
use shared::settings::AppConfig;
use std::any::Any;
use std::error::Error as _;
use std::fmt::Write as _;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const RULE: &str = "======================================================================";

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The user asked to stop. Not a failure.
    #[error("Interrupted by user")]
    Interrupted,

    #[error("Missing runtime dependencies: {}", .0.join("; "))]
    Dependencies(Vec<String>),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Window construction, display or event loop failure
    #[error("Window failed: {0}")]
    Window(String),

    #[error("Panicked: {0}")]
    Panic(String),
}

impl BootstrapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BootstrapError::Dependencies(_) => ErrorKind::DependencyMissing,
            BootstrapError::Provision(e) => e.kind(),
            BootstrapError::Window(_) => ErrorKind::UiFramework,
            BootstrapError::Interrupted | BootstrapError::Panic(_) => ErrorKind::Unclassified,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            BootstrapError::Interrupted => "Interrupted",
            BootstrapError::Dependencies(_) => "DependencyError",
            BootstrapError::Provision(_) => "ProvisionError",
            BootstrapError::Window(_) => "WindowError",
            BootstrapError::Panic(_) => "Panic",
        }
    }
}

/// Startup phases, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dependencies,
    Directories,
    Config,
    Window,
}

impl Phase {
    pub fn step(self) -> u8 {
        match self {
            Phase::Dependencies => 1,
            Phase::Directories => 2,
            Phase::Config => 3,
            Phase::Window => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Dependencies => "Checking dependencies...",
            Phase::Directories => "Verifying directory structure...",
            Phase::Config => "Checking configuration...",
            Phase::Window => "Launching main window...",
        }
    }
}

/// Flag raised by the first Ctrl-C. A second Ctrl-C, arriving while the
/// flag is already set, terminates the process with the default action.
pub fn install_interrupt_handler() -> Arc<AtomicBool> {
    use signal_hook::consts::SIGINT;

    let interrupt = Arc::new(AtomicBool::new(false));
    let registered =
        signal_hook::flag::register_conditional_shutdown(SIGINT, 1, Arc::clone(&interrupt))
            .and_then(|_| signal_hook::flag::register(SIGINT, Arc::clone(&interrupt)));
    if let Err(e) = registered {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }
    interrupt
}

/// Builds the main window and runs its event loop until it closes.
pub trait Launcher {
    fn launch(
        &mut self,
        config: &AppConfig,
        interrupt: Arc<AtomicBool>,
    ) -> Result<(), BootstrapError>;
}

pub struct Bootstrap<'a> {
    /// Directory holding `config.json` and the working directories
    pub root: PathBuf,
    pub requirements: Vec<Requirement>,
    pub probe: &'a dyn Probe,
    pub installer: &'a dyn Installer,
    /// Set by the SIGINT handler
    pub interrupt: Arc<AtomicBool>,
    /// Called as each phase starts, after its header is printed
    pub on_phase: Option<&'a dyn Fn(Phase)>,
}

impl Bootstrap<'_> {
    /// Run the whole sequence and return the process exit code.
    pub fn run(&self, launcher: &mut dyn Launcher) -> u8 {
        print_banner();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.sequence(launcher)))
            .unwrap_or_else(|payload| Err(BootstrapError::Panic(panic_message(payload.as_ref()))));

        match result {
            Ok(()) => EXIT_OK,
            Err(BootstrapError::Interrupted) => {
                println!();
                println!("Interrupted by user");
                tracing::info!("startup interrupted by user");
                EXIT_OK
            }
            Err(e) => {
                tracing::error!(kind = ?e.kind(), error = %e, "startup failed");
                eprintln!("{}", render_report(&e));
                EXIT_FAILURE
            }
        }
    }

    fn sequence(&self, launcher: &mut dyn Launcher) -> Result<(), BootstrapError> {
        self.checkpoint()?;
        self.announce(Phase::Dependencies);
        let report = ensure_dependencies(&self.requirements, self.probe, self.installer);
        for name in report.installed() {
            println!("Installed {}", name);
        }
        if !report.is_satisfied() {
            let failures = report
                .entries
                .iter()
                .filter_map(|(_, status)| match status {
                    DependencyStatus::Failed(reason) => Some(reason.clone()),
                    _ => None,
                })
                .collect();
            return Err(BootstrapError::Dependencies(failures));
        }

        self.checkpoint()?;
        self.announce(Phase::Directories);
        ensure_directories(&self.root)?;
        println!("Directory structure verified");

        self.checkpoint()?;
        self.announce(Phase::Config);
        if ensure_config(&self.root)? == ConfigStatus::Created {
            println!("Created default config.json");
        }
        let config = load_config(&self.root)?;

        self.checkpoint()?;
        self.announce(Phase::Window);
        println!();
        launcher.launch(&config, Arc::clone(&self.interrupt))?;
        self.checkpoint()
    }

    fn announce(&self, phase: Phase) {
        println!("[{}/4] {}", phase.step(), phase.label());
        if let Some(hook) = self.on_phase {
            hook(phase);
        }
    }

    fn checkpoint(&self) -> Result<(), BootstrapError> {
        if self.interrupt.load(Ordering::SeqCst) {
            Err(BootstrapError::Interrupted)
        } else {
            Ok(())
        }
    }
}

fn print_banner() {
    println!("{}", RULE);
    println!("VENALLA AI AGENT");
    println!("   Desktop assistant with guided startup recovery");
    println!("{}", RULE);
    println!();
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Failure report: type and message, cause chain, one suggestion.
pub fn render_report(err: &BootstrapError) -> String {
    let kind = err.kind();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "CRITICAL ERROR");
    let _ = writeln!(out, "   {}: {}", err.type_name(), err);

    let mut source = err.source();
    if source.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Caused by:");
    }
    while let Some(cause) = source {
        let _ = writeln!(out, "   {}", cause);
        source = cause.source();
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "ERROR RECOVERY SUGGESTIONS:");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "• {}", kind.label());
    let _ = writeln!(out, "  {}", kind.remediation());
    let _ = writeln!(out);
    let _ = writeln!(out, "If the problem persists, check:");
    let _ = writeln!(out, "• All files are in correct locations");
    let _ = writeln!(out, "• config.json is valid JSON");
    let _ = writeln!(out, "• RUST_LOG=debug for detailed logs");
    let _ = write!(out, "{}", RULE);
    out
}
