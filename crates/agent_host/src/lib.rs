//! Agent Host - the command delegate behind the chat panel
//!
//! The window only knows the [`CommandDelegate`] capability: text in, text or
//! a typed failure out. [`EchoDelegate`] is the placeholder implementation
//! used until a real agent is plugged in.

/// Failure reported by a delegate.
#[derive(Debug, thiserror::Error)]
pub enum DelegateError {
    #[error("Agent unavailable: {0}")]
    Unavailable(String),

    #[error("Processing failed: {0}")]
    Failed(#[from] anyhow::Error),
}

impl DelegateError {
    /// Short type name shown in transcript error lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            DelegateError::Unavailable(_) => "Unavailable",
            DelegateError::Failed(_) => "Failed",
        }
    }
}

/// Synchronous text-to-text processing invoked once per chat message.
pub trait CommandDelegate {
    fn process(&self, command: &str) -> Result<String, DelegateError>;
}

/// Stateless placeholder that reports back what it received.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoDelegate;

impl CommandDelegate for EchoDelegate {
    fn process(&self, command: &str) -> Result<String, DelegateError> {
        tracing::debug!(len = command.len(), "echo delegate received command");
        Ok(format!("[agent stub] Received: {}", command))
    }
}

impl<D: CommandDelegate + ?Sized> CommandDelegate for Box<D> {
    fn process(&self, command: &str) -> Result<String, DelegateError> {
        (**self).process(command)
    }
}
