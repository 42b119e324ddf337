//! User-facing notifications emitted by an export.

use serde::Serialize;

/// Kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Progress, e.g. "Exporting ... to PDF".
    Info,
    /// The export finished, with or without warnings.
    Success,
    /// Converter diagnostics accompanying a success.
    Warning,
    /// The export was aborted.
    Failure,
    /// Echo of the converter command line.
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Receives notifications (allows capturing them in tests).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal.
///
/// Info, success and command lines go to stdout; warnings and failures go
/// to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info | NotificationKind::Success | NotificationKind::Command => {
                println!("{}", notification.message)
            }
            NotificationKind::Warning | NotificationKind::Failure => {
                eprintln!("{}", notification.message)
            }
        }
    }
}
