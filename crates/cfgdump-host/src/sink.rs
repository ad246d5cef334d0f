//! Warning sinks
//!
//! Dump failures are advisory: they are reported here and the caller
//! carries on.

use std::error::Error;
use std::sync::{Arc, Mutex};

/// Receives a fixed message prefix and the underlying cause.
pub trait WarningSink {
    fn warn(&self, message: &str, cause: &dyn Error);
}

/// Emits warnings as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, message: &str, cause: &dyn Error) {
        tracing::warn!(target: "cfgdump", error = %cause, "{}", message);
    }
}

/// A recorded warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub cause: String,
}

/// Keeps every warning in memory; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<Warning>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the warnings recorded so far.
    pub fn warnings(&self) -> Vec<Warning> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(_) => Vec::new(),
        }
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, message: &str, cause: &dyn Error) {
        if let Ok(mut log) = self.log.lock() {
            log.push(Warning {
                message: message.to_string(),
                cause: cause.to_string(),
            });
        }
    }
}

impl<T: WarningSink + ?Sized> WarningSink for &T {
    fn warn(&self, message: &str, cause: &dyn Error) {
        (**self).warn(message, cause)
    }
}
