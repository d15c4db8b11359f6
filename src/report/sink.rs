//! Destinations for report text

use std::sync::Mutex;

/// Write-only destination for rendered report messages
pub trait LogSink: Send + Sync {
    fn write(&self, message: &str);
}

/// Emits every message as an `info` event
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Collects messages in memory
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were written
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// All messages joined with newlines
    pub fn text(&self) -> String {
        self.messages().join("\n")
    }
}

impl LogSink for MemorySink {
    fn write(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
