//! Progress notification sink
//!
//! The pipeline reports decompression completions, batch commits and per-file
//! outcomes as human-readable messages through a [`ProgressSink`]. The sink is
//! injected so library callers and tests can capture or discard the stream.

/// Receives human-readable progress notifications from the pipeline
pub trait ProgressSink {
    /// Deliver one progress message
    fn notify(&self, message: &str);
}

/// Sink that prints timestamped messages to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for StdoutSink {
    fn notify(&self, message: &str) {
        let timestamp = chrono::Local::now().format("[%H:%M:%S]");
        println!("{timestamp} {message}");
    }
}

/// Sink that discards all messages
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Create a new null sink
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for NullSink {
    fn notify(&self, _message: &str) {}
}

/// Sink that collects messages in memory, for assertions in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CollectingSink {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl CollectingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ProgressSink for CollectingSink {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
