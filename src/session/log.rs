//! Session operation log.
//!
//! Every top-level operation reports its outcome here: counts, no-op
//! notices, per-item lineage failures. Lines accumulate in memory for the
//! host UI and are mirrored through `tracing`.

/// In-memory operation log.
#[derive(Clone, Debug, Default)]
pub struct SessionLog {
    lines: Vec<String>,
}

impl SessionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and mirror it through `tracing`.
    pub fn record(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::info!("{msg}");
        self.lines.push(msg);
    }

    /// The recorded lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Discard all recorded lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
