use crate::artifacts::diff::options::DiffOptions;
use std::cell::{RefCell, RefMut};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Front object for comparisons: settings plus the output sink
pub struct DiffChecker {
    options: DiffOptions,
    timeout: Duration,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl DiffChecker {
    pub fn new(options: DiffOptions, writer: Box<dyn std::io::Write>) -> Self {
        DiffChecker {
            options,
            timeout: DEFAULT_TIMEOUT,
            writer: RefCell::new(writer),
        }
    }

    /// Wall-clock ceiling for a single alignment
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
