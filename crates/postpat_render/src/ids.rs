//! Identifier generation for rendered scripts and variables.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Source of fresh identifiers.
///
/// The renderer asks for one id per event script and one per variable.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable ids (`<prefix>-0`, `<prefix>-1`, ...), for tests and
/// reproducible output.
#[derive(Debug, Default)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(0),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}
