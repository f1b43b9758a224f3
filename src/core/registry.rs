//! Logger name registry

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

/// Hands out logger names that are unique within the registry.
///
/// A requested name that is already taken gets `_1`, `_2`, ... appended until
/// it is free. Names are released with [`LoggerRegistry::release`], which a
/// [`Logger`](super::Logger) does when it is dropped.
///
/// # Examples
///
/// ```
/// use section_logger::LoggerRegistry;
///
/// let registry = LoggerRegistry::new();
/// assert_eq!(registry.register("svc"), "svc");
/// assert_eq!(registry.register("svc"), "svc_1");
/// assert_eq!(registry.register("svc"), "svc_2");
/// ```
#[derive(Debug, Default)]
pub struct LoggerRegistry {
    names: Mutex<HashSet<String>>,
}

static GLOBAL: OnceLock<Arc<LoggerRegistry>> = OnceLock::new();

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by constructors that take no registry.
    pub fn global() -> Arc<LoggerRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LoggerRegistry::new())))
    }

    /// Reserve `base`, or the first free `base_N`, and return the reserved name.
    pub fn register(&self, base: &str) -> String {
        let mut names = self.names.lock();
        if names.insert(base.to_string()) {
            return base.to_string();
        }

        let mut suffix = 1usize;
        loop {
            let candidate = format!("{}_{}", base, suffix);
            if names.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Free a name; returns false if it was not registered.
    pub fn release(&self, name: &str) -> bool {
        self.names.lock().remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.lock().contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.lock().is_empty()
    }
}
