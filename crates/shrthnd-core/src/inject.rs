// Shrthnd Text Injection Interface
// Two-operation capability contract for platform-specific edit backends

/// Capability interface for the platform primitive that edits the
/// foreground application.
///
/// Selected once at startup by the host environment and injected into the
/// core; the core stays platform-agnostic. Calls are best-effort and
/// ordered: a `delete` fully completes before the following `insert` is
/// observed by the target. Implementations may synthesize keyboard events
/// that get re-delivered to the same global hook, which is exactly what
/// the suppression window exists to absorb.
pub trait TextInjector: Send {
    /// Retract `count` characters at the caret.
    fn delete(&mut self, count: usize);

    /// Type `text` at the caret.
    fn insert(&mut self, text: &str);
}

/// Diagnostic injector that logs edit operations instead of performing
/// them. Useful when running without a platform backend.
#[derive(Debug, Default)]
pub struct LogInjector;

impl TextInjector for LogInjector {
    fn delete(&mut self, count: usize) {
        log::info!("inject: delete {count} chars");
    }

    fn insert(&mut self, text: &str) {
        log::info!("inject: insert {text:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_injector_is_object_safe() {
        let mut injector: Box<dyn TextInjector> = Box::new(LogInjector);
        injector.delete(3);
        injector.insert("by the way ");
    }
}
