// Shrthnd Expansion Engine
// Word-boundary dictionary matching and delete+insert edit computation

use std::time::Duration;

use crate::inject::TextInjector;
use crate::profile::Profile;
use crate::suppress::Suppressor;
use crate::transcode::LayoutTranscoder;

/// Fallback bound on the suppression window when the injector gives no
/// completion signal. Conservative: long enough for a queued injector to
/// drain a typical expansion, short enough that a lost callback cannot
/// swallow real typing for long.
pub const DEFAULT_SUPPRESS_TIMEOUT: Duration = Duration::from_millis(200);

/// What a word-boundary check decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// Word was empty or not in the active dictionary; nothing was emitted.
    Miss,
    /// Shorthand replaced: `deleted` characters retracted, `inserted`
    /// text emitted in their place.
    Expanded { deleted: usize, inserted: String },
}

/// Decides on each completed word whether to replace it, and issues the
/// edit through the injected [`TextInjector`].
///
/// The engine owns the [`Suppressor`]: every expansion arms it for the
/// synthetic events the injector is about to generate, so the hook that
/// feeds this engine never re-processes its own output.
pub struct ExpansionEngine {
    injector: Box<dyn TextInjector>,
    suppressor: Suppressor,
    suppress_timeout: Duration,
}

impl ExpansionEngine {
    pub fn new(injector: Box<dyn TextInjector>) -> Self {
        Self::with_timeout(injector, DEFAULT_SUPPRESS_TIMEOUT)
    }

    /// Create an engine with an explicit suppression timeout bound.
    pub fn with_timeout(injector: Box<dyn TextInjector>, suppress_timeout: Duration) -> Self {
        Self {
            injector,
            suppressor: Suppressor::new(),
            suppress_timeout,
        }
    }

    /// Consume one incoming event if a suppression window is armed.
    /// Must be called before any other per-event processing.
    pub fn consume_if_suppressed(&mut self) -> bool {
        self.suppressor.check_and_consume()
    }

    /// Whether the suppression window is currently armed.
    pub fn suppression_active(&self) -> bool {
        self.suppressor.is_active()
    }

    /// Disarm the suppression window (event source detached).
    pub fn reset_suppression(&mut self) {
        self.suppressor.reset();
    }

    /// A word boundary fired: decide and, on a match, emit the edit.
    ///
    /// `profile` and `transcoder` are the caller's consistent snapshot for
    /// this call; the engine reads each exactly once per decision.
    ///
    /// On a match the typed shorthand plus the boundary key that triggered
    /// it are retracted (the boundary was already physically emitted to the
    /// foreground application), then the transcoded expansion and a single
    /// replacement space are inserted.
    pub fn on_word_boundary(
        &mut self,
        word: &str,
        profile: &Profile,
        transcoder: &LayoutTranscoder,
    ) -> ExpansionOutcome {
        if word.is_empty() {
            return ExpansionOutcome::Miss;
        }
        let Some(expansion) = profile.get(word) else {
            log::debug!("no expansion for {word:?}");
            return ExpansionOutcome::Miss;
        };

        let inserted = {
            let mut text = transcoder.transcode_text(expansion);
            text.push(' ');
            text
        };
        let deleted = word.chars().count() + 1;

        log::debug!(
            "expanding {word:?} -> {inserted:?} (retracting {deleted} chars, layout {})",
            transcoder.layout_name()
        );

        // Arm before touching the injector: a synchronous injector may
        // re-enter the hook while delete/insert are still on the stack.
        let synthetic_events = deleted + inserted.chars().count();
        self.suppressor.arm(synthetic_events, self.suppress_timeout);

        self.injector.delete(deleted);
        self.injector.insert(&inserted);

        ExpansionOutcome::Expanded { deleted, inserted }
    }
}
