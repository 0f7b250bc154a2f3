// Shrthnd Controller
// Serialized per-event pipeline: suppression -> transcode -> buffer -> expand

use std::time::Duration;

use parking_lot::Mutex;

use crate::engine::{ExpansionEngine, ExpansionOutcome, DEFAULT_SUPPRESS_TIMEOUT};
use crate::inject::TextInjector;
use crate::key::KeyEvent;
use crate::layout::LayoutError;
use crate::profile::{ProfileError, ProfileStore};
use crate::transcode::LayoutTranscoder;
use crate::word::{is_boundary_char, WordBuffer};

/// What the controller did with one raw event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Processed {
    /// Event fell inside the suppression window and was dropped.
    Suppressed,
    /// The intended glyph was accumulated into the current word.
    Buffered(char),
    /// Printable but neither alphanumeric nor a boundary; no buffer change.
    Ignored,
    /// Backspace retracted one tracked character.
    Retracted,
    /// A word boundary flushed the buffer; the expansion decision attached.
    Boundary(ExpansionOutcome),
}

/// Session state guarded by the controller's mutex.
struct Session {
    buffer: WordBuffer,
    transcoder: LayoutTranscoder,
    engine: ExpansionEngine,
    profiles: ProfileStore,
}

impl Session {
    fn flush_boundary(&mut self, boundary: char) -> Processed {
        if boundary != ' ' {
            log::debug!("boundary {boundary:?} consumed; replacement space follows any expansion");
        }
        let word = self.buffer.on_boundary();
        let outcome =
            self.engine
                .on_word_boundary(&word, self.profiles.active_profile(), &self.transcoder);
        Processed::Boundary(outcome)
    }
}

/// Serializes the global hook's event stream through the core.
///
/// The hook may run on its own OS thread; all processing funnels through a
/// single mutex so no two key events are ever handled concurrently, and
/// profile or layout mutations can never be observed mid-decision. There is
/// nothing to stop or cancel here: detaching the event source is the host's
/// concern and simply means no more calls arrive.
pub struct ShorthandController {
    session: Mutex<Session>,
}

impl ShorthandController {
    /// Build a controller around the host-selected injector, with the
    /// default layout and built-in profiles.
    pub fn new(injector: Box<dyn TextInjector>) -> Self {
        Self::with_parts(
            injector,
            LayoutTranscoder::default(),
            ProfileStore::with_defaults(),
        )
    }

    /// Build a controller from preconfigured parts (loaded settings,
    /// persisted profiles).
    pub fn with_parts(
        injector: Box<dyn TextInjector>,
        transcoder: LayoutTranscoder,
        profiles: ProfileStore,
    ) -> Self {
        Self::with_suppress_timeout(injector, transcoder, profiles, DEFAULT_SUPPRESS_TIMEOUT)
    }

    /// Like [`with_parts`](Self::with_parts), with an explicit bound on
    /// the self-injection suppression window.
    pub fn with_suppress_timeout(
        injector: Box<dyn TextInjector>,
        transcoder: LayoutTranscoder,
        profiles: ProfileStore,
        suppress_timeout: Duration,
    ) -> Self {
        Self {
            session: Mutex::new(Session {
                buffer: WordBuffer::new(),
                transcoder,
                engine: ExpansionEngine::with_timeout(injector, suppress_timeout),
                profiles,
            }),
        }
    }

    /// Process one raw hook event, in arrival order.
    ///
    /// Suppression is checked before anything else: events generated by our
    /// own injection are dropped outright, never buffered or delayed.
    /// Boundary classification happens on the *intended* glyph, after
    /// transcoding, and strictly before any buffer mutation.
    pub fn on_key_event(&self, event: KeyEvent) -> Processed {
        let mut session = self.session.lock();

        if session.engine.consume_if_suppressed() {
            return Processed::Suppressed;
        }

        match event {
            KeyEvent::Backspace => {
                session.buffer.on_backspace();
                Processed::Retracted
            }
            KeyEvent::Space => session.flush_boundary(' '),
            KeyEvent::Enter => session.flush_boundary('\n'),
            KeyEvent::Char(c) => {
                let glyph = session.transcoder.transcode_char(c);
                if is_boundary_char(glyph) {
                    session.flush_boundary(glyph)
                } else if session.buffer.on_char(glyph) {
                    Processed::Buffered(glyph)
                } else {
                    Processed::Ignored
                }
            }
        }
    }

    /// Switch the active layout; takes effect for the next event.
    pub fn set_layout(&self, name: &str) -> Result<(), LayoutError> {
        self.session.lock().transcoder.set_layout(name)
    }

    /// Name of the active layout.
    pub fn layout_name(&self) -> &'static str {
        self.session.lock().transcoder.layout_name()
    }

    /// Create a new empty profile and activate it.
    pub fn create_profile(&self, name: &str) -> Result<(), ProfileError> {
        let mut session = self.session.lock();
        session.profiles.create_profile(name)?;
        session.buffer.clear();
        Ok(())
    }

    /// Switch profiles (unknown names fall back to Default). The word
    /// buffer resets: a half-typed word must not match under a dictionary
    /// it was not typed against.
    pub fn switch_profile(&self, name: &str) {
        let mut session = self.session.lock();
        session.profiles.switch_profile(name);
        session.buffer.clear();
    }

    /// Delete a profile.
    pub fn delete_profile(&self, name: &str) -> Result<(), ProfileError> {
        self.session.lock().profiles.delete_profile(name)
    }

    /// Name of the active profile.
    pub fn active_profile_name(&self) -> String {
        self.session.lock().profiles.active_name().to_string()
    }

    /// All profile names.
    pub fn profile_names(&self) -> Vec<String> {
        self.session
            .lock()
            .profiles
            .profile_names()
            .map(str::to_string)
            .collect()
    }

    /// Add or replace a shorthand in the active profile.
    pub fn add_shorthand(&self, shorthand: &str, expansion: &str) {
        self.session.lock().profiles.add_shorthand(shorthand, expansion);
    }

    /// Remove a shorthand from the active profile.
    pub fn remove_shorthand(&self, shorthand: &str) -> Option<String> {
        self.session.lock().profiles.remove_shorthand(shorthand)
    }

    /// The word tracked so far (diagnostics and tests).
    pub fn current_word(&self) -> String {
        self.session.lock().buffer.as_str().to_string()
    }

    /// Whether the self-injection suppression window is armed.
    pub fn suppression_active(&self) -> bool {
        self.session.lock().engine.suppression_active()
    }
}
