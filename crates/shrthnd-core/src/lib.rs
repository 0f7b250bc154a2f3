// Shrthnd Core Library
// Layout transcoding and shorthand expansion state machine

pub mod controller;
pub mod detect;
pub mod engine;
pub mod inject;
pub mod key;
pub mod layout;
pub mod profile;
pub mod settings;
pub mod suppress;
pub mod transcode;
pub mod word;

pub use controller::{Processed, ShorthandController};
pub use engine::{ExpansionEngine, ExpansionOutcome, DEFAULT_SUPPRESS_TIMEOUT};
pub use inject::{LogInjector, TextInjector};
pub use key::{KeyEvent, KeyPosition, CANONICAL_POSITIONS};
pub use layout::{available_layouts, LayoutError, LayoutTable, DEFAULT_LAYOUT};
pub use profile::{Profile, ProfileError, ProfileStore, DEFAULT_PROFILE};
pub use settings::{Settings, SettingsError};
pub use suppress::Suppressor;
pub use transcode::LayoutTranscoder;
pub use word::{is_boundary_char, BufferState, WordBuffer, BOUNDARY_CHARS};
