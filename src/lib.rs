//! # ignore-video-codecs
//!
//! Library-management plugin that decides, per candidate file, whether any
//! of its video streams still needs processing or whether every one of them
//! uses a codec the user chose to skip.
//!
//! The host supplies the two collaborators (a [`Prober`] for stream
//! metadata, a [`SettingsStore`] for the persisted configuration) and calls
//! [`on_library_management_file_test`] once per file during a library scan.
//! Image pseudo-video codecs (cover art and embedded thumbnails that probers
//! report as video streams) are always skipped, regardless of configuration.
//!
//! ## Overview
//!
//! - [`on_library_management_file_test`] -- the hook the host invokes; it
//!   rewrites the record's queue flag and returns a [`Decision`].
//! - [`LibraryFileTest`] -- the mutable record threaded through the hook.
//! - [`CodecExclusionFilter`] / [`StreamTest`] -- per-stream classification
//!   against the image-codec table and the user's [`ExclusionList`].
//! - [`Prober`] / [`ProbeReport`] -- the probing contract and its result.
//! - [`PluginSettings`] -- typed view of the persisted settings, with the
//!   form-field metadata a settings UI needs to render them.

pub mod codecs;
pub mod error;
pub mod filter;
pub mod probe;
pub mod runner;
pub mod settings;

// Re-export the most commonly used items at the crate root.
pub use codecs::{image_video_codecs, is_image_video_codec};
pub use error::{Error, Result};
pub use filter::{streams_need_processing, CodecExclusionFilter, ExclusionList, StreamTest};
pub use probe::{ProbeReport, Prober, Stream, StreamKind};
pub use runner::{on_library_management_file_test, Decision, Issue, LibraryFileTest};
pub use settings::{
    form_fields, FieldKind, FormField, InMemorySettings, PluginSettings, SettingsStore,
    EXCLUDED_CODECS_KEY,
};
