//! Plugin settings and the host settings-store contract.
//!
//! The host persists plugin settings as raw strings keyed by setting name
//! and renders the declared form fields in its own UI. This module owns the
//! schema side only: the key, its default value, and the field metadata.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Settings key holding the comma-separated list of codecs to skip.
pub const EXCLUDED_CODECS_KEY: &str = "excluded_codecs";

fn default_excluded_codecs() -> String {
    "h264,h265".to_string()
}

/// Typed view of the plugin's persisted settings.
///
/// Constructed fresh for every file evaluation; never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Comma-separated video codec names to skip. Entries are trimmed and
    /// compared case-insensitively; see
    /// [`ExclusionList::parse`](crate::filter::ExclusionList::parse).
    #[serde(default = "default_excluded_codecs")]
    pub excluded_codecs: String,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            excluded_codecs: default_excluded_codecs(),
        }
    }
}

impl PluginSettings {
    /// Read the plugin's settings out of the host's store, falling back to
    /// the default for a missing key.
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        Self {
            excluded_codecs: store
                .get(EXCLUDED_CODECS_KEY)
                .unwrap_or_else(default_excluded_codecs),
        }
    }
}

/// Read access to the host's persisted plugin settings.
pub trait SettingsStore: Send + Sync {
    /// Fetch the raw persisted value for a settings key, if present.
    fn get(&self, key: &str) -> Option<String>;
}

/// `HashMap`-backed store for embedding hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    values: HashMap<String, String>,
}

impl InMemorySettings {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw value for a settings key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

// ---------------------------------------------------------------------------
// Settings form metadata
// ---------------------------------------------------------------------------

/// Input widget the host should render for a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    TextArea,
}

/// Declaration of one settings field for the host's settings UI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormField {
    /// Settings key the field edits.
    pub key: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
    /// Widget to render.
    pub kind: FieldKind,
}

const FORM_FIELDS: &[FormField] = &[FormField {
    key: EXCLUDED_CODECS_KEY,
    label: "Video codecs to skip",
    kind: FieldKind::TextArea,
}];

/// Get the settings fields this plugin asks the host to render.
#[must_use]
pub fn form_fields() -> &'static [FormField] {
    FORM_FIELDS
}
