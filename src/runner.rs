//! The library-management file test hook.
//!
//! The host calls [`on_library_management_file_test`] once per candidate
//! file during a library scan. The hook probes the file through the
//! host-supplied [`Prober`], classifies its video streams against the
//! configured exclusion list, and rewrites the record's queue flag.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::filter::{streams_need_processing, CodecExclusionFilter, ExclusionList};
use crate::probe::Prober;
use crate::settings::{PluginSettings, SettingsStore};

// ---------------------------------------------------------------------------
// Host record
// ---------------------------------------------------------------------------

/// One issue recorded by an earlier pipeline stage.
///
/// Carried through the record untouched; this hook never reads or appends
/// issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub message: String,
}

/// The mutable record the host threads through every file-test hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryFileTest {
    /// Absolute path of the candidate file.
    pub path: PathBuf,
    /// Issues raised by earlier stages. Passed through as-is.
    #[serde(default)]
    pub issues: Vec<Issue>,
    /// Whether the file should be added to the host's pending-task queue.
    #[serde(default)]
    pub add_file_to_pending_tasks: bool,
}

impl LibraryFileTest {
    /// Fresh record for `path`: no issues, not queued.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            issues: Vec::new(),
            add_file_to_pending_tasks: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Per-file outcome of the test hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// At least one video stream needs processing; the file was queued.
    Queue,
    /// Every video stream is excluded; the file was marked not to queue.
    Skip,
    /// The file could not be probed; the record was left untouched and the
    /// prior stage's verdict stands.
    Abstain,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Queue => write!(f, "queue"),
            Decision::Skip => write!(f, "skip"),
            Decision::Abstain => write!(f, "abstain"),
        }
    }
}

// ---------------------------------------------------------------------------
// Hook
// ---------------------------------------------------------------------------

/// Test one library file and rewrite its queue flag.
///
/// Probes `data.path` through `prober`, builds the exclusion list from the
/// persisted settings in `store`, and checks the file's video streams. The
/// flag is written in both directions: `true` when any video stream still
/// needs processing, `false` when every one is excluded, so a stale verdict
/// from an earlier scan cannot leak through. When the prober does not
/// support the file or the probe fails, the record is left untouched and
/// the hook abstains.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use ignore_video_codecs::{
///     on_library_management_file_test, Decision, InMemorySettings, LibraryFileTest,
///     ProbeReport, Prober, Result, Stream, StreamKind,
/// };
///
/// struct FixedProber(ProbeReport);
///
/// impl Prober for FixedProber {
///     fn name(&self) -> &'static str {
///         "fixed"
///     }
///
///     fn supports(&self, _path: &Path) -> bool {
///         true
///     }
///
///     fn probe(&self, _path: &Path) -> Result<ProbeReport> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let prober = FixedProber(ProbeReport::new(vec![Stream {
///     index: 0,
///     kind: StreamKind::Video,
///     codec_name: Some("av1".to_string()),
/// }]));
/// let store = InMemorySettings::new();
///
/// // av1 is not on the default "h264,h265" list, so the file is queued.
/// let mut data = LibraryFileTest::new("/library/show.mkv");
/// let decision = on_library_management_file_test(&mut data, &prober, &store);
/// assert_eq!(decision, Decision::Queue);
/// assert!(data.add_file_to_pending_tasks);
/// ```
pub fn on_library_management_file_test(
    data: &mut LibraryFileTest,
    prober: &dyn Prober,
    store: &dyn SettingsStore,
) -> Decision {
    if !prober.supports(&data.path) {
        tracing::debug!(
            prober = prober.name(),
            path = %data.path.display(),
            "file type not supported, abstaining"
        );
        return Decision::Abstain;
    }

    let report = match prober.probe(&data.path) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(
                prober = prober.name(),
                path = %data.path.display(),
                error = %e,
                "probe failed, abstaining"
            );
            return Decision::Abstain;
        }
    };

    let settings = PluginSettings::from_store(store);
    let filter = CodecExclusionFilter::new(ExclusionList::parse(&settings.excluded_codecs));

    if streams_need_processing(&filter, report.video_streams()) {
        data.add_file_to_pending_tasks = true;
        tracing::debug!(
            path = %data.path.display(),
            "video codecs require processing, file queued"
        );
        Decision::Queue
    } else {
        data.add_file_to_pending_tasks = false;
        tracing::debug!(
            path = %data.path.display(),
            "no video codec requires processing, file skipped"
        );
        Decision::Skip
    }
}
