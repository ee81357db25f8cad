//! The codec exclusion filter.
//!
//! A pure, single-pass classification over a file's video streams: image
//! pseudo-video codecs are always excluded, codecs on the user's exclusion
//! list are excluded, everything else needs processing.

use crate::codecs::is_image_video_codec;
use crate::error::{Error, Result};
use crate::probe::Stream;

// ---------------------------------------------------------------------------
// ExclusionList
// ---------------------------------------------------------------------------

/// User-configured set of codec names whose presence should cause a file to
/// be skipped.
///
/// Entries are stored lower-cased, in order of first appearance, without
/// duplicates. Built fresh from the persisted settings string on every
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    codecs: Vec<String>,
}

impl ExclusionList {
    /// Parse the persisted comma-separated form.
    ///
    /// Entries are trimmed and lower-cased; empty entries and duplicates
    /// are dropped, so malformed input degrades to a smaller list rather
    /// than an error.
    pub fn parse(raw: &str) -> Self {
        let mut codecs = Vec::new();
        for entry in raw.split(',') {
            let codec = entry.trim().to_lowercase();
            if !codec.is_empty() && !codecs.contains(&codec) {
                codecs.push(codec);
            }
        }
        Self { codecs }
    }

    /// Check whether a codec name is on the list. Case-insensitive.
    pub fn contains(&self, codec: &str) -> bool {
        self.codecs.contains(&codec.to_lowercase())
    }

    /// Number of configured codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Whether no codecs are configured.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// The configured codec names, lower-cased, in configuration order.
    pub fn as_slice(&self) -> &[String] {
        &self.codecs
    }
}

// ---------------------------------------------------------------------------
// StreamTest / CodecExclusionFilter
// ---------------------------------------------------------------------------

/// Capability to decide whether a single stream needs processing.
pub trait StreamTest {
    /// Test one stream.
    ///
    /// `Ok(true)` means the stream is eligible for processing, `Ok(false)`
    /// that it is excluded. Fails with [`Error::MissingCodecName`] when the
    /// prober reported no codec identifier for the stream.
    fn stream_needs_processing(&self, stream: &Stream) -> Result<bool>;
}

/// Stream test that excludes image pseudo-video codecs and the codecs on a
/// user-configured [`ExclusionList`].
#[derive(Debug, Clone, Default)]
pub struct CodecExclusionFilter {
    excluded: ExclusionList,
}

impl CodecExclusionFilter {
    /// Create a filter over the given exclusion list.
    pub fn new(excluded: ExclusionList) -> Self {
        Self { excluded }
    }

    /// The exclusion list this filter consults.
    pub fn excluded(&self) -> &ExclusionList {
        &self.excluded
    }
}

impl StreamTest for CodecExclusionFilter {
    fn stream_needs_processing(&self, stream: &Stream) -> Result<bool> {
        let codec = stream
            .codec_name
            .as_deref()
            .ok_or(Error::MissingCodecName {
                index: stream.index,
            })?;

        // The fixed image table wins over user configuration.
        if is_image_video_codec(codec) {
            return Ok(false);
        }
        if self.excluded.contains(codec) {
            return Ok(false);
        }
        Ok(true)
    }
}

/// Check whether any stream in `streams` needs processing.
///
/// The caller restricts the input to the stream kinds it cares about (the
/// library file test passes video streams only). A stream the test cannot
/// classify is logged and counted as needing processing, so a file with
/// incomplete probe data is queued rather than silently dropped. An empty
/// input needs no processing.
pub fn streams_need_processing<'a>(
    test: &dyn StreamTest,
    streams: impl IntoIterator<Item = &'a Stream>,
) -> bool {
    streams.into_iter().any(|stream| {
        test.stream_needs_processing(stream).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stream test failed, assuming processing is required");
            true
        })
    })
}
