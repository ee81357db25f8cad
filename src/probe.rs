//! Probed stream metadata and the prober contract.
//!
//! The host owns the actual probing machinery (ffprobe, mediainfo, native
//! demuxers); this module defines the slice of its output the plugin
//! consumes and the [`Prober`] seam the host implements.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

// ---------------------------------------------------------------------------
// StreamKind
// ---------------------------------------------------------------------------

/// Type of media stream within a container file.
///
/// Mirrors the `codec_type` values media probers report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Subtitle => write!(f, "subtitle"),
            Self::Data => write!(f, "data"),
            Self::Attachment => write!(f, "attachment"),
        }
    }
}

// ---------------------------------------------------------------------------
// Stream / ProbeReport
// ---------------------------------------------------------------------------

/// One media stream as reported by the prober.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Stream index within the container.
    pub index: u32,
    /// Stream type.
    pub kind: StreamKind,
    /// Codec identifier (e.g. `"h264"`, `"png"`), compared
    /// case-insensitively. Probers occasionally fail to identify a codec,
    /// so the name may be absent.
    pub codec_name: Option<String>,
}

/// Successful probe result: the streams found in a media file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// All streams, in container order.
    pub streams: Vec<Stream>,
}

impl ProbeReport {
    /// Create a report from a list of streams.
    pub fn new(streams: Vec<Stream>) -> Self {
        Self { streams }
    }

    /// Iterate over the streams of the given kind, in container order.
    pub fn streams_of_kind(&self, kind: StreamKind) -> impl Iterator<Item = &Stream> {
        self.streams.iter().filter(move |s| s.kind == kind)
    }

    /// Iterate over the video streams, in container order.
    pub fn video_streams(&self) -> impl Iterator<Item = &Stream> {
        self.streams_of_kind(StreamKind::Video)
    }
}

// ---------------------------------------------------------------------------
// Prober
// ---------------------------------------------------------------------------

/// A media file prober capable of extracting stream metadata.
///
/// Implemented by the host; implementations must be safe to share across
/// threads (`Send + Sync`).
pub trait Prober: Send + Sync {
    /// Human-readable name identifying this prober implementation.
    fn name(&self) -> &'static str;

    /// Check whether this prober supports the given file path.
    ///
    /// Typically an extension or mimetype gate. A return value of `true`
    /// does not guarantee that [`Prober::probe`] will succeed.
    fn supports(&self, path: &Path) -> bool;

    /// Probe the file at `path` and extract its stream metadata.
    fn probe(&self, path: &Path) -> Result<ProbeReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> ProbeReport {
        ProbeReport::new(vec![
            Stream {
                index: 0,
                kind: StreamKind::Video,
                codec_name: Some("h264".to_string()),
            },
            Stream {
                index: 1,
                kind: StreamKind::Audio,
                codec_name: Some("aac".to_string()),
            },
            Stream {
                index: 2,
                kind: StreamKind::Video,
                codec_name: Some("png".to_string()),
            },
            Stream {
                index: 3,
                kind: StreamKind::Subtitle,
                codec_name: Some("subrip".to_string()),
            },
        ])
    }

    #[test]
    fn streams_of_kind_filters_and_keeps_order() {
        let report = make_report();

        let videos: Vec<u32> = report
            .streams_of_kind(StreamKind::Video)
            .map(|s| s.index)
            .collect();
        assert_eq!(videos, vec![0, 2]);

        let audio: Vec<u32> = report
            .streams_of_kind(StreamKind::Audio)
            .map(|s| s.index)
            .collect();
        assert_eq!(audio, vec![1]);

        assert_eq!(report.streams_of_kind(StreamKind::Data).count(), 0);
    }

    #[test]
    fn video_streams_matches_kind_filter() {
        let report = make_report();
        let via_helper: Vec<&Stream> = report.video_streams().collect();
        let via_kind: Vec<&Stream> = report.streams_of_kind(StreamKind::Video).collect();
        assert_eq!(via_helper, via_kind);
    }

    #[test]
    fn empty_report_has_no_video_streams() {
        let report = ProbeReport::default();
        assert_eq!(report.video_streams().count(), 0);
    }

    #[test]
    fn stream_kind_display() {
        assert_eq!(StreamKind::Video.to_string(), "video");
        assert_eq!(StreamKind::Audio.to_string(), "audio");
        assert_eq!(StreamKind::Subtitle.to_string(), "subtitle");
        assert_eq!(StreamKind::Data.to_string(), "data");
        assert_eq!(StreamKind::Attachment.to_string(), "attachment");
    }

    #[test]
    fn stream_kind_serde_is_lowercase() {
        let json = serde_json::to_string(&StreamKind::Attachment).unwrap();
        assert_eq!(json, r#""attachment""#);
        let back: StreamKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StreamKind::Attachment);
    }

    #[test]
    fn report_serde_roundtrip() {
        let report = make_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: ProbeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn stream_without_codec_name_serializes_to_null() {
        let stream = Stream {
            index: 0,
            kind: StreamKind::Video,
            codec_name: None,
        };
        let json = serde_json::to_string(&stream).unwrap();
        assert_eq!(json, r#"{"index":0,"kind":"video","codec_name":null}"#);
        let back: Stream = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stream);
    }
}
