//! Image pseudo-video codec detection.
//!
//! Container formats tag embedded cover art and image sequences as video
//! streams. Such streams must never put a file in the processing queue, no
//! matter how the exclusion list is configured, so they are matched against
//! a fixed table instead of user settings.

/// Codec names that denote a static image or image sequence rather than a
/// genuine motion-video track.
const IMAGE_VIDEO_CODECS: &[&str] = &[
    "alias_pix",
    "apng",
    "brender_pix",
    "dds",
    "dpx",
    "exr",
    "fits",
    "gif",
    "mjpeg",
    "mjpegb",
    "pam",
    "pbm",
    "pcx",
    "pfm",
    "pgm",
    "pgmyuv",
    "pgx",
    "photocd",
    "pictor",
    "pixlet",
    "png",
    "ppm",
    "ptx",
    "sgi",
    "sunrast",
    "tiff",
    "vc1image",
    "wmv3image",
    "xbm",
    "xface",
    "xpm",
    "xwd",
];

/// Check whether a codec name denotes an image pseudo-video stream.
///
/// Comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use ignore_video_codecs::codecs::is_image_video_codec;
///
/// assert!(is_image_video_codec("png"));
/// assert!(is_image_video_codec("MJPEG"));
/// assert!(!is_image_video_codec("h264"));
/// ```
pub fn is_image_video_codec(name: &str) -> bool {
    IMAGE_VIDEO_CODECS.contains(&name.to_lowercase().as_str())
}

/// Get the fixed table of image pseudo-video codec names.
///
/// # Examples
///
/// ```
/// use ignore_video_codecs::codecs::image_video_codecs;
///
/// assert!(image_video_codecs().contains(&"png"));
/// assert!(image_video_codecs().contains(&"gif"));
/// ```
#[must_use]
pub fn image_video_codecs() -> &'static [&'static str] {
    IMAGE_VIDEO_CODECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_codecs_match() {
        assert!(is_image_video_codec("png"));
        assert!(is_image_video_codec("apng"));
        assert!(is_image_video_codec("gif"));
        assert!(is_image_video_codec("mjpeg"));
        assert!(is_image_video_codec("mjpegb"));
        assert!(is_image_video_codec("tiff"));
        assert!(is_image_video_codec("vc1image"));
        assert!(is_image_video_codec("wmv3image"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_image_video_codec("PNG"));
        assert!(is_image_video_codec("Tiff"));
        assert!(is_image_video_codec("MjPeG"));
    }

    #[test]
    fn motion_video_codecs_do_not_match() {
        assert!(!is_image_video_codec("h264"));
        assert!(!is_image_video_codec("hevc"));
        assert!(!is_image_video_codec("av1"));
        assert!(!is_image_video_codec("vp9"));
        assert!(!is_image_video_codec("mpeg2video"));

        // The image variants of vc1/wmv3 are in the table, the motion
        // variants are not.
        assert!(!is_image_video_codec("vc1"));
        assert!(!is_image_video_codec("wmv3"));
    }

    #[test]
    fn empty_name_does_not_match() {
        assert!(!is_image_video_codec(""));
    }

    #[test]
    fn table_is_lowercase_and_sorted() {
        let table = image_video_codecs();
        assert_eq!(table.len(), 32);
        assert!(table.iter().all(|c| c.chars().all(|ch| !ch.is_uppercase())));
        assert!(table.windows(2).all(|w| w[0] < w[1]));
    }
}
