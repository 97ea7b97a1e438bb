//! # sc-classifier
//!
//! File classification for attachment rendering.
//!
//! The preview layer needs two decisions per attachment — thumbnail or icon,
//! and which icon — plus a human-readable size label. All three are pure
//! functions of the file's declared media type and byte count; file contents
//! are never inspected. The [`FileClassifier`] trait keeps the policy
//! injectable so rendering code never hard-codes a mapping.

use serde::{Deserialize, Serialize};

/// Representative glyph for a non-thumbnail attachment card.
///
/// `file_icon` is total: every media-type string maps to some variant,
/// with [`FileGlyph::Generic`] as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileGlyph {
    Image,
    Pdf,
    Spreadsheet,
    Document,
    Archive,
    Audio,
    Video,
    Text,
    Generic,
}

impl FileGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Text => "text",
            Self::Generic => "file",
        }
    }
}

/// Classification policy consumed by the attachment card renderer.
///
/// Implementations must be pure: no side effects, no I/O, total over any
/// media-type string.
pub trait FileClassifier {
    /// True iff the media type denotes an image (thumbnail rendering).
    fn is_image(&self, media_type: &str) -> bool;

    /// Map a media type to a representative glyph. Must never fail.
    fn file_icon(&self, media_type: &str) -> FileGlyph;

    /// Render a byte count in human units.
    fn format_file_size(&self, bytes: u64) -> String {
        format_file_size(bytes)
    }
}

/// Default classification policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClassifier;

impl FileClassifier for DefaultClassifier {
    fn is_image(&self, media_type: &str) -> bool {
        media_type.starts_with("image/")
    }

    fn file_icon(&self, media_type: &str) -> FileGlyph {
        if media_type.starts_with("image/") {
            return FileGlyph::Image;
        }
        if media_type == "application/pdf" {
            return FileGlyph::Pdf;
        }
        if media_type == "text/csv"
            || media_type == "application/vnd.ms-excel"
            || media_type.contains("spreadsheet")
        {
            return FileGlyph::Spreadsheet;
        }
        if media_type == "application/msword"
            || media_type.contains("wordprocessing")
            || media_type.contains("opendocument.text")
        {
            return FileGlyph::Document;
        }
        if media_type == "application/zip"
            || media_type == "application/gzip"
            || media_type == "application/x-tar"
            || media_type == "application/x-7z-compressed"
            || media_type == "application/vnd.rar"
        {
            return FileGlyph::Archive;
        }
        if media_type.starts_with("audio/") {
            return FileGlyph::Audio;
        }
        if media_type.starts_with("video/") {
            return FileGlyph::Video;
        }
        if media_type.starts_with("text/") {
            return FileGlyph::Text;
        }
        FileGlyph::Generic
    }
}

/// Human-readable file size.
///
/// Byte counts below 1 KiB render as whole bytes (`"512 B"`, `"0 B"`);
/// higher tiers get one decimal place (`"1.5 KB"`, `"2.0 MB"`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut tier = 0;
    while value >= 1024.0 && tier < UNITS.len() - 1 {
        value /= 1024.0;
        tier += 1;
    }

    format!("{:.1} {}", value, UNITS[tier])
}
