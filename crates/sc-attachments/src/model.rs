//! Attachment metadata
//!
//! Records describe files staged for sending with a chat message — never
//! their binary content. Only name, type, size, and a preview location
//! cross this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable opaque identifier for an attachment record.
///
/// Assigned once at record creation. Removal is keyed by this id rather
/// than by list position, which makes removals safe regardless of how the
/// list has been reordered or shrunk in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One file attached to an in-progress message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Stable identifier, assigned at creation
    pub id: AttachmentId,
    /// Storage-side identifier, assigned by the external upload step.
    /// Empty until the upload completes.
    pub filename: String,
    /// User-visible name as selected/dropped
    pub original_name: String,
    /// Resolvable preview location: a local blob reference before upload,
    /// a remote URL after
    pub url: String,
    /// MIME-like media type, always non-empty
    pub media_type: String,
    /// File size in bytes
    pub size: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl AttachmentRecord {
    /// Create a new record with a fresh stable id.
    pub fn new(
        original_name: impl Into<String>,
        url: impl Into<String>,
        media_type: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            filename: String::new(),
            original_name: original_name.into(),
            url: url.into(),
            media_type: media_type.into(),
            size,
            created_at: Utc::now(),
        }
    }

    /// Set the storage-side filename once the upload step has assigned one.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// User-visible name with a placeholder fallback for empty names.
    pub fn display_name(&self) -> &str {
        if self.original_name.is_empty() {
            "Untitled file"
        } else {
            &self.original_name
        }
    }
}

/// A platform file handle as it arrives at the drop boundary.
///
/// Metadata only: the intake pipeline never reads file contents, so there
/// is no blocking point anywhere in this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppedFile {
    /// Name as reported by the platform
    pub name: String,
    /// Declared media type, if the platform provided one
    pub media_type: Option<String>,
    /// Byte count
    pub size: u64,
    /// Preview location (e.g. an object URL minted by the drop handler)
    pub url: String,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            size,
            url: String::new(),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Resolve the effective media type: the declared one when present and
    /// non-empty, otherwise a guess from the filename, otherwise
    /// `application/octet-stream`.
    pub fn resolved_media_type(&self) -> String {
        match self.media_type.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => mime_guess::from_path(&self.name)
                .first_or_octet_stream()
                .to_string(),
        }
    }
}
