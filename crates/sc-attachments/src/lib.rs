//! # sc-attachments
//!
//! Attachment metadata and the composer-side intake pipeline.
//!
//! ## Features
//!
//! - Attachment records (metadata only, contents never read here)
//! - The capacity-aware attachment list owned by the composer
//! - Intake validation (media-type policy, per-file size ceiling)
//! - Explicit overflow policy for over-capacity batches
//!
//! ## Example
//!
//! ```rust
//! use sc_attachments::{Composer, DroppedFile, AttachmentIntake};
//! use sc_core::WidgetConfig;
//!
//! let mut composer = Composer::new(WidgetConfig::default());
//! composer.on_files_dropped(vec![
//!     DroppedFile::new("screenshot.png", 2048).with_url("blob:abc"),
//! ]);
//! assert_eq!(composer.attachments().len(), 1);
//! ```

pub mod composer;
pub mod list;
pub mod model;

pub use composer::{
    AttachmentIntake, Composer, IntakeReport, OverflowPolicy, SkipReason, SkippedFile,
};
pub use list::AttachmentList;
pub use model::{AttachmentId, AttachmentRecord, DroppedFile};
