//! Composer-side intake
//!
//! The composer is the authoritative owner of the attachment list. The drop
//! zone and the preview never touch the list directly; they report intents
//! through the callbacks defined here, and every callback runs to completion
//! on the UI thread, so no locking is involved.

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use sc_core::WidgetConfig;

use crate::list::AttachmentList;
use crate::model::{AttachmentId, AttachmentRecord, DroppedFile};

/// Intake boundary consumed by the drop zone.
///
/// Invoked at most once per successful drop, never on a rejected one. The
/// callee only ever receives the batch the platform delivered, in drop
/// order; any truncation decision belongs to the implementation.
pub trait AttachmentIntake {
    fn on_files_dropped(&mut self, files: Vec<DroppedFile>);
}

/// What to do with a batch that exceeds the remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Accept every valid file with no truncation. Legacy behavior: the
    /// list can exceed its capacity until the user removes something.
    AcceptAll,
    /// Accept valid files up to the free slots, skip the rest.
    #[default]
    FillRemaining,
    /// All-or-nothing: reject the whole batch if it does not fit.
    RejectBatch,
}

/// Why a dropped file was not turned into an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("file too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("media type not allowed: {0}")]
    BlockedType(String),
    #[error("attachment limit reached")]
    NoCapacity,
}

/// A file skipped during intake, with the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// Outcome of one intake call. Skips are informational, never faults.
#[derive(Debug, Clone, Default)]
pub struct IntakeReport {
    /// Ids of the records added to the list, in drop order
    pub accepted: Vec<AttachmentId>,
    /// Files that were not accepted, with reasons
    pub skipped: Vec<SkippedFile>,
}

impl IntakeReport {
    pub fn all_accepted(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The authoritative attachment-list owner.
pub struct Composer {
    list: AttachmentList,
    config: WidgetConfig,
    policy: OverflowPolicy,
    last_report: Option<IntakeReport>,
}

impl Composer {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            list: AttachmentList::new(config.max_attachments),
            config,
            policy: OverflowPolicy::default(),
            last_report: None,
        }
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn attachments(&self) -> &AttachmentList {
        &self.list
    }

    pub fn attachment_count(&self) -> usize {
        self.list.len()
    }

    /// Report from the most recent intake call, for surfacing notices.
    pub fn last_report(&self) -> Option<&IntakeReport> {
        self.last_report.as_ref()
    }

    /// Validate a batch of dropped files, build records, and merge them into
    /// the list under the configured overflow policy.
    #[instrument(skip(self, files), fields(batch = files.len(), current = self.list.len()))]
    pub fn intake(&mut self, files: Vec<DroppedFile>) -> IntakeReport {
        let mut report = IntakeReport::default();
        let mut valid = Vec::new();

        for file in files {
            let media_type = file.resolved_media_type();

            if file.size > self.config.max_file_size {
                warn!(name = %file.name, size = file.size, "file skipped: too large");
                report.skipped.push(SkippedFile {
                    name: file.name,
                    reason: SkipReason::TooLarge {
                        size: file.size,
                        max: self.config.max_file_size,
                    },
                });
                continue;
            }

            if !self.config.file_types.is_allowed(&media_type) {
                warn!(name = %file.name, media_type = %media_type, "file skipped: blocked type");
                report.skipped.push(SkippedFile {
                    name: file.name,
                    reason: SkipReason::BlockedType(media_type),
                });
                continue;
            }

            valid.push(
                AttachmentRecord::new(file.name, file.url, media_type, file.size),
            );
        }

        let remaining = self.list.remaining_slots();
        let (accept, overflow): (Vec<_>, Vec<_>) = match self.policy {
            OverflowPolicy::AcceptAll => (valid, Vec::new()),
            OverflowPolicy::FillRemaining => {
                let mut accept = valid;
                let overflow = accept.split_off(remaining.min(accept.len()));
                (accept, overflow)
            }
            OverflowPolicy::RejectBatch if valid.len() > remaining => (Vec::new(), valid),
            OverflowPolicy::RejectBatch => (valid, Vec::new()),
        };

        for record in overflow {
            report.skipped.push(SkippedFile {
                name: record.original_name,
                reason: SkipReason::NoCapacity,
            });
        }

        for record in accept {
            debug!(id = %record.id, name = %record.original_name, "attachment staged");
            report.accepted.push(record.id);
            self.list.push(record);
        }

        info!(
            accepted = report.accepted.len(),
            skipped = report.skipped.len(),
            total = self.list.len(),
            "intake complete"
        );

        report
    }

    /// Remove one attachment by position. Only safe for a single,
    /// synchronous removal; prefer [`Composer::remove_by_id`].
    pub fn remove_at(&mut self, index: usize) -> Option<AttachmentRecord> {
        self.list.remove_at(index)
    }

    /// Remove one attachment by its stable id.
    pub fn remove_by_id(&mut self, id: AttachmentId) -> Option<AttachmentRecord> {
        self.list.remove_by_id(id)
    }
}

impl AttachmentIntake for Composer {
    fn on_files_dropped(&mut self, files: Vec<DroppedFile>) {
        let report = self.intake(files);
        self.last_report = Some(report);
    }
}
