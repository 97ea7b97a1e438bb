//! # sc-widget
//!
//! The capture and preview surfaces of the attachment pipeline.
//!
//! - [`DropZone`] turns the platform's unpaired enter/leave/over/drop event
//!   stream into a two-state machine and arbitrates capacity at the drop
//!   boundary.
//! - [`preview`] renders staged attachments as view models: thumbnail or
//!   glyph cards with per-card removal intents.
//!
//! Neither surface owns attachment state. The authoritative list lives in
//! the composer (`sc-attachments`); these components read its length and
//! report back through callbacks.

pub mod drop_zone;
pub mod preview;

pub use drop_zone::{CapacityNotice, DragEffect, DropOutcome, DropOverlay, DropZone, DropZoneState};
pub use preview::{render_preview, AttachmentCard, CardMedia, PreviewGrid, RemoveIntent};

#[cfg(test)]
mod tests {
    use super::*;
    use sc_attachments::{AttachmentIntake, Composer, DroppedFile, OverflowPolicy};
    use sc_classifier::DefaultClassifier;
    use sc_core::WidgetConfig;

    fn files(names: &[&str]) -> Vec<DroppedFile> {
        names
            .iter()
            .map(|n| DroppedFile::new(*n, 100).with_url(format!("blob:{}", n)))
            .collect()
    }

    #[test]
    fn test_full_composer_rejects_drop_untouched() {
        let config = WidgetConfig::default();
        let mut composer = Composer::new(config.clone());
        let mut zone = DropZone::new(config.max_attachments);

        composer.on_files_dropped(files(&["a", "b", "c", "d", "e"]));
        assert_eq!(composer.attachment_count(), 5);

        zone.enter(composer.attachment_count());
        let outcome = zone.drop(composer.attachment_count(), files(&["f", "g"]), &mut composer);

        assert!(matches!(outcome, DropOutcome::Rejected(_)));
        assert_eq!(composer.attachment_count(), 5);
    }

    #[test]
    fn test_oversubscribed_batch_reaches_composer_whole() {
        // Legacy accept-all policy: the zone forwards all 4 files and the
        // composer merges them without truncation.
        let config = WidgetConfig::default();
        let mut composer = Composer::new(config.clone()).with_policy(OverflowPolicy::AcceptAll);
        let mut zone = DropZone::new(config.max_attachments);

        composer.on_files_dropped(files(&["a", "b", "c"]));

        zone.enter(composer.attachment_count());
        let outcome = zone.drop(
            composer.attachment_count(),
            files(&["d", "e", "f", "g"]),
            &mut composer,
        );

        assert_eq!(outcome, DropOutcome::Forwarded { count: 4 });
        assert_eq!(composer.attachment_count(), 7);
    }

    #[test]
    fn test_drop_then_preview_then_remove() {
        let config = WidgetConfig::default();
        let mut composer = Composer::new(config.clone());
        let mut zone = DropZone::new(config.max_attachments);

        zone.enter(0);
        assert_eq!(zone.overlay(0).unwrap().remaining_slots, 5);

        zone.drop(
            0,
            vec![
                DroppedFile::new("photo.png", 2048).with_url("blob:photo"),
                DroppedFile::new("report.pdf", 1536).with_url("blob:report"),
            ],
            &mut composer,
        );

        let grid = render_preview(composer.attachments().as_slice(), &DefaultClassifier).unwrap();
        assert_eq!(grid.cards.len(), 2);
        assert!(matches!(grid.cards[0].media, CardMedia::Thumbnail { .. }));
        assert!(matches!(grid.cards[1].media, CardMedia::Icon { .. }));

        let intent = grid.cards[0].remove_intent();
        composer.remove_by_id(intent.id).unwrap();
        assert_eq!(composer.attachment_count(), 1);

        // Empty after the last removal: nothing renders.
        composer.remove_at(0).unwrap();
        assert!(render_preview(composer.attachments().as_slice(), &DefaultClassifier).is_none());
    }
}
