//! Attachment preview rendering contract
//!
//! Stateless: turns the composer's current records into view models. The
//! thumbnail-vs-icon decision is type-driven, never load-driven — a card is
//! a thumbnail because its media type says image, not because the resource
//! at `url` loaded. A broken preview URL is the rendering layer's problem.

use serde::Serialize;

use sc_attachments::{AttachmentId, AttachmentRecord};
use sc_classifier::{FileClassifier, FileGlyph};

/// How a card presents its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CardMedia {
    /// Image preview bound to the record's url
    Thumbnail { url: String },
    /// Glyph from the classifier for everything else
    Icon { glyph: FileGlyph },
}

/// View model for one staged attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentCard {
    /// Current position in the list. Volatile across mutations.
    pub index: usize,
    /// Stable identifier, safe to key removal by
    pub id: AttachmentId,
    pub display_name: String,
    pub size_label: String,
    pub media: CardMedia,
}

impl AttachmentCard {
    /// The intent emitted when this card's remove control is activated.
    pub fn remove_intent(&self) -> RemoveIntent {
        RemoveIntent {
            index: self.index,
            id: self.id,
        }
    }
}

/// A user's request to remove one attachment.
///
/// `index` matches the positional removal callback and is only valid for a
/// single, synchronous removal — it goes stale the moment the list mutates.
/// `id` stays valid regardless; prefer it when queuing removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoveIntent {
    pub index: usize,
    pub id: AttachmentId,
}

/// The rendered grid. Only exists for a non-empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewGrid {
    pub cards: Vec<AttachmentCard>,
}

/// Render the current records as a preview grid.
///
/// Returns `None` for an empty list: no cards means no container at all.
pub fn render_preview(
    records: &[AttachmentRecord],
    classifier: &dyn FileClassifier,
) -> Option<PreviewGrid> {
    if records.is_empty() {
        return None;
    }

    let cards = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let media = if classifier.is_image(&record.media_type) {
                CardMedia::Thumbnail {
                    url: record.url.clone(),
                }
            } else {
                CardMedia::Icon {
                    glyph: classifier.file_icon(&record.media_type),
                }
            };

            AttachmentCard {
                index,
                id: record.id,
                display_name: record.display_name().to_string(),
                size_label: classifier.format_file_size(record.size),
                media,
            }
        })
        .collect();

    Some(PreviewGrid { cards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_classifier::DefaultClassifier;

    fn record(name: &str, media_type: &str, size: u64) -> AttachmentRecord {
        AttachmentRecord::new(name, format!("blob:{}", name), media_type, size)
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(render_preview(&[], &DefaultClassifier).is_none());
    }

    #[test]
    fn test_image_gets_thumbnail_without_loading_anything() {
        let records = vec![record("photo.jpg", "image/jpeg", 2048)];
        let grid = render_preview(&records, &DefaultClassifier).unwrap();

        // Type-driven: the url is bound as-is, even if it would never load.
        assert_eq!(
            grid.cards[0].media,
            CardMedia::Thumbnail {
                url: "blob:photo.jpg".to_string()
            }
        );
    }

    #[test]
    fn test_non_image_gets_icon() {
        let records = vec![
            record("report.pdf", "application/pdf", 1536),
            record("data.bin", "application/x-unknown", 10),
        ];
        let grid = render_preview(&records, &DefaultClassifier).unwrap();

        assert_eq!(
            grid.cards[0].media,
            CardMedia::Icon {
                glyph: FileGlyph::Pdf
            }
        );
        assert_eq!(
            grid.cards[1].media,
            CardMedia::Icon {
                glyph: FileGlyph::Generic
            }
        );
    }

    #[test]
    fn test_cards_keep_list_order_and_labels() {
        let records = vec![
            record("a.png", "image/png", 0),
            record("b.pdf", "application/pdf", 1536),
        ];
        let grid = render_preview(&records, &DefaultClassifier).unwrap();

        assert_eq!(grid.cards.len(), 2);
        assert_eq!(grid.cards[0].index, 0);
        assert_eq!(grid.cards[1].index, 1);
        assert_eq!(grid.cards[0].size_label, "0 B");
        assert_eq!(grid.cards[1].size_label, "1.5 KB");
        assert_eq!(grid.cards[1].display_name, "b.pdf");
    }

    #[test]
    fn test_empty_name_falls_back_to_placeholder() {
        let records = vec![record("", "text/plain", 10)];
        let grid = render_preview(&records, &DefaultClassifier).unwrap();
        assert_eq!(grid.cards[0].display_name, "Untitled file");
    }

    #[test]
    fn test_remove_intent_carries_index_and_id() {
        let records = vec![
            record("a.txt", "text/plain", 1),
            record("b.txt", "text/plain", 1),
        ];
        let grid = render_preview(&records, &DefaultClassifier).unwrap();

        let intent = grid.cards[1].remove_intent();
        assert_eq!(intent.index, 1);
        assert_eq!(intent.id, records[1].id);
    }
}
