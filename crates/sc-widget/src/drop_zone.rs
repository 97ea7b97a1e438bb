//! Drag-and-drop capture surface
//!
//! A drag gesture over nested UI structure fires enter/leave events per
//! node, and they do not pair 1:1 at the outer boundary. The zone therefore
//! keeps a depth counter of outstanding enters and derives its visual state
//! from it, instead of trusting any single event.
//!
//! All handlers run to completion on the UI thread, one at a time, so the
//! counter needs no synchronization.

use tracing::{debug, warn};

use sc_attachments::{AttachmentIntake, DroppedFile};

/// Observable drop-zone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZoneState {
    Idle,
    Dragging,
}

/// Marker returned from `over` so the host can suppress the platform's
/// default reject-drop behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Copy,
}

/// User-facing notice for a drop rejected at capacity. Informational, never
/// a fault: no list mutation has occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityNotice {
    pub capacity: usize,
    pub current: usize,
}

impl std::fmt::Display for CapacityNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You can attach at most {} files per message",
            self.capacity
        )
    }
}

/// What happened at the drop boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The whole payload was forwarded to the intake callback.
    Forwarded { count: usize },
    /// The drop was rejected at capacity; nothing was forwarded.
    Rejected(CapacityNotice),
}

/// Overlay view model: shown iff the zone is in the dragging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOverlay {
    /// Free slots, computed at render time rather than captured at
    /// drag-start time.
    pub remaining_slots: usize,
}

/// The drag-session state machine.
///
/// `depth` counts outstanding enter-without-leave events; it starts at
/// zero, is clamped at zero on underflow, and is unconditionally reset to
/// zero on every completed drop.
#[derive(Debug)]
pub struct DropZone {
    capacity: usize,
    depth: i32,
    state: DropZoneState,
}

impl DropZone {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            depth: 0,
            state: DropZoneState::Idle,
        }
    }

    pub fn state(&self) -> DropZoneState {
        self.state
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A drag entered the zone or one of its descendants.
    ///
    /// The dragging state is entered only on the outermost enter
    /// (`depth` 0 -> 1) and only while below capacity. Capacity is checked
    /// at entry time only; a count change mid-drag does not retroactively
    /// toggle the overlay.
    pub fn enter(&mut self, current_count: usize) {
        let outermost = self.depth == 0;
        self.depth += 1;

        if outermost && current_count < self.capacity {
            debug!(depth = self.depth, "drag session started");
            self.state = DropZoneState::Dragging;
        }
    }

    /// A drag left the zone or one of its descendants.
    ///
    /// Platform event ordering is not guaranteed to pair perfectly, so the
    /// counter clamps at zero rather than going negative.
    pub fn leave(&mut self) {
        self.depth = (self.depth - 1).max(0);
        if self.depth == 0 {
            self.state = DropZoneState::Idle;
        }
    }

    /// Continuous hover. No state change; the returned effect exists solely
    /// so the host suppresses the platform's default behavior.
    pub fn over(&self) -> DragEffect {
        DragEffect::Copy
    }

    /// Complete the gesture.
    ///
    /// The counter is reset unconditionally, whatever its prior value, so a
    /// missed leave event can never wedge the zone in the dragging state.
    /// At or above capacity the whole payload is rejected; below it, the
    /// entire payload is forwarded in one intake call, in platform order,
    /// with no truncation here.
    pub fn drop(
        &mut self,
        current_count: usize,
        payload: Vec<DroppedFile>,
        intake: &mut dyn AttachmentIntake,
    ) -> DropOutcome {
        self.depth = 0;
        self.state = DropZoneState::Idle;

        if current_count >= self.capacity {
            warn!(current = current_count, capacity = self.capacity, "drop rejected at capacity");
            return DropOutcome::Rejected(CapacityNotice {
                capacity: self.capacity,
                current: current_count,
            });
        }

        let count = payload.len();
        debug!(count, "drop forwarded to intake");
        intake.on_files_dropped(payload);
        DropOutcome::Forwarded { count }
    }

    /// Overlay to render, if any: visible iff dragging, with the remaining
    /// slots recomputed from the current count every render.
    pub fn overlay(&self, current_count: usize) -> Option<DropOverlay> {
        match self.state {
            DropZoneState::Dragging => Some(DropOverlay {
                remaining_slots: self.capacity.saturating_sub(current_count),
            }),
            DropZoneState::Idle => None,
        }
    }
}
