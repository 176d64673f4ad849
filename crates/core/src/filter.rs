//! Room filtering by sleep/wake slot.

use serde::{Deserialize, Serialize};

use crate::models::team::RoomSummary;
use crate::slot::{BookingWindow, SlotIndex};

/// A complete sleep/wake slot pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub start: SlotIndex,
    pub end: SlotIndex,
}

impl SlotSelection {
    pub fn new(start: SlotIndex, end: SlotIndex) -> Self {
        Self { start, end }
    }

    /// Selection from two independently picked slots.
    ///
    /// Returns `None` until both have been picked.
    pub fn from_parts(start: Option<SlotIndex>, end: Option<SlotIndex>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }

    pub fn matches(&self, window: &BookingWindow) -> bool {
        window.slots() == (self.start, self.end)
    }
}

/// Anything carrying a booking window.
pub trait HasWindow {
    fn window(&self) -> &BookingWindow;
}

impl HasWindow for BookingWindow {
    fn window(&self) -> &BookingWindow {
        self
    }
}

impl HasWindow for RoomSummary {
    fn window(&self) -> &BookingWindow {
        &self.window
    }
}

/// Rooms whose decoded slot pair equals `selection`, in input order.
///
/// With no selection every room is returned.
pub fn filter_rooms<T>(rooms: &[T], selection: Option<SlotSelection>) -> Vec<T>
where
    T: HasWindow + Clone,
{
    match selection {
        None => rooms.to_vec(),
        Some(selection) => rooms
            .iter()
            .filter(|room| selection.matches(room.window()))
            .cloned()
            .collect(),
    }
}
