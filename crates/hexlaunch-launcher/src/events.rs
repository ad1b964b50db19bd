//! Layout events and snapshots for renderers.

use hexlaunch_topology::Hex;
use serde::{Deserialize, Serialize};

/// Pixel rectangle of one occupied hex.
///
/// `x`/`y` is the hex centre relative to the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub hex: Hex,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Top-left corner of the view when the grid origin sits at the centre
    /// of a `viewport_width` x `viewport_height` viewport.
    pub fn top_left(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (
            viewport_width / 2.0 + self.x - self.width / 2.0,
            viewport_height / 2.0 + self.y - self.height / 2.0,
        )
    }
}

/// Translation that brings `hex` to the viewport centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub hex: Hex,
    pub dx: f64,
    pub dy: f64,
}

/// Events produced while the launcher follows its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutEvent {
    /// An item was given a hex
    ItemPlaced { hex: Hex, x: f64, y: f64, frame: u64 },

    /// An item left its hex
    ItemRemoved { hex: Hex, frame: u64 },

    /// Every item was removed
    LayoutCleared { frame: u64 },

    /// A snap to `hex` was computed
    SnapRequested { hex: Hex, dx: f64, dy: f64, frame: u64 },
}

impl LayoutEvent {
    /// Get the frame number for this event.
    pub fn frame(&self) -> u64 {
        match self {
            LayoutEvent::ItemPlaced { frame, .. } => *frame,
            LayoutEvent::ItemRemoved { frame, .. } => *frame,
            LayoutEvent::LayoutCleared { frame } => *frame,
            LayoutEvent::SnapRequested { frame, .. } => *frame,
        }
    }
}

/// One item as seen in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub hex: Hex,
    pub icon: String,
    pub x: f64,
    pub y: f64,
}

/// The launcher layout at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub frame: u64,
    pub hex_size: f64,
    pub item_count: usize,
    pub items: Vec<PlacedItem>,
}

impl LayoutSnapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization() {
        let event = LayoutEvent::ItemPlaced {
            hex: Hex::new(3, -2),
            x: 12.5,
            y: -75.0,
            frame: 100,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ItemPlaced\""));
        assert!(json.contains("\"q\":3"));

        let parsed: LayoutEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.frame(), 100);
        assert_eq!(parsed, event);
    }

    #[test]
    fn top_left_centres_origin_view() {
        let placement = Placement {
            hex: Hex::ORIGIN,
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 50.0,
        };
        assert_eq!(placement.top_left(400.0, 300.0), (180.0, 125.0));
    }

    #[test]
    fn snapshot_default() {
        let snap = LayoutSnapshot::default();
        assert_eq!(snap.frame, 0);
        assert_eq!(snap.item_count, 0);
        assert!(snap.to_json().unwrap().contains("\"items\": []"));
    }
}
