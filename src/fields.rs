use serde::{Deserialize, Serialize};

// ── Form Vocabularies & Bounds ───────────────────────────────────────────────
//
// Fixed option lists and numeric limits the edit form is built from.  The UI
// layer reads these out of the page view instead of hard-coding its own
// copies, so the widgets and the stored data can never drift apart.

/// The kind of space a host offers.  Serializes to the exact literals the
/// profile file has always used, so existing documents keep parsing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomType {
    #[default]
    #[serde(rename = "Entire home/apt")]
    EntireHomeApt,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
    #[serde(rename = "Hotel room")]
    HotelRoom,
}

impl RoomType {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::EntireHomeApt => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
            RoomType::HotelRoom => "Hotel room",
        }
    }

    /// All four room types, in form-select order.
    pub fn all() -> [RoomType; 4] {
        [
            RoomType::EntireHomeApt,
            RoomType::PrivateRoom,
            RoomType::SharedRoom,
            RoomType::HotelRoom,
        ]
    }
}

/// The amenity multi-select vocabulary, in display order.
pub const AMENITIES: [&str; 10] = [
    "Kitchen",
    "WiFi",
    "Bathtub",
    "Elevator",
    "Air conditioning",
    "Pets allowed",
    "TV",
    "Private entrance",
    "Balcony",
    "City skyline view",
];

/// Paris arrondissement range the number input offers.
pub const ARRONDISSEMENT_MIN: u32 = 1;
pub const ARRONDISSEMENT_MAX: u32 = 20;

/// Floor for the total-rooms input; every listing has at least one room.
pub const NUM_ROOMS_MIN: u32 = 1;

pub fn is_known_amenity(name: &str) -> bool {
    AMENITIES.contains(&name)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_serializes_to_display_literal() {
        for rt in RoomType::all() {
            let json = serde_json::to_string(&rt).unwrap();
            assert_eq!(json, format!("\"{}\"", rt.label()));
        }
    }

    #[test]
    fn test_room_type_parses_legacy_literal() {
        let rt: RoomType = serde_json::from_str("\"Entire home/apt\"").unwrap();
        assert_eq!(rt, RoomType::EntireHomeApt);
    }

    #[test]
    fn test_amenity_vocabulary() {
        assert!(is_known_amenity("WiFi"));
        assert!(is_known_amenity("City skyline view"));
        assert!(!is_known_amenity("Helipad"));
        assert_eq!(AMENITIES.len(), 10);
    }
}
