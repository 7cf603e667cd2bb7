use serde::{Deserialize, Serialize};

use crate::fields::RoomType;
use crate::record::ProfileRecord;

// ── Profile Form ─────────────────────────────────────────────────────────────
//
// The raw values of one form submission, exactly as the UI collected them.
// Deserialize lets the UI runtime hand the whole submission over as JSON.

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProfileForm {
    pub email: String,
    /// Masked "New Password" input.  Always rendered empty; an empty value
    /// on submit keeps the stored password.
    #[serde(default)]
    pub new_password: String,
    pub host_is_superhost: bool,
    pub host_listings_count: u32,
    pub host_identity_verified: bool,
    pub arrondissement: u32,
    pub room_type: RoomType,
    pub bathrooms: u32,
    pub bedrooms: u32,
    pub num_rooms: u32,
    pub amenities: Vec<String>,
    pub rent: bool,
    pub rented_rooms_count: u32,
    pub furnished: bool,
}

impl ProfileForm {
    /// Pre-populates the form from a stored record, the state the page
    /// renders with.  The password input starts empty regardless of what is
    /// stored.
    pub fn from_record(record: &ProfileRecord) -> Self {
        ProfileForm {
            email: record.email.clone(),
            new_password: String::new(),
            host_is_superhost: record.host_is_superhost,
            host_listings_count: record.host_listings_count,
            host_identity_verified: record.host_identity_verified,
            arrondissement: record.arrondissement,
            room_type: record.room_type,
            bathrooms: record.bathrooms,
            bedrooms: record.bedrooms,
            num_rooms: record.num_rooms,
            amenities: record.amenities.clone(),
            rent: record.rent,
            rented_rooms_count: record.rented_rooms_count,
            furnished: record.furnished,
        }
    }

    /// Submit-time validation.  Only the two required fields are checked;
    /// the numeric inputs are range-clamped by their widgets and are not
    /// re-checked here.  The arrondissement widget floors at 1, so the zero
    /// arm below cannot trip from the UI; it is kept as-is rather than
    /// repurposed into a range check.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() || self.arrondissement == 0 {
            return Err("Please ensure Email and Arrondissement are filled out.".to_string());
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
