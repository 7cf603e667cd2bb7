use serde::{Deserialize, Serialize};

use crate::fields::RoomType;
use crate::form::ProfileForm;

// ── Profile Record ───────────────────────────────────────────────────────────
//
// One user's account and listing attributes, stored under their username in
// the profiles document.  Field names are part of the on-disk format; note
// the human-readable "Number of rooms renting" key, which predates this
// module and must keep its exact spelling.

/// Password written into a freshly created record when the login flow did
/// not leave one in the session.
pub const DEFAULT_PASSWORD: &str = "default_password";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Contact email.  Empty until the user fills it in; required on submit.
    #[serde(default)]
    pub email: String,
    /// Stored as plain text alongside the other fields.  Known weakness of
    /// the format; a real credential store is out of scope here.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub host_is_superhost: bool,
    #[serde(default)]
    pub host_listings_count: u32,
    #[serde(default)]
    pub host_identity_verified: bool,
    #[serde(default = "default_one")]
    pub bathrooms: u32,
    #[serde(default = "default_one")]
    pub bedrooms: u32,
    /// Paris district, 1-20.
    #[serde(default = "default_one")]
    pub arrondissement: u32,
    #[serde(default)]
    pub room_type: RoomType,
    /// Total rooms in the property, at least 1.
    #[serde(default = "default_two")]
    pub num_rooms: u32,
    /// Subset of the fixed amenity vocabulary, in selection order.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Whether the property is currently rented out.
    #[serde(default)]
    pub rent: bool,
    #[serde(rename = "Number of rooms renting", default = "default_two")]
    pub rented_rooms_count: u32,
    #[serde(default)]
    pub furnished: bool,
}

fn default_one() -> u32 {
    1
}

fn default_two() -> u32 {
    2
}

impl ProfileRecord {
    /// Builds the record a first-time visitor starts from.  The password is
    /// seeded from the session when the login flow stashed one there, so the
    /// user's real credential survives into the profile document.
    pub fn bootstrap(session_password: Option<&str>) -> Self {
        ProfileRecord {
            email: String::new(),
            password: session_password.unwrap_or(DEFAULT_PASSWORD).to_string(),
            host_is_superhost: false,
            host_listings_count: 0,
            host_identity_verified: false,
            bathrooms: 1,
            bedrooms: 1,
            arrondissement: 1,
            room_type: RoomType::EntireHomeApt,
            num_rooms: 2,
            amenities: Vec::new(),
            rent: false,
            rented_rooms_count: 2,
            furnished: false,
        }
    }

    /// Overwrites every field from a validated submission.  The one
    /// exception is the password: the form shows an empty masked input, and
    /// leaving it empty means "keep my current password".
    pub fn apply(&mut self, form: &ProfileForm) {
        self.email = form.email.clone();
        if !form.new_password.is_empty() {
            self.password = form.new_password.clone();
        }
        self.host_is_superhost = form.host_is_superhost;
        self.host_listings_count = form.host_listings_count;
        self.host_identity_verified = form.host_identity_verified;
        self.arrondissement = form.arrondissement;
        self.room_type = form.room_type;
        self.bathrooms = form.bathrooms;
        self.bedrooms = form.bedrooms;
        self.num_rooms = form.num_rooms;
        self.amenities = form.amenities.clone();
        self.rent = form.rent;
        self.rented_rooms_count = form.rented_rooms_count;
        self.furnished = form.furnished;
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
