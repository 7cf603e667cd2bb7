//! Backend of the host profile page: a JSON-file profile store plus the
//! controller that renders the edit form, validates submissions, and handles
//! logout.  The hosting UI runtime drives it one call per interaction.

pub mod fields;
pub mod form;
pub mod page;
pub mod record;
pub mod session;
pub mod store;

pub use fields::{RoomType, AMENITIES, ARRONDISSEMENT_MAX, ARRONDISSEMENT_MIN, NUM_ROOMS_MIN};
pub use form::ProfileForm;
pub use page::{logout, submit, visit, Notice, NoticeLevel, PageView};
pub use record::{ProfileRecord, DEFAULT_PASSWORD};
pub use session::Session;
pub use store::{FileStore, LoadedProfiles, MemoryStore, ProfileStore, DEFAULT_STORE_PATH};
