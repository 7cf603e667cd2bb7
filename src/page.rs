use serde::Serialize;

use crate::fields::{RoomType, AMENITIES, ARRONDISSEMENT_MAX, ARRONDISSEMENT_MIN, NUM_ROOMS_MIN};
use crate::form::ProfileForm;
use crate::record::ProfileRecord;
use crate::session::Session;
use crate::store::ProfileStore;

// ── Profile Page Controller ──────────────────────────────────────────────────
//
// Drives one render/submit cycle of the profile page.  The hosting UI runtime
// calls `visit` to get the page state, `submit` with the collected form
// values, and `logout` for the button outside the form.  Everything the UI
// needs to draw — field values, option lists, messages — travels in the
// returned `PageView`; widget choice stays with the UI.

/// Severity of a page message, mirrored by the UI as its banner styles.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One user-visible message attached to a render.
#[derive(Debug, Serialize, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Notice {
            level: NoticeLevel::Success,
            text: text.to_string(),
        }
    }

    pub fn warning(text: &str) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.to_string(),
        }
    }
}

/// Everything one render of the profile page consists of.
#[derive(Debug, Serialize, Clone)]
pub struct PageView {
    pub title: String,
    pub welcome: String,
    pub intro: String,
    /// Form state to bind, pre-populated from the record.  The password
    /// input is always blank.
    pub form: ProfileForm,
    /// Room-type select options, in display order.
    pub room_types: Vec<&'static str>,
    /// Amenity multi-select vocabulary.
    pub amenities: Vec<&'static str>,
    pub arrondissement_min: u32,
    pub arrondissement_max: u32,
    pub num_rooms_min: u32,
    pub notices: Vec<Notice>,
}

impl PageView {
    fn editing(username: &str, record: &ProfileRecord, notices: Vec<Notice>) -> Self {
        Self::with_form(username, ProfileForm::from_record(record), notices)
    }

    fn with_form(username: &str, form: ProfileForm, notices: Vec<Notice>) -> Self {
        PageView {
            title: "User Profile".to_string(),
            welcome: format!("Welcome, {}!", username),
            intro: "Update your information to allow us to be as precise as possible!".to_string(),
            form,
            room_types: RoomType::all().iter().map(|rt| rt.label()).collect(),
            amenities: AMENITIES.to_vec(),
            arrondissement_min: ARRONDISSEMENT_MIN,
            arrondissement_max: ARRONDISSEMENT_MAX,
            num_rooms_min: NUM_ROOMS_MIN,
            notices,
        }
    }
}

fn require_username(session: &Session) -> Result<&str, String> {
    session
        .username
        .as_deref()
        .ok_or_else(|| "No username found in session state. Please log in again.".to_string())
}

/// Loads the current user's record, creating and persisting the default one
/// on first visit.  Pushes the matching warnings onto `notices`.
fn load_record(
    store: &dyn ProfileStore,
    username: &str,
    session_password: Option<&str>,
    notices: &mut Vec<Notice>,
) -> Result<ProfileRecord, String> {
    let loaded = store.load();
    if loaded.recovered {
        notices.push(Notice::warning(
            "The profile data file is corrupted or empty. Initializing...",
        ));
    }

    let mut records = loaded.records;
    if let Some(record) = records.get(username) {
        return Ok(record.clone());
    }

    notices.push(Notice::warning(
        "No profile found for the user. Initializing profile with default values...",
    ));
    let record = ProfileRecord::bootstrap(session_password);
    records.insert(username.to_string(), record.clone());
    store.save(&records)?;
    Ok(record)
}

/// Renders the page for the current session.  Errors only when no identity
/// is in the session or the first-visit default record cannot be persisted.
pub fn visit(store: &dyn ProfileStore, session: &Session) -> Result<PageView, String> {
    let username = require_username(session)?;

    let mut notices = Vec::new();
    let record = load_record(store, username, session.password.as_deref(), &mut notices)?;

    Ok(PageView::editing(username, &record, notices))
}

/// Handles one form submission.  Invalid input never reaches the store: the
/// page re-renders with the submitted values echoed back and an error
/// notice.  Valid input overwrites the whole record and is saved; a failed
/// save aborts the request.
pub fn submit(
    store: &dyn ProfileStore,
    session: &Session,
    form: &ProfileForm,
) -> Result<PageView, String> {
    let username = require_username(session)?;

    let mut notices = Vec::new();
    let mut record = load_record(store, username, session.password.as_deref(), &mut notices)?;

    if let Err(message) = form.validate() {
        notices.push(Notice::error(&message));
        return Ok(PageView::with_form(username, form.clone(), notices));
    }

    record.apply(form);

    let mut records = store.load().records;
    records.insert(username.to_string(), record.clone());
    store.save(&records)?;

    notices.push(Notice::success("Profile updated successfully!"));
    Ok(PageView::editing(username, &record, notices))
}

/// The logout button outside the form: clears the session identity and
/// sends the visitor back to the home page.
pub fn logout(session: &mut Session) -> Notice {
    session.clear();
    Notice::success("You have been logged out.")
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn existing_store(email: &str, password: &str) -> MemoryStore {
        let mut record = ProfileRecord::bootstrap(None);
        record.email = email.to_string();
        record.password = password.to_string();
        record.arrondissement = 5;
        let mut records = HashMap::new();
        records.insert("alice".to_string(), record);
        MemoryStore::with_records(records)
    }

    fn has_notice(view: &PageView, level: NoticeLevel, fragment: &str) -> bool {
        view.notices
            .iter()
            .any(|n| n.level == level && n.text.contains(fragment))
    }

    #[test]
    fn test_visit_without_identity_errors() {
        let store = MemoryStore::new();
        let mut session = Session::logged_in("alice");
        session.username = None;

        let err = visit(&store, &session).unwrap_err();
        assert!(err.contains("No username found in session"));
    }

    #[test]
    fn test_first_visit_persists_defaults_before_any_submit() {
        let store = MemoryStore::new();
        let session = Session::logged_in("alice");

        let view = visit(&store, &session).unwrap();
        assert!(has_notice(&view, NoticeLevel::Warning, "No profile found"));
        assert_eq!(view.welcome, "Welcome, alice!");
        assert_eq!(view.form.new_password, "");

        let stored = store.record("alice").expect("record persisted on visit");
        assert_eq!(stored, ProfileRecord::bootstrap(None));
        assert_eq!(stored.password, "default_password");
        assert_eq!(stored.arrondissement, 1);
    }

    #[test]
    fn test_repeat_visits_yield_identical_defaults() {
        let store = MemoryStore::new();
        let session = Session::logged_in("alice");

        let first = visit(&store, &session).unwrap();
        let second = visit(&store, &session).unwrap();
        assert_eq!(first.form.email, second.form.email);
        assert_eq!(store.record("alice"), Some(ProfileRecord::bootstrap(None)));
        // The bootstrap warning only appears while the record is missing.
        assert!(!has_notice(&second, NoticeLevel::Warning, "No profile found"));
    }

    #[test]
    fn test_first_visit_seeds_password_from_session() {
        let store = MemoryStore::new();
        let mut session = Session::logged_in("alice");
        session.password = Some("hunter2".to_string());

        visit(&store, &session).unwrap();
        assert_eq!(store.record("alice").unwrap().password, "hunter2");
    }

    #[test]
    fn test_corrupt_store_surfaces_warning() {
        let store = MemoryStore::corrupt();
        let session = Session::logged_in("alice");

        let view = visit(&store, &session).unwrap();
        assert!(has_notice(&view, NoticeLevel::Warning, "corrupted or empty"));
    }

    #[test]
    fn test_submit_with_empty_email_does_not_persist() {
        let store = existing_store("a@x.com", "p1");
        let session = Session::logged_in("alice");

        let mut form = ProfileForm::from_record(&store.record("alice").unwrap());
        form.email = String::new();
        form.bedrooms = 7;

        let view = submit(&store, &session, &form).unwrap();
        assert!(has_notice(&view, NoticeLevel::Error, "Email and Arrondissement"));
        // Edited values are echoed back for correction…
        assert_eq!(view.form.bedrooms, 7);
        assert_eq!(view.form.email, "");
        // …but the stored record is untouched.
        let stored = store.record("alice").unwrap();
        assert_eq!(stored.email, "a@x.com");
        assert_eq!(stored.bedrooms, 1);
    }

    #[test]
    fn test_submit_overwrites_every_field() {
        let store = existing_store("a@x.com", "p1");
        let session = Session::logged_in("alice");

        let mut form = ProfileForm::from_record(&store.record("alice").unwrap());
        form.amenities = vec!["WiFi".to_string(), "Balcony".to_string()];

        let view = submit(&store, &session, &form).unwrap();
        assert!(has_notice(&view, NoticeLevel::Success, "updated successfully"));

        let stored = store.record("alice").unwrap();
        assert_eq!(stored.amenities, vec!["WiFi", "Balcony"]);
        // Unchanged inputs round-trip as submitted, not as a partial patch.
        assert_eq!(stored.email, form.email);
        assert_eq!(stored.arrondissement, form.arrondissement);
        assert_eq!(stored.bedrooms, form.bedrooms);
    }

    #[test]
    fn test_password_updates_only_when_entered() {
        let store = existing_store("a@x.com", "p1");
        let session = Session::logged_in("alice");

        let mut form = ProfileForm::from_record(&store.record("alice").unwrap());
        form.new_password = "p2".to_string();
        submit(&store, &session, &form).unwrap();
        assert_eq!(store.record("alice").unwrap().password, "p2");

        form.new_password = String::new();
        form.bedrooms = 3;
        submit(&store, &session, &form).unwrap();
        let stored = store.record("alice").unwrap();
        assert_eq!(stored.password, "p2");
        assert_eq!(stored.bedrooms, 3);
    }

    #[test]
    fn test_unwritable_store_fails_the_request() {
        let store = MemoryStore::poisoned();
        let session = Session::logged_in("alice");

        // First visit needs to persist the default record and cannot.
        let err = visit(&store, &session).unwrap_err();
        assert!(err.contains("Failed to write"));
    }

    #[test]
    fn test_deleted_file_triggers_fresh_bootstrap() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        let store = FileStore::at(&path);
        let session = Session::logged_in("alice");

        visit(&store, &session).unwrap();
        assert!(path.exists());

        fs::remove_file(&path).unwrap();
        assert!(store.load().records.is_empty());

        let view = visit(&store, &session).unwrap();
        assert!(has_notice(&view, NoticeLevel::Warning, "No profile found"));
        let raw = fs::read_to_string(&path).unwrap();
        let records: HashMap<String, ProfileRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records["alice"], ProfileRecord::bootstrap(None));
    }

    #[test]
    fn test_logout_clears_session_and_confirms() {
        let mut session = Session::logged_in("alice");
        let notice = logout(&mut session);

        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(notice.text.contains("logged out"));
        assert!(!session.logged_in);
        assert!(session.username.is_none());
        assert_eq!(session.page, "home");
    }
}
