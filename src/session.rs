use serde::{Deserialize, Serialize};

// ── Session ──────────────────────────────────────────────────────────────────
//
// Per-visitor state owned by the hosting runtime and passed explicitly into
// every page call.  The login flow populates it before this page runs; this
// crate only reads the identity and clears it on logout.

/// Name of the page a logged-out visitor lands on.
pub const HOME_PAGE: &str = "home";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Session {
    /// True once the login flow has accepted the visitor.
    #[serde(default)]
    pub logged_in: bool,
    /// Authenticated username; `None` means the visitor must log in again.
    #[serde(default)]
    pub username: Option<String>,
    /// Password captured at login, if the flow chose to keep it around.
    /// Used once, to seed a first-time profile record.
    #[serde(default)]
    pub password: Option<String>,
    /// The page the visitor is currently on.
    #[serde(default)]
    pub page: String,
}

impl Session {
    /// A freshly logged-in session sitting on the profile page.
    pub fn logged_in(username: &str) -> Self {
        Session {
            logged_in: true,
            username: Some(username.to_string()),
            password: None,
            page: "profile".to_string(),
        }
    }

    /// Clears the three keys a logout resets: the authenticated flag, the
    /// username, and the active page.
    pub fn clear(&mut self) {
        self.logged_in = false;
        self.username = None;
        self.page = HOME_PAGE.to_string();
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
