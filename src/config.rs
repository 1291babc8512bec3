//! Roster endpoint configuration.

/// Where the roster is served when nothing else is configured.
pub const DEFAULT_GRADES_URL: &str = "http://localhost:5050/api/v1/grades";

/// Settings for the roster session, shared with the view tree through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Full URL of the grades endpoint (GET, JSON array of students).
    pub grades_url: String,
}

impl RosterConfig {
    pub fn new(grades_url: impl Into<String>) -> Self {
        Self {
            grades_url: grades_url.into(),
        }
    }

    /// Point the config at a different server, keeping the `/api/v1/grades` path.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(format!("{}/api/v1/grades", base_url.trim_end_matches('/')))
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRADES_URL)
    }
}
