/// Configuration injected into the access layer at construction.
///
/// The base URL is explicit state handed to whoever issues requests; there is
/// no module-level default lurking behind the API calls. Tests construct one
/// pointing at a mock server via [`BusinessConfig::new`].
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Full URL of the users collection.
    ///
    /// An empty base yields the bare path, for setups where the console is
    /// served from the same origin as the API.
    pub fn users_url(&self) -> String {
        if self.api_base_url.is_empty() {
            "/api/v1/users".to_owned()
        } else {
            format!("{}/api/v1/users", self.api_base_url.trim_end_matches('/'))
        }
    }

    /// URL of a single user resource.
    pub fn user_url(&self, id: i64) -> String {
        format!("{}/{id}", self.users_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
