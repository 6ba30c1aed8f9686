/// Base URL of the expense API, normalized so paths can be appended safely.
#[derive(Debug, Clone)]
pub struct ApiUrl(String);

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ApiUrl {
    /// Creates a new ApiUrl, dropping any trailing slash.
    pub fn new(base: &str) -> Self {
        Self(base.trim_end_matches('/').to_string())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", self.0, trimmed_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalizes_slashes() {
        let url = ApiUrl::new("http://localhost:5000/");
        assert_eq!(
            url.append_path("/api/expenses/daily").as_ref(),
            "http://localhost:5000/api/expenses/daily"
        );
        assert_eq!(
            url.append_path("api/auth/login").as_ref(),
            "http://localhost:5000/api/auth/login"
        );
    }
}
