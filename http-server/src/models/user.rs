use serde::Serialize;

// User echoed back by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl MockUser {
    pub const DEFAULT_EMAIL: &'static str = "user@example.com";

    pub fn with_email(email: Option<String>) -> Self {
        Self {
            id: "1".to_string(),
            email,
        }
    }
}

impl Default for MockUser {
    fn default() -> Self {
        Self::with_email(Some(Self::DEFAULT_EMAIL.to_string()))
    }
}
