use parking_lot::Mutex;
use std::sync::Arc;

use crate::latency::Latency;
use crate::types::User;
use crate::validation::PASSWORDS_DO_NOT_MATCH;

pub const MISSING_CREDENTIALS: &str = "Please provide both email and password";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Holds the mock signed-in user. Nothing is persisted or checked remotely.
#[derive(Clone)]
pub struct UserStore {
    latency: Latency,
    state: Arc<Mutex<UserState>>,
}

impl UserStore {
    pub fn new(latency: Latency) -> Self {
        UserStore {
            latency,
            state: Arc::new(Mutex::new(UserState::default())),
        }
    }

    pub fn state(&self) -> UserState {
        self.state.lock().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.lock().user.clone()
    }

    fn begin(&self) {
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;
    }

    fn fail(&self, message: &str) -> bool {
        let mut state = self.state.lock();
        state.error = Some(message.to_string());
        state.loading = false;
        false
    }

    fn sign_in(&self, email: &str) -> bool {
        let mut state = self.state.lock();
        state.user = Some(User::placeholder(email));
        state.loading = false;
        tracing::info!(email, "Mock user signed in");
        true
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.begin();
        tokio::time::sleep(self.latency.session).await;

        if email.is_empty() || password.is_empty() {
            return self.fail(MISSING_CREDENTIALS);
        }
        self.sign_in(email)
    }

    pub async fn register(&self, email: &str, password: &str, confirm_password: &str) -> bool {
        self.begin();
        tokio::time::sleep(self.latency.session).await;

        if email.is_empty() || password.is_empty() {
            return self.fail(MISSING_CREDENTIALS);
        }
        if password != confirm_password {
            return self.fail(PASSWORDS_DO_NOT_MATCH);
        }
        self.sign_in(email)
    }

    pub fn logout(&self) {
        self.state.lock().user = None;
    }

    pub fn clear_error(&self) {
        self.state.lock().error = None;
    }

    pub fn set_user(&self, user: User) {
        self.state.lock().user = Some(user);
    }
}
