mod session;
mod user;

pub use session::{auth_cookie_header, has_auth_cookie, session_token};
pub use user::MockUser;
