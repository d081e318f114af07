mod authorization;
mod error;
mod functions;
mod traits;
mod types;
mod validation;

pub use authorization::{
    authorize, is_gated_path, login_redirect, Authorization, DASHBOARD_PATH, LOGIN_PATH,
};
pub use error::AuthError;
pub use functions::{
    calculate_expiry, generate_session_id, is_session_expired, sign_in_error_code,
    sign_in_error_message, CALLBACK_ROUTE_ERROR, CREDENTIALS_SIGNIN,
};
pub use traits::{Result, SessionRepository};
pub use types::{Credentials, CredentialsForm, Session, SessionId, User};
pub use validation::{is_valid_email, validate_credentials, validate_return_to, MIN_PASSWORD_LEN};
