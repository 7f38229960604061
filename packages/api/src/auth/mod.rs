//! Authentication: local accounts, password hashing, and session identity.

pub mod accounts;
mod password;
mod session;

pub use accounts::{LoginRequest, RegisterRequest};
pub use password::{hash_password, verify_password};
pub use session::{
    current_email, ensure_owner, session_layer, sign_in, sign_out, AuthUser,
    SESSION_USER_EMAIL_KEY,
};
