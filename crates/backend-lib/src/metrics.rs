// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const SIGNUP_CREATED: &str = "auth.signup.created";
pub const SIGNUP_CONFLICT: &str = "auth.signup.conflict";
pub const SIGNIN_SUCCESS: &str = "auth.signin.success";
pub const SIGNIN_NOT_FOUND: &str = "auth.signin.not_found";
pub const SIGNIN_BAD_PASSWORD: &str = "auth.signin.bad_password";
