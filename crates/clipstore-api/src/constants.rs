//! API-wide constants.

/// Path prefix for all versioned endpoints.
pub const API_PREFIX: &str = "/api/v0";

/// Cookie read by the auth middleware when no Authorization header is present.
pub const SESSION_COOKIE: &str = "session";
