//! Ownership authorization.
//!
//! The ownership check is an explicit pure function over the caller identity
//! and a looked-up record, so it can be unit-tested by injecting a fake
//! record, with no network dependency.

use crate::models::VideoRecord;
use uuid::Uuid;

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

/// A read credential may be issued if and only if the record's owner is the caller.
pub fn authorize(caller_id: Uuid, record: &VideoRecord) -> AccessDecision {
    if record.owner_id == caller_id {
        AccessDecision::Allow
    } else {
        AccessDecision::Deny
    }
}
