//! Storage key derivation and filename sanitization.
//!
//! Keys are namespaced under the owning identity so that no two distinct
//! owners can produce a colliding key, even under adversarial filename input:
//! `users/{owner_id}/{unix_millis}-{random}-{sanitized_filename}`.
//!
//! Everything here is a pure function over its arguments (key assembly draws
//! a timestamp and randomness, but performs no I/O) so it can be tested
//! without the metadata store or object storage.

use rand::distr::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

/// Root segment of every owner namespace.
pub const KEY_NAMESPACE_ROOT: &str = "users";

/// Length of the random disambiguator segment appended to the timestamp.
const DISAMBIGUATOR_LEN: usize = 12;

/// Replace every character outside `[A-Za-z0-9.-]` with `_`.
///
/// Total over all input strings and idempotent: the output alphabet is a
/// subset of the allowed set plus `_`, all of which map to themselves.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Namespace prefix for one owner, e.g. `users/5f3a.../`.
pub fn owner_prefix(owner_id: Uuid) -> String {
    format!("{}/{}/", KEY_NAMESPACE_ROOT, owner_id)
}

/// Whether a storage key lies inside the given owner's namespace.
pub fn key_in_owner_namespace(storage_key: &str, owner_id: Uuid) -> bool {
    storage_key.starts_with(&owner_prefix(owner_id))
}

/// Lexical media-category check; the broker never inspects actual bytes.
pub fn is_video_content_type(content_type: &str) -> bool {
    content_type.starts_with("video/")
}

/// Declared size against the configured ceiling; exactly at the ceiling passes.
pub fn within_size_limit(size_bytes: u64, max_bytes: u64) -> bool {
    size_bytes <= max_bytes
}

/// Derive a fresh storage key for an upload.
///
/// Deterministic in shape, non-deterministic in value: the owner namespace
/// prevents cross-owner collisions, the millisecond timestamp plus a
/// 12-character alphanumeric suffix prevents same-owner collisions.
pub fn build_storage_key(owner_id: Uuid, filename: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let random: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DISAMBIGUATOR_LEN)
        .map(char::from)
        .collect();
    format!(
        "{}{}-{}-{}",
        owner_prefix(owner_id),
        timestamp,
        random,
        sanitize_filename(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_filename("clip (final).mp4"), "clip__final_.mp4");
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("sp\u{00e9}cial vid\u{00e9}o.mov"), "sp_cial_vid_o.mov");
        assert_eq!(sanitize_filename("ok-name.1.webm"), "ok-name.1.webm");
    }

    #[test]
    fn test_sanitize_is_total_and_idempotent() {
        let inputs = [
            "",
            "clip.mp4",
            "\u{0000}\u{0001}weird",
            "///",
            "名前.mp4",
            "a b c d e",
            "already_sanitized_.mp4",
        ];
        for input in inputs {
            let once = sanitize_filename(input);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {:?}", input);
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'),
                "disallowed character in output for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_content_type_prefix_check() {
        assert!(is_video_content_type("video/mp4"));
        assert!(is_video_content_type("video/webm"));
        assert!(!is_video_content_type("image/png"));
        assert!(!is_video_content_type("application/video"));
        assert!(!is_video_content_type(""));
        // Lexical only: the category prefix must open the string.
        assert!(!is_video_content_type(" video/mp4"));
    }

    #[test]
    fn test_size_limit_inclusive_at_ceiling() {
        assert!(within_size_limit(0, 100));
        assert!(within_size_limit(100, 100));
        assert!(!within_size_limit(101, 100));
    }

    #[test]
    fn test_key_embeds_owner_namespace() {
        let owner = Uuid::new_v4();
        let key = build_storage_key(owner, "clip.mp4");
        assert!(key.starts_with(&format!("users/{}/", owner)));
        assert!(key.ends_with("-clip.mp4"));
        assert!(key_in_owner_namespace(&key, owner));
        assert!(!key_in_owner_namespace(&key, Uuid::new_v4()));
    }

    #[test]
    fn test_identical_inputs_never_collide() {
        let owner = Uuid::new_v4();
        let a = build_storage_key(owner, "clip.mp4");
        let b = build_storage_key(owner, "clip.mp4");
        assert_ne!(a, b);
    }

    #[test]
    fn test_adversarial_filename_cannot_escape_namespace() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let key = build_storage_key(owner, &format!("../{}/{}.mp4", KEY_NAMESPACE_ROOT, other));
        assert!(key_in_owner_namespace(&key, owner));
        assert!(!key.contains(&format!("/{}/", other)));
    }
}
