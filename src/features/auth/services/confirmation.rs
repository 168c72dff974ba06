//! Keyed, time-windowed confirmation codes.
//!
//! A code proves email ownership during sign-up. It is an HMAC-SHA256 over
//! the user's identity (id, username, email) and an issue timestamp, keyed
//! with the application secret, rendered as `<base36 timestamp>-<hex mac>`.
//! Binding the MAC to identity fields means a code stops verifying if the
//! account's username or email changes; the timestamp bounds the validity
//! window without any server-side storage.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::Duration;

use crate::features::users::models::User;

type HmacSha256 = Hmac<Sha256>;

/// MAC bytes kept in the rendered code (32 hex chars)
const MAC_LEN: usize = 16;

/// Tolerated clock skew for codes issued "in the future"
const MAX_CLOCK_SKEW_SECS: i64 = 60;

const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Issues and verifies confirmation codes
#[derive(Clone)]
pub struct ConfirmationCodes {
    key: Vec<u8>,
    ttl: Duration,
}

impl ConfirmationCodes {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        // Domain-separate from the JWT signing key
        let key = format!("{}:confirmation", secret).into_bytes();
        Self { key, ttl }
    }

    /// Generate a code for `user` issued at `now`
    pub fn make_code(&self, user: &User, now: DateTime<Utc>) -> String {
        let ts = now.timestamp().max(0) as u64;
        let mac = self.mac_for(user, ts);
        format!("{}-{}", base36_encode(ts), hex::encode(&mac[..MAC_LEN]))
    }

    /// Verify `code` for `user` at time `now`. Returns false for malformed,
    /// forged, expired, or not-yet-valid codes.
    pub fn check_code(&self, user: &User, code: &str, now: DateTime<Utc>) -> bool {
        let Some((ts_part, mac_part)) = code.split_once('-') else {
            return false;
        };
        let Some(ts) = base36_decode(ts_part) else {
            return false;
        };
        let Ok(tag) = hex::decode(mac_part) else {
            return false;
        };
        if tag.len() != MAC_LEN {
            return false;
        }

        let age = now.timestamp() - ts as i64;
        if age > self.ttl.as_secs() as i64 || age < -MAX_CLOCK_SKEW_SECS {
            return false;
        }

        let mut mac = HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(self.message_for(user, ts).as_bytes());
        mac.verify_truncated_left(&tag).is_ok()
    }

    fn message_for(&self, user: &User, ts: u64) -> String {
        format!("{}\0{}\0{}\0{}", user.id, user.username, user.email, ts)
    }

    fn mac_for(&self, user: &User, ts: u64) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(self.message_for(user, ts).as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

fn base36_encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(BASE36_ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).expect("alphabet is ASCII")
}

fn base36_decode(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for c in s.bytes() {
        let digit = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'z' => c - b'a' + 10,
            _ => return None,
        };
        n = n.checked_mul(36)?.checked_add(digit as u64)?;
    }
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use uuid::Uuid;

    fn test_user(username: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: Default::default(),
            is_superuser: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn codes() -> ConfirmationCodes {
        ConfirmationCodes::new("a-test-secret-of-sufficient-length", Duration::from_secs(3600))
    }

    #[test]
    fn fresh_code_verifies() {
        let codes = codes();
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        let code = codes.make_code(&user, now);
        assert!(codes.check_code(&user, &code, now));
        // Still valid shortly before expiry
        assert!(codes.check_code(&user, &code, now + TimeDelta::seconds(3599)));
    }

    #[test]
    fn expired_code_fails() {
        let codes = codes();
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        let code = codes.make_code(&user, now);
        assert!(!codes.check_code(&user, &code, now + TimeDelta::seconds(3601)));
    }

    #[test]
    fn future_code_fails_beyond_skew() {
        let codes = codes();
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        let code = codes.make_code(&user, now + TimeDelta::seconds(300));
        assert!(!codes.check_code(&user, &code, now));
    }

    #[test]
    fn code_is_bound_to_user_identity() {
        let codes = codes();
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        let code = codes.make_code(&user, now);

        let other = test_user("reader", "reader@example.com");
        assert!(!codes.check_code(&other, &code, now), "different id");

        let mut renamed = user.clone();
        renamed.username = "writer".to_string();
        assert!(!codes.check_code(&renamed, &code, now), "changed username");

        let mut remailed = user.clone();
        remailed.email = "writer@example.com".to_string();
        assert!(!codes.check_code(&remailed, &code, now), "changed email");
    }

    #[test]
    fn garbage_codes_fail_without_panicking() {
        let codes = codes();
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        for garbage in ["", "-", "abc", "zzz-zzz", "123-", "-deadbeef", "1!-00"] {
            assert!(!codes.check_code(&user, garbage, now), "{:?}", garbage);
        }
    }

    #[test]
    fn wrong_secret_fails() {
        let user = test_user("reader", "reader@example.com");
        let now = Utc::now();
        let code = codes().make_code(&user, now);
        let other =
            ConfirmationCodes::new("another-secret-also-long-enough!", Duration::from_secs(3600));
        assert!(!other.check_code(&user, &code, now));
    }

    #[test]
    fn base36_round_trip() {
        for n in [0u64, 1, 35, 36, 1234567890, u64::MAX] {
            assert_eq!(base36_decode(&base36_encode(n)), Some(n));
        }
        assert_eq!(base36_decode("Z"), None); // uppercase not in alphabet
        assert_eq!(base36_decode(""), None);
    }
}
