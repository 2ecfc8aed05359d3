//! Admin gate.
//!
//! A cosmetic gate, not a security boundary: the typed password is compared
//! against the single configured secret and, on match, a persisted boolean
//! flag cookie is set. The flag alone gates subsequent loads (no token, no
//! expiry, no server round-trip) and it is trivially forgeable by anyone
//! who can set a cookie. The password comparison itself is constant-time.

use axum_extra::extract::CookieJar;
use subtle::ConstantTimeEq;

/// Admin flag cookie name.
pub const ADMIN_COOKIE: &str = "linkboard_admin";

/// The flag value. Presence with this exact value is the whole check.
pub const ADMIN_FLAG: &str = "1";

/// Constant-time comparison of the typed password with the configured one.
pub fn password_matches(input: &str, configured: &str) -> bool {
    let input = input.as_bytes();
    let configured = configured.as_bytes();
    input.len() == configured.len() && input.ct_eq(configured).unwrap_u8() == 1
}

/// Whether the admin flag cookie is present and set.
pub fn is_admin(jar: &CookieJar) -> bool {
    jar.get(ADMIN_COOKIE)
        .map(|c| c.value() == ADMIN_FLAG)
        .unwrap_or(false)
}

/// Set-Cookie header value establishing the flag.
pub fn login_cookie() -> String {
    format!("{ADMIN_COOKIE}={ADMIN_FLAG}; Path=/; HttpOnly; SameSite=Strict")
}

/// Set-Cookie header value clearing the flag.
pub fn logout_cookie() -> String {
    format!("{ADMIN_COOKIE}=; Path=/; HttpOnly; Max-Age=0")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_comparison_is_exact() {
        assert!(password_matches("secret", "secret"));
        assert!(!password_matches("secret", "Secret"));
        assert!(!password_matches("secre", "secret"));
        assert!(!password_matches("", "secret"));
    }

    #[test]
    fn cookie_values_round_trip_the_flag() {
        assert!(login_cookie().starts_with("linkboard_admin=1;"));
        assert!(logout_cookie().contains("Max-Age=0"));
    }
}
