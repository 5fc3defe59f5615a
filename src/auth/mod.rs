//! Credential checks for the login endpoint.
//!
//! Passwords are compared for exact equality, in constant time to mitigate timing attacks.

use subtle::ConstantTimeEq;

use crate::models::User;

/// Perform constant-time string comparison.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Pick the first candidate whose stored password equals `password`.
///
/// Candidates are expected to already match on email. Users without a stored
/// password never match.
pub fn select_matching_user(candidates: Vec<User>, password: &str) -> Option<User> {
    candidates.into_iter().find(|user| {
        user.password
            .as_deref()
            .is_some_and(|stored| constant_time_compare(stored, password))
    })
}
