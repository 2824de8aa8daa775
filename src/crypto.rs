// ABOUTME: Credential engine with salted password hashing and verification
// ABOUTME: Generates per-user salts and scores password strength for the sign-up flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

//! # Credential Engine
//!
//! Every stored credential is a (hash, salt) pair: a fresh 16-byte random
//! salt per user, and a SHA-256 digest over the decoded salt followed by the
//! password bytes. Plaintext and salt-less hashes are never stored.

use base64::{engine::general_purpose, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::constants::credentials::{SALT_LENGTH, SPECIAL_CHARS};
use crate::errors::{AppError, AppResult};

/// Generate a fresh cryptographically-random salt, base64-encoded.
///
/// A new value is produced on every call; salts are never shared between
/// users.
#[must_use]
pub fn generate_salt() -> String {
    let mut salt = [0u8; SALT_LENGTH];
    OsRng.fill_bytes(&mut salt);
    general_purpose::STANDARD.encode(salt)
}

/// Hash a password against a base64-encoded salt.
///
/// Deterministic: the same (password, salt) pair always yields the same
/// digest, and different salts yield different digests for the same password.
///
/// # Errors
///
/// Returns a configuration error if the stored salt is not valid base64.
/// That indicates corrupt credential material, not a user mistake, and the
/// surrounding operation must abort.
pub fn hash_password(password: &str, salt: &str) -> AppResult<String> {
    let salt_bytes = general_purpose::STANDARD
        .decode(salt)
        .map_err(|e| AppError::config("stored salt is not valid base64").with_source(e))?;

    let mut hasher = Sha256::new();
    hasher.update(&salt_bytes);
    hasher.update(password.as_bytes());
    Ok(general_purpose::STANDARD.encode(hasher.finalize()))
}

/// Verify a password against a stored (hash, salt) pair.
///
/// Recomputes the digest and compares in constant time.
///
/// # Errors
///
/// Returns a configuration error if the stored salt cannot be decoded.
pub fn verify_password(password: &str, stored_hash: &str, salt: &str) -> AppResult<bool> {
    let recomputed = hash_password(password, salt)?;
    Ok(recomputed.as_bytes().ct_eq(stored_hash.as_bytes()).into())
}

/// Password strength classification used by the sign-up advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Two or fewer of the scored traits present
    Weak,
    /// Three traits present
    Medium,
    /// Four traits present
    Strong,
    /// All five traits present
    VeryStrong,
}

impl PasswordStrength {
    /// Display label for the strength meter
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        }
    }
}

/// Score a password by presence of uppercase, lowercase, digit, special
/// character, and length of at least 8.
///
/// Anything shorter than 6 characters is weak outright.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.len() < 6 {
        return PasswordStrength::Weak;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    let mut score = 0;
    if has_upper {
        score += 1;
    }
    if has_lower {
        score += 1;
    }
    if has_digit {
        score += 1;
    }
    if has_special {
        score += 1;
    }
    if password.len() >= 8 {
        score += 1;
    }

    match score {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        4 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}
