// ABOUTME: Unit tests for the credential engine
// ABOUTME: Validates salt generation, hash determinism, and verification behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Buddy

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use base64::{engine::general_purpose, Engine};
use health_buddy::crypto::{
    generate_salt, hash_password, password_strength, verify_password, PasswordStrength,
};

#[test]
fn test_salt_is_16_random_bytes() {
    let salt = generate_salt();
    let decoded = general_purpose::STANDARD.decode(&salt).unwrap();
    assert_eq!(decoded.len(), 16);
}

#[test]
fn test_salts_are_never_reused() {
    let salts: Vec<String> = (0..100).map(|_| generate_salt()).collect();
    let mut unique = salts.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), salts.len());
}

#[test]
fn test_hash_is_deterministic_per_pair() {
    let salt = generate_salt();
    let first = hash_password("correct horse", &salt).unwrap();
    let second = hash_password("correct horse", &salt).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_different_salts_yield_different_hashes() {
    let salt_a = generate_salt();
    let salt_b = generate_salt();
    assert_ne!(salt_a, salt_b);

    let hash_a = hash_password("correct horse", &salt_a).unwrap();
    let hash_b = hash_password("correct horse", &salt_b).unwrap();
    assert_ne!(hash_a, hash_b);
}

#[test]
fn test_verify_round_trip() {
    let salt = generate_salt();
    let hash = hash_password("correct horse", &salt).unwrap();

    assert!(verify_password("correct horse", &hash, &salt).unwrap());
    assert!(!verify_password("wrong horse", &hash, &salt).unwrap());
}

#[test]
fn test_undecodable_salt_is_a_config_error() {
    let err = hash_password("anything", "not base64 at all!!!").unwrap_err();
    assert_eq!(err.code, health_buddy::errors::ErrorCode::ConfigError);
}

#[test]
fn test_strength_weak_short_or_plain() {
    assert_eq!(password_strength("abc"), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdef"), PasswordStrength::Weak);
}

#[test]
fn test_strength_medium() {
    // lowercase + digit + length>=8 = 3 traits
    assert_eq!(password_strength("abcdef12"), PasswordStrength::Medium);
}

#[test]
fn test_strength_strong() {
    // upper + lower + digit + length>=8 = 4 traits
    assert_eq!(password_strength("Abcdef12"), PasswordStrength::Strong);
}

#[test]
fn test_strength_very_strong() {
    assert_eq!(password_strength("Abcdef1!"), PasswordStrength::VeryStrong);
}
