//! Password hashing for the credential store

use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 password, lowercase hex
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}
