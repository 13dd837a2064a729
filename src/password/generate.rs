//! Random password generation

use crate::error::{PassError, Result};
use rand::Rng;

/// Generate a single password of `length` characters drawn uniformly
/// (with replacement) from `pool`.
///
/// Returns [`PassError::EmptyPool`] if the pool has no characters.
pub fn generate_one(pool: &[char], length: usize) -> Result<String> {
    if pool.is_empty() {
        return Err(PassError::EmptyPool);
    }

    let mut rng = rand::rng();
    let mut password = String::with_capacity(length);

    for _ in 0..length {
        let idx = rng.random_range(0..pool.len());
        password.push(pool[idx]);
    }

    Ok(password)
}

/// Generate `quantity` passwords of `length` characters each.
///
/// Every character of every password is an independent uniform draw from
/// `pool`; repeats within and across the batch are allowed.
pub fn generate_batch(pool: &[char], length: usize, quantity: usize) -> Result<Vec<String>> {
    let mut passwords = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        passwords.push(generate_one(pool, length)?);
    }
    Ok(passwords)
}
