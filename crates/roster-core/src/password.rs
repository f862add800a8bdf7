//! Random password generation for generated accounts.
//!
//! Passwords are drawn from [`PASSWORD_ALPHABET`] using `rand::thread_rng`,
//! a ChaCha-based CSPRNG seeded from the operating system.

use rand::Rng;

/// Letters (both cases), digits and a small symbol set.
pub const PASSWORD_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

pub const DEFAULT_PASSWORD_LENGTH: usize = 10;

/// Generates a password of `length` characters picked uniformly from
/// [`PASSWORD_ALPHABET`].
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if every character of `password` belongs to the alphabet.
pub fn is_alphabet_password(password: &str) -> bool {
    password.bytes().all(|b| PASSWORD_ALPHABET.contains(&b))
}
