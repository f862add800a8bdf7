//! # Roster Core
//!
//! Foundational types shared by the roster generator crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Random password generation for generated accounts
//!
//! # Example
//!
//! ```ignore
//! use roster_core::errors::AppError;
//! use roster_core::password::generate_password;
//!
//! let error = AppError::unprocessable(anyhow::anyhow!("Starting value must be smaller"));
//! let password = generate_password(10);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{
    DEFAULT_PASSWORD_LENGTH, PASSWORD_ALPHABET, generate_password, is_alphabet_password,
};
