//! # Roster Models
//!
//! Domain models and DTOs for the VANO roster generator.
//!
//! # Modules
//!
//! - [`roles`]: The closed set of roles a generated account can carry
//! - [`users`]: VANO identifiers and generated user records
//! - [`rosters`]: Request and response DTOs for roster generation
//!
//! # Example
//!
//! ```ignore
//! use roster_models::{Role, RosterRequest, Vano};
//!
//! let role: Role = "student".parse()?;
//! let email = Vano::new(610).email("example.com");
//! assert_eq!(email, "610@example.com");
//! ```

pub mod roles;
pub mod rosters;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use roles::{Role, RoleParseError};
pub use rosters::{
    AI_EDITED_FILENAME, BatchLimitsResponse, PLAIN_FILENAME, RosterArtifact,
    RosterPreviewResponse, RosterRequest,
};
pub use users::{CSV_HEADER, UserRecord, Vano};
