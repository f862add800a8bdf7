//! # Roster CLI
//!
//! Command-line front end for the VANO roster generator.
//!
//! This library crate holds the input collection and output writing used by
//! the `roster-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_cli::{RosterArgs, collect_request, write_artifact};
//!
//! let request = collect_request(&args)?;
//! let artifact = generate_roster(&request, &settings, Some(ai)).await?;
//! let destination = write_artifact(&artifact, args.output.as_deref())?;
//! ```

pub mod inputs;
pub mod output;

pub use inputs::{RosterArgs, collect_request};
pub use output::{Destination, write_artifact};
