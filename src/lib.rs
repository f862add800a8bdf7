//! # VANO Roster API
//!
//! An HTTP service built with Rust and Axum that generates CSV rosters of
//! synthetic user accounts for a range of VANO numbers.
//!
//! ## Overview
//!
//! Each generated row carries a name (the VANO), an email `<vano>@<domain>`,
//! a random password, a role (`teacher` or `student`) and a department. An
//! optional free-text instruction (e.g. "don't add user 610") is applied to
//! the generated CSV by a Gemini model before the file is returned.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/
//! │   └── rosters/     # Roster generation endpoints
//! ├── docs.rs          # OpenAPI documentation
//! ├── logging.rs       # Request logging middleware
//! ├── router.rs        # Main application router
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Validated JSON extractor
//! crates/
//! ├── roster-core/          # AppError, password generation
//! ├── roster-models/        # Role, Vano, request/response DTOs
//! ├── roster-config/        # Environment configuration
//! ├── roster-generator/     # Limits, records, CSV, pipeline
//! ├── roster-ai/            # Gemini client and reply checks
//! ├── roster-observability/ # Tracing setup
//! └── roster-cli/           # Command-line front end
//! ```
//!
//! ## Batch limits
//!
//! | Case | Rule |
//! |------|------|
//! | Range | `vano_start` must be smaller than `vano_end` |
//! | Without instruction | at most 50,000 users |
//! | With instruction | at most 290 users |
//!
//! ## Quick Start
//!
//! ```bash
//! GOOGLE_API_KEY=... cargo run --bin vano-roster
//! curl -X POST localhost:3000/api/rosters \
//!   -H 'content-type: application/json' \
//!   -d '{"vano_start":1,"vano_end":3,"department":"BSC","role":"student"}'
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod logging;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use roster_ai;
pub use roster_config;
pub use roster_core;
pub use roster_generator;
pub use roster_models;
