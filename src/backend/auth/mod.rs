//! Authentication Module
//!
//! Turns bearer tokens into request sessions. User accounts and token
//! issuance workflows live outside this service; `create_token` exists for
//! operators and tests.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── sessions.rs     - Session type and JWT handling
//! ```

/// Session type and JWT token handling
pub mod sessions;

pub use sessions::{create_token, session_from_token, verify_token, Claims, Session};
