//! Snippets Module
//!
//! CRUD over code/text snippets scoped to an authenticated owner.
//!
//! # Module Structure
//!
//! ```text
//! snippets/
//! ├── mod.rs          - Module exports and documentation
//! ├── controller.rs   - Validation, ownership and status rules
//! ├── handlers.rs     - Axum handler adapters
//! ├── store.rs        - SnippetStore trait and StoreError
//! ├── memory.rs       - In-memory store
//! └── db.rs           - PostgreSQL store
//! ```
//!
//! # Ownership
//!
//! Every mutation loads the stored snippet first and requires the session
//! user to be its owner. Reads are public.

pub mod controller;
pub mod db;
pub mod handlers;
pub mod memory;
pub mod store;

pub use controller::SnippetController;
pub use db::PgSnippetStore;
pub use memory::InMemorySnippetStore;
pub use store::{SharedSnippetStore, SnippetStore, StoreError};
