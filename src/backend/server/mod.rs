//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and store selection
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env`
//! 2. **Store Selection**: PostgreSQL when `DATABASE_URL` connects, otherwise in-memory
//! 3. **State Creation**: `AppState` with the snippet controller and JWT secret
//! 4. **Router Creation**: Public and authenticated routes merged
//!
//! # Example
//!
//! ```rust,no_run
//! use snipnet::backend::server::create_app;
//! use snipnet::shared::AppConfig;
//!
//! # async fn example() {
//! let config = AppConfig::from_env().unwrap();
//! let app = create_app(&config).await;
//! # }
//! ```

/// Application state management
pub mod state;

/// Database connection and store selection
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
