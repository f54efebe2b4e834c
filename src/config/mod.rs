//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Web3Config (validated, immutable)
//!     → Web3Client::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets are referenced by environment variable name, never stored

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::Web3Config;
pub use schema::RpcConfig;
pub use schema::CredentialConfig;
pub use schema::GasConfig;
pub use schema::ReceiptConfig;
pub use schema::ObservabilityConfig;
