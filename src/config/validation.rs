//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, polling budget > 0)
//! - Check that URLs and addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: Web3Config → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;

use crate::config::schema::Web3Config;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human readable description.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &Web3Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.rpc.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "rpc.url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("rpc.url", e.to_string())),
    }

    if config.rpc.chain_id == 0 {
        errors.push(ValidationError::new("rpc.chain_id", "must be non-zero"));
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError::new("rpc.timeout_secs", "must be greater than 0"));
    }

    if let Some(registry) = &config.rpc.ens_registry {
        if registry.parse::<Address>().is_err() {
            errors.push(ValidationError::new("rpc.ens_registry", "not a valid address"));
        }
    }

    if let Some(from) = &config.credential.from_address {
        if from.parse::<Address>().is_err() {
            errors.push(ValidationError::new("credential.from_address", "not a valid address"));
        }
    }

    if config.credential.private_key_env.trim().is_empty() {
        errors.push(ValidationError::new("credential.private_key_env", "must not be empty"));
    }

    if config.gas.default_gas_limit == 0 {
        errors.push(ValidationError::new("gas.default_gas_limit", "must be greater than 0"));
    }

    if config.receipts.poll_attempts == 0 {
        errors.push(ValidationError::new("receipts.poll_attempts", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
