//! Tenant identity, threaded explicitly through every repository and service
//! call. Never ambient, so isolation stays auditable without a request context.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The authenticated owner of a row. Opaque string issued by the identity
/// provider (the JWT `sub` claim).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::Validation("Tenant ID cannot be empty".to_string()));
        }
        Ok(Self(value))
    }

    /// Rebuilds a tenant id from a stored row, which was validated on the way in.
    pub(crate) fn hydrate(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
