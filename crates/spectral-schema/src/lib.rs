//! Declarative entity schema: field and entity definitions, schema-level
//! validation, and the constructed `EntityRegistry` the runtime looks
//! definitions up from.

pub mod error;
pub mod node;
pub mod registry;
pub mod validate;

/// Maximum length for entity schema identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

pub use spectral_primitives::FieldType;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        registry::EntityRegistry,
        validate::ValidateNode,
    };
    pub use serde::Serialize;
    pub use serde_json::{Map, Value};
    pub use spectral_primitives::{FieldType, InputHint};
}

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("schema validation failed:\n{0}")]
    Validation(ErrorTree),

    #[error("entity '{0}' already registered")]
    DuplicateEntity(String),

    #[error("entity '{0}' not found")]
    EntityNotFound(String),

    #[error("schema export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl From<ErrorTree> for SchemaError {
    fn from(tree: ErrorTree) -> Self {
        Self::Validation(tree)
    }
}
