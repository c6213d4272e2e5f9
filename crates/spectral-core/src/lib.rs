//! ## Crate layout
//! - `validate`: field, entity, and record validation against schema definitions.
//! - `value`: script-style coercion of untrusted JSON values.
//! - `status`: appointment lifecycle state machine and optimistic status updates.
//! - `view`: framework-independent form and table models driven by definitions.

pub mod status;
pub mod validate;
pub mod value;
pub mod view;

pub use spectral_schema as schema;
pub use validate::{
    RecordReport, ValidationError, apply_defaults, validate_entity, validate_field,
    validate_record,
};

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] status::TransitionError),

    #[error(transparent)]
    UnknownStatus(#[from] status::UnknownStatus),

    #[error(transparent)]
    Form(#[from] view::FormError),
}
