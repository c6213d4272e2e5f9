//! ## Crate layout
//! - `core`: field, entity and record validation, the appointment status
//!   machine, and form/table view models.
//! - `error`: the public error taxonomy every crate error converts into.
//! - `primitives`: field type metadata shared by schema and runtime.
//! - `schema`: entity/field definitions and the `EntityRegistry`.
//! - `theme`: palettes, contrast auditing, CSS variables and theme selection
//!   (feature `theme`, on by default).
//!
//! `prelude` covers what application code touches day to day.

pub use spectral_core as core;
pub use spectral_primitives as primitives;
pub use spectral_schema as schema;
#[cfg(feature = "theme")]
pub use spectral_theme as theme;

pub mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, ErrorKind, ErrorOrigin,
        core::{
            RecordReport, apply_defaults,
            status::{Appointment, AppointmentStatus, StatusManager},
            validate_entity, validate_field, validate_record,
            view::{FormModel, TableModel},
        },
        schema::prelude::*,
    };

    #[cfg(feature = "theme")]
    pub use crate::theme::prelude::*;
}
