//! View models for generated entity screens. They carry no rendering code;
//! a UI layer walks them to draw inputs, messages, and rows.

mod form;
mod table;

pub use form::*;
pub use table::*;
