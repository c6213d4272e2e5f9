mod access;
mod display;
mod entity;
mod field;
mod rule;

pub use access::*;
pub use display::*;
pub use entity::*;
pub use field::*;
pub use rule::*;
