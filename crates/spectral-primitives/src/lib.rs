#[macro_use]
mod macros;

use std::fmt;

///
/// FieldType
///
/// Canonical field type discriminant shared by the schema and runtime layers.
/// Payload-carrying variants (enum options, reference targets) live on the
/// schema's `FieldKind`; this type only carries capability metadata.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FieldType {
    Boolean,
    Date,
    Enum,
    Number,
    Reference,
    Text,
}

impl FieldType {
    /// Return the full metadata descriptor for one field type.
    #[must_use]
    pub const fn metadata(self) -> FieldTypeMetadata {
        field_type_registry!(metadata_from_registry, self)
    }

    /// Return the wire literal (`string`, `number`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.metadata().literal
    }

    /// Return the coarse value family used for coercion routing.
    #[must_use]
    pub const fn family(self) -> ValueFamily {
        self.metadata().family
    }

    /// Return the default input widget hint for generated forms.
    #[must_use]
    pub const fn input_hint(self) -> InputHint {
        self.metadata().input
    }

    /// Return whether `min_length` / `max_length` rules apply.
    #[must_use]
    pub const fn supports_length(self) -> bool {
        self.metadata().supports_length
    }

    /// Return whether `email` / `url` / `pattern` rules apply.
    #[must_use]
    pub const fn supports_format(self) -> bool {
        self.metadata().supports_format
    }

    /// Return whether `min` / `max` rules apply.
    #[must_use]
    pub const fn supports_range(self) -> bool {
        self.metadata().supports_range
    }

    /// Return whether a definition must carry a non-empty option list.
    #[must_use]
    pub const fn requires_options(self) -> bool {
        self.metadata().requires_options
    }

    /// Return whether a definition must name a target entity.
    #[must_use]
    pub const fn requires_target(self) -> bool {
        self.metadata().requires_target
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// FieldTypeMetadata
///
/// Capability metadata shared across schema/core layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FieldTypeMetadata {
    pub literal: &'static str,
    pub family: ValueFamily,
    pub input: InputHint,
    pub supports_length: bool,
    pub supports_format: bool,
    pub supports_range: bool,
    pub requires_options: bool,
    pub requires_target: bool,
}

///
/// ValueFamily
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueFamily {
    Choice,
    Flag,
    Link,
    Numeric,
    Temporal,
    Textual,
}

///
/// InputHint
///
/// Widget a generated form renders for a field type before rule-specific
/// refinement (an `email` text field still renders as an email input).
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputHint {
    Checkbox,
    Date,
    Number,
    ReferencePicker,
    Select,
    Text,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_match_wire_names() {
        assert_eq!(FieldType::Text.as_str(), "string");
        assert_eq!(FieldType::Reference.to_string(), "reference");
        assert_eq!(FieldType::Enum.as_str(), "enum");
    }

    #[test]
    fn rule_capabilities_are_type_specific() {
        assert!(FieldType::Text.supports_length());
        assert!(FieldType::Text.supports_format());
        assert!(!FieldType::Text.supports_range());
        assert!(FieldType::Number.supports_range());
        assert!(!FieldType::Number.supports_length());
        assert!(FieldType::Enum.requires_options());
        assert!(FieldType::Reference.requires_target());
        assert!(!FieldType::Text.requires_options());
        assert!(!FieldType::Enum.requires_target());
    }

    #[test]
    fn input_hints_follow_family() {
        assert_eq!(FieldType::Boolean.input_hint(), InputHint::Checkbox);
        assert_eq!(FieldType::Enum.input_hint(), InputHint::Select);
        assert_eq!(FieldType::Reference.family(), ValueFamily::Link);
    }
}
