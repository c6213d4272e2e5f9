#[macro_export]
macro_rules! field_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Boolean,
                "boolean",
                Flag,
                Checkbox,
                supports_length = false,
                supports_format = false,
                supports_range = false,
                requires_options = false,
                requires_target = false
            ),
            (
                Date,
                "date",
                Temporal,
                Date,
                supports_length = false,
                supports_format = false,
                supports_range = false,
                requires_options = false,
                requires_target = false
            ),
            (
                Enum,
                "enum",
                Choice,
                Select,
                supports_length = false,
                supports_format = false,
                supports_range = false,
                requires_options = true,
                requires_target = false
            ),
            (
                Number,
                "number",
                Numeric,
                Number,
                supports_length = false,
                supports_format = false,
                supports_range = true,
                requires_options = false,
                requires_target = false
            ),
            (
                Reference,
                "reference",
                Link,
                ReferencePicker,
                supports_length = false,
                supports_format = false,
                supports_range = false,
                requires_options = false,
                requires_target = true
            ),
            (
                Text,
                "string",
                Textual,
                Text,
                supports_length = true,
                supports_format = true,
                supports_range = false,
                requires_options = false,
                requires_target = false
            ),
        }
    };
}

#[macro_export]
macro_rules! field_type_registry {
    ($macro:ident) => {
        $crate::field_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::field_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $ty:expr; @entries $( ($variant:ident, $literal:literal, $family:ident, $input:ident, supports_length = $supports_length:expr, supports_format = $supports_format:expr, supports_range = $supports_range:expr, requires_options = $requires_options:expr, requires_target = $requires_target:expr) ),* $(,)? ) => {
        match $ty {
            $(
                $crate::FieldType::$variant => $crate::FieldTypeMetadata {
                    literal: $literal,
                    family: $crate::ValueFamily::$family,
                    input: $crate::InputHint::$input,
                    supports_length: $supports_length,
                    supports_format: $supports_format,
                    supports_range: $supports_range,
                    requires_options: $requires_options,
                    requires_target: $requires_target,
                },
            )*
        }
    };
}
