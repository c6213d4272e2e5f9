use super::{validate_entity, validate_field};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use spectral_schema::node::{FieldDefinition, FieldList};

fn arb_blank() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![Just(None), Just(Some(Value::Null)), Just(Some(json!("")))]
}

fn arb_label() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?"
}

fn arb_field(label: String) -> impl Strategy<Value = FieldDefinition> {
    prop_oneof![
        Just(FieldDefinition::text("f", label.clone())),
        Just(FieldDefinition::number("f", label.clone())),
        Just(FieldDefinition::boolean("f", label.clone())),
        Just(FieldDefinition::date("f", label.clone())),
        Just(FieldDefinition::enumeration("f", label.clone(), ["a", "b"])),
        Just(FieldDefinition::reference("f", label, "team")),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z@.:/ ]{0,12}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn blank_required_names_the_label(
        (label, field) in arb_label().prop_flat_map(|l| (Just(l.clone()), arb_field(l))),
        blank in arb_blank(),
    ) {
        let message = validate_field(blank.as_ref(), &field.clone().required());
        prop_assert_eq!(message, Some(format!("{label} is required")));

        prop_assert_eq!(validate_field(blank.as_ref(), &field), None);
    }

    #[test]
    fn min_length_boundary(m in 1usize..24, ch in prop_oneof![Just('x'), Just('é'), Just('👻')]) {
        let field = FieldDefinition::text("f", "Name").min_length(m);
        let short = json!(ch.to_string().repeat(m - 1));
        let exact = json!(ch.to_string().repeat(m));

        // zero-length is blank, so optional and always valid
        prop_assert_eq!(validate_field(Some(&short), &field).is_some(), m > 1);
        prop_assert_eq!(validate_field(Some(&exact), &field), None);
    }

    #[test]
    fn max_length_boundary(m in 1usize..24) {
        let field = FieldDefinition::text("f", "Name").max_length(m);

        prop_assert_eq!(validate_field(Some(&json!("y".repeat(m))), &field), None);
        prop_assert_eq!(
            validate_field(Some(&json!("y".repeat(m + 1))), &field),
            Some(format!("Name must be at most {m} characters"))
        );
    }

    #[test]
    fn numeric_bounds_are_inclusive(lo in -100_000i64..100_000, span in 0i64..10_000) {
        let hi = lo + span;
        #[allow(clippy::cast_precision_loss)]
        let field = FieldDefinition::number("f", "Score").min(lo as f64).max(hi as f64);

        prop_assert_eq!(validate_field(Some(&json!(lo)), &field), None);
        prop_assert_eq!(validate_field(Some(&json!(hi)), &field), None);
        prop_assert_eq!(
            validate_field(Some(&json!(lo - 1)), &field),
            Some(format!("Score must be at least {lo}"))
        );
        prop_assert_eq!(
            validate_field(Some(&json!(hi + 1)), &field),
            Some(format!("Score must be at most {hi}"))
        );
    }

    #[test]
    fn custom_message_is_returned_verbatim(message in "[a-z ]{1,20}", value in arb_value()) {
        let expected = message.clone();
        let field = FieldDefinition::text("f", "Any").custom(move |_| message.clone());

        let outcome = validate_field(Some(&value), &field);
        if crate::value::is_blank(Some(&value)) {
            prop_assert_eq!(outcome, None);
        } else {
            prop_assert_eq!(outcome, Some(expected));
        }
    }

    #[test]
    fn entity_errors_only_name_declared_fields(
        data in prop::collection::btree_map("[a-d]", arb_value(), 0..6),
    ) {
        let fields: FieldList = [
            FieldDefinition::text("a", "A").required().min_length(3),
            FieldDefinition::number("b", "B").min(0.0),
            FieldDefinition::boolean("c", "C").required(),
        ]
        .into_iter()
        .collect();
        let data: Map<String, Value> = data.into_iter().collect();

        let errors = validate_entity(&data, &fields);
        for (key, message) in &errors {
            prop_assert!(fields.contains(key));
            prop_assert!(!message.is_empty());
        }
    }
}
