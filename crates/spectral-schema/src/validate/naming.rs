use crate::{MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN};

/// Ensure entity names are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("entity name is empty".to_string());
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("entity name '{name}' must be ASCII"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(format!(
            "entity name '{name}' may only contain letters, digits, '_' and '-'"
        ));
    }

    Ok(())
}

/// Field idents are record keys: ASCII identifier characters, no leading digit.
pub(crate) fn validate_field_ident(ident: &str) -> Result<(), String> {
    let Some(first) = ident.chars().next() else {
        return Err("field ident is empty".to_string());
    };

    if ident.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if first.is_ascii_digit() {
        return Err(format!("field ident '{ident}' must not start with a digit"));
    }
    if !ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "field ident '{ident}' may only contain ASCII letters, digits and '_'"
        ));
    }

    Ok(())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_empty_and_oversized_entity_names() {
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name(&"x".repeat(MAX_ENTITY_NAME_LEN + 1)).is_err());
        assert!(validate_entity_name("médecin").is_err());
        assert!(validate_entity_name("match-result").is_ok());
    }

    #[test]
    fn field_idents_are_identifier_shaped() {
        assert!(validate_field_ident("").is_err());
        assert!(validate_field_ident("1st_place").is_err());
        assert!(validate_field_ident("team tag").is_err());
        assert!(validate_field_ident("dateOfBirth").is_ok());
        assert!(validate_field_ident("team_tag").is_ok());
    }

    proptest! {
        #[test]
        fn identifier_shaped_idents_pass(ident in "[a-zA-Z_][a-zA-Z0-9_]{0,63}") {
            prop_assert!(validate_field_ident(&ident).is_ok());
        }

        #[test]
        fn any_disallowed_char_fails(
            head in "[a-z]{1,10}",
            bad in "[^a-zA-Z0-9_]",
            tail in "[a-z]{0,10}",
        ) {
            let ident = format!("{head}{bad}{tail}");
            prop_assert!(validate_field_ident(&ident).is_err());
        }
    }
}
