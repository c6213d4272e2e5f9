use convert_case::{Case, Casing};
use serde::Serialize;

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

///
/// SortSpec
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

///
/// DisplayMeta
///
/// Presentation metadata for generated list/detail views.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub singular: String,
    pub plural: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub list_columns: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortSpec>,
}

impl DisplayMeta {
    /// Derive labels from an entity name (`match_result` → `Match Result` /
    /// `Match Results`).
    #[must_use]
    pub fn for_entity(name: &str) -> Self {
        let singular = name.to_case(Case::Title);
        let plural = pluralize(&singular);

        Self {
            icon: None,
            singular,
            plural,
            list_columns: Vec::new(),
            default_sort: None,
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.singular = singular.into();
        self.plural = plural.into();
        self
    }

    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }
}

// english-ish plural for generated labels; override with `labels` otherwise
fn pluralize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }

    let mut chars = lower.chars().rev();
    if let (Some('y'), Some(prev)) = (chars.next(), chars.next())
        && !"aeiou".contains(prev)
    {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_derived_from_entity_name() {
        let display = DisplayMeta::for_entity("match_result");
        assert_eq!(display.singular, "Match Result");
        assert_eq!(display.plural, "Match Results");
    }

    #[test]
    fn pluralize_handles_common_endings() {
        assert_eq!(pluralize("Match"), "Matches");
        assert_eq!(pluralize("Therapy"), "Therapies");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Team"), "Teams");
    }
}
