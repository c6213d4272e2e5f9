use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// err
/// Push a formatted message onto an `ErrorTree`.
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {{
        $errs.add(format!($($arg)*));
    }};
}

///
/// ErrorTree
///
/// Route-keyed collection of schema validation messages. Messages attach to
/// the current node; children are keyed by route segment (entity name,
/// field ident, ...).
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    pub fn add_at(&mut self, route: impl Into<String>, message: impl ToString) {
        self.children
            .entry(route.into())
            .or_default()
            .add(message);
    }

    /// Attach a child tree under `route`, merging with any existing child.
    pub fn merge_at(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        self.children.entry(route.into()).or_default().merge(other);
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, child) in other.children {
            self.merge_at(route, child);
        }
    }

    /// Fold a node result into this tree under `route`.
    pub fn collect_at(&mut self, route: impl Into<String>, result: Result<(), Self>) {
        if let Err(tree) = result {
            self.merge_at(route, tree);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Flatten into dotted routes (`team.fields.tag`) → messages.
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, Vec<String>> {
        let mut out = BTreeMap::new();
        self.flatten_into(String::new(), &mut out);

        out
    }

    fn flatten_into(&self, prefix: String, out: &mut BTreeMap<String, Vec<String>>) {
        if !self.messages.is_empty() {
            out.entry(prefix.clone())
                .or_insert_with(Vec::new)
                .extend(self.messages.iter().cloned());
        }

        for (route, child) in &self.children {
            let key = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(key, out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, messages) in self.flatten() {
            for message in messages {
                if route.is_empty() {
                    writeln!(f, "{message}")?;
                } else {
                    writeln!(f, "{route}: {message}")?;
                }
            }
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_children_do_not_count_as_errors() {
        let mut tree = ErrorTree::new();
        tree.merge_at("fields", ErrorTree::new());

        assert!(tree.is_empty());
        assert!(tree.result().is_ok());
    }

    #[test]
    fn flatten_renders_dotted_routes() {
        let mut tree = ErrorTree::new();
        err!(tree, "entity has {} problems", 2);
        tree.add_at("tag", "label is empty");

        let mut nested = ErrorTree::new();
        nested.add_at("seed", "min 5 is greater than max 1");
        tree.merge_at("fields", nested);

        let flat = tree.flatten();
        assert_eq!(flat[""], vec!["entity has 2 problems".to_string()]);
        assert_eq!(flat["tag"], vec!["label is empty".to_string()]);
        assert_eq!(
            flat["fields.seed"],
            vec!["min 5 is greater than max 1".to_string()]
        );
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn display_prefixes_routes() {
        let mut tree = ErrorTree::new();
        tree.add_at("name", "entity name is empty");

        assert_eq!(tree.to_string(), "name: entity name is empty\n");
    }
}
