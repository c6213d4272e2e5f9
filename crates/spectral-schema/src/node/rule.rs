use serde_json::{Map, Value};
use std::{fmt, sync::Arc};

///
/// Verdict
///
/// Outcome of a caller-supplied rule. `Invalid(None)` means the rule
/// rejected the value without a message of its own; the caller substitutes
/// the generic `"{label} is invalid"` wording.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Valid,
    Invalid(Option<String>),
}

impl Verdict {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(Some(message.into()))
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Resolve into an error message, using `fallback` when the rule gave none.
    pub fn into_error(self, fallback: impl FnOnce() -> String) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(Some(message)) => Some(message),
            Self::Invalid(None) => Some(fallback()),
        }
    }
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Self::Valid } else { Self::Invalid(None) }
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Self::Invalid(Some(message.to_string()))
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Self::Invalid(Some(message))
    }
}

impl<E: Into<Self>> From<Result<(), E>> for Verdict {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(e) => e.into(),
        }
    }
}

///
/// CustomRule
///
/// Field-level predicate. Receives the raw (non-empty) value.
///

#[derive(Clone)]
pub struct CustomRule(Arc<dyn Fn(&Value) -> Verdict + Send + Sync>);

impl CustomRule {
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn(&Value) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self(Arc::new(move |value| f(value).into()))
    }

    #[must_use]
    pub fn check(&self, value: &Value) -> Verdict {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}

///
/// EntityRule
///
/// Whole-record predicate, run after every field passes.
///

#[derive(Clone)]
pub struct EntityRule(Arc<dyn Fn(&Map<String, Value>) -> Verdict + Send + Sync>);

impl EntityRule {
    pub fn new<F, V>(f: F) -> Self
    where
        F: Fn(&Map<String, Value>) -> V + Send + Sync + 'static,
        V: Into<Verdict>,
    {
        Self(Arc::new(move |record| f(record).into()))
    }

    #[must_use]
    pub fn check(&self, record: &Map<String, Value>) -> Verdict {
        (self.0)(record)
    }
}

impl fmt::Debug for EntityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityRule(..)")
    }
}
