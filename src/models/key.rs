use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Composite recruiter identity used as a histogram key under the
/// `recruiter` selector.
///
/// Equality is fully structural: two keys match only if all three components
/// compare equal, including both being absent. An absent component is a
/// different identity from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecruiterKey {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
}

impl fmt::Display for RecruiterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.first_name.as_deref().unwrap_or("-");
        let last = self.last_name.as_deref().unwrap_or("-");
        match self.company_name.as_deref() {
            Some(company) => write!(f, "{} {} ({})", first, last, company),
            None => write!(f, "{} {}", first, last),
        }
    }
}

/// A histogram key: a plain string for position/salary/technology-stack
/// statistics, or a composite [`RecruiterKey`] for recruiter statistics.
///
/// The derived `Ord` is the deterministic tie-break order used when two keys
/// carry the same count: plain keys sort lexicographically, recruiter keys
/// field by field with `None` before `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatKey {
    Plain(String),
    Recruiter(RecruiterKey),
}

impl StatKey {
    pub fn plain(value: impl Into<String>) -> Self {
        StatKey::Plain(value.into())
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKey::Plain(value) => f.write_str(value),
            StatKey::Recruiter(key) => key.fmt(f),
        }
    }
}

// Serialize plain keys as bare strings and recruiter keys as an object with
// snake_case fields, so the --json output matches the wire field names.
impl Serialize for StatKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StatKey::Plain(value) => serializer.serialize_str(value),
            StatKey::Recruiter(key) => {
                let mut state = serializer.serialize_struct("RecruiterKey", 3)?;
                state.serialize_field("first_name", &key.first_name)?;
                state.serialize_field("last_name", &key.last_name)?;
                state.serialize_field("company_name", &key.company_name)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recruiter(
        first: Option<&str>,
        last: Option<&str>,
        company: Option<&str>,
    ) -> RecruiterKey {
        RecruiterKey {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            company_name: company.map(String::from),
        }
    }

    #[test]
    fn test_recruiter_key_structural_equality() {
        let a = recruiter(Some("John"), Some("Doe"), None);
        let b = recruiter(Some("John"), Some("Doe"), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_absent_component_differs_from_empty_string() {
        let absent = recruiter(Some("John"), Some("Doe"), None);
        let empty = recruiter(Some("John"), Some("Doe"), Some(""));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_plain_key_tie_break_is_lexicographic() {
        let mut keys = vec![StatKey::plain("React"), StatKey::plain("Java")];
        keys.sort();
        assert_eq!(keys, vec![StatKey::plain("Java"), StatKey::plain("React")]);
    }

    #[test]
    fn test_serialize_plain_key_as_bare_string() {
        let json = serde_json::to_string(&StatKey::plain("Java")).unwrap();
        assert_eq!(json, r#""Java""#);
    }

    #[test]
    fn test_serialize_recruiter_key_as_object() {
        let key = StatKey::Recruiter(recruiter(Some("John"), None, Some("Acme")));
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["first_name"], "John");
        assert!(json["last_name"].is_null());
        assert_eq!(json["company_name"], "Acme");
    }

    #[test]
    fn test_display_recruiter_key() {
        let key = recruiter(Some("John"), Some("Doe"), Some("Acme"));
        assert_eq!(key.to_string(), "John Doe (Acme)");
        let partial = recruiter(None, Some("Doe"), None);
        assert_eq!(partial.to_string(), "- Doe");
    }
}
