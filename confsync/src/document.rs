//! Configuration document types.
//!
//! This module provides the identifier and document types that flow through
//! a reconciliation: a validated configuration id, an order-preserving YAML
//! mapping, and the canonical serialization used to detect drift.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};

/// Reserved key the remote store attaches to exported documents.
///
/// The key is store-internal bookkeeping. It is stripped before any merge
/// or comparison and never written back.
pub const RESERVED_METADATA_KEY: &str = "_core";

/// An opaque identifier naming one configuration document in the remote store.
///
/// The identifier doubles as a staging file name during import, so shapes
/// that would escape the staging directory are rejected at construction.
///
/// # Examples
///
/// ```
/// use confsync::ConfigId;
///
/// let id = ConfigId::new("system.site").unwrap();
/// assert_eq!(id.as_str(), "system.site");
/// assert_eq!(id.file_name(), "system.site.yml");
///
/// // Invalid: would traverse out of the staging directory
/// assert!(ConfigId::new("../evil").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    /// Creates a new configuration id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, contains whitespace or a path
    /// separator, or is one of the relative path components `.` and `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confsync::ConfigId;
    ///
    /// assert!(ConfigId::new("node.settings").is_ok());
    /// assert!(ConfigId::new("").is_err());
    /// assert!(ConfigId::new("two words").is_err());
    /// assert!(ConfigId::new("a/b").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> std::result::Result<Self, InvalidIdError> {
        let id = id.into();
        let reason = if id.is_empty() {
            Some("must be non-empty")
        } else if id.chars().any(char::is_whitespace) {
            Some("must not contain whitespace")
        } else if id.contains('/') || id.contains('\\') {
            Some("must not contain path separators")
        } else if id == "." || id == ".." {
            Some("must not be a relative path component")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidIdError {
                value: id,
                reason: reason.to_string(),
            }),
            None => Ok(Self(id)),
        }
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the file name used when staging this document for import.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.yml", self.0)
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConfigId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error produced when a configuration id fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidIdError {
    /// The rejected identifier.
    pub value: String,
    /// A description of the validation failure.
    pub reason: String,
}

impl fmt::Display for InvalidIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidIdError {}

/// One named unit of remote configuration.
///
/// A document is an ordered mapping from keys to arbitrary nested YAML
/// values. Insertion order is preserved for round-tripping; comparisons use
/// [`canonical_yaml`](Self::canonical_yaml), which is order-insensitive.
///
/// # Examples
///
/// ```
/// use confsync::ConfigDocument;
///
/// let doc = ConfigDocument::from_yaml_str("name: Site\nslogan: Hello").unwrap();
/// assert_eq!(doc.len(), 2);
/// assert!(doc.contains_key("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Mapping);

impl ConfigDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from YAML text.
    ///
    /// Empty input and an explicit `null` body both parse as the empty
    /// document, matching what the management tool emits for configuration
    /// that exists but has no keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid YAML or its top level is
    /// not a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use confsync::ConfigDocument;
    ///
    /// assert!(ConfigDocument::from_yaml_str("a: 1").is_ok());
    /// assert!(ConfigDocument::from_yaml_str("").unwrap().is_empty());
    /// assert!(ConfigDocument::from_yaml_str("- just\n- a\n- list").is_err());
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Builds a document from an already-parsed YAML value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a mapping nor null.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(map) => Ok(Self(map)),
            other => Err(Error::Document {
                reason: format!("top level must be a mapping, got {}", value_kind(&other)),
            }),
        }
    }

    /// Serializes the document to YAML in its natural key order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.0)?)
    }

    /// Serializes the document to its canonical textual form.
    ///
    /// Mapping keys are sorted recursively at every nesting level and the
    /// output uses block style. Two documents describe the same state
    /// exactly when their canonical texts are byte-equal.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use confsync::ConfigDocument;
    ///
    /// let a = ConfigDocument::from_yaml_str("b: 2\na: 1").unwrap();
    /// let b = ConfigDocument::from_yaml_str("a: 1\nb: 2").unwrap();
    /// assert_eq!(a.canonical_yaml().unwrap(), b.canonical_yaml().unwrap());
    /// ```
    pub fn canonical_yaml(&self) -> Result<String> {
        let ordered = order_value(&Value::Mapping(self.0.clone()));
        Ok(serde_yaml::to_string(&ordered)?)
    }

    /// Returns a copy of the document with the reserved metadata key removed.
    ///
    /// Only the top level is inspected; nested mappings may legitimately
    /// contain a key of the same name.
    #[must_use]
    pub fn stripped(&self) -> Self {
        let mut map = self.0.clone();
        map.remove(RESERVED_METADATA_KEY);
        Self(map)
    }

    /// Returns the value for a string key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a value under a string key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(Value::String(key.into()), value);
    }

    /// Returns true if the document has a top-level entry for `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns true if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrows the underlying mapping.
    #[must_use]
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Consumes the document, returning the underlying mapping.
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.0
    }
}

impl From<Mapping> for ConfigDocument {
    fn from(map: Mapping) -> Self {
        Self(map)
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_yaml_string() {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str("<unserializable document>"),
        }
    }
}

/// Human-readable name for a YAML value's kind, used in error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Rebuilds a value with all mapping keys sorted recursively.
///
/// Sequence order is data and is left untouched.
fn order_value(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut entries: Vec<(Value, Value)> = map
                .iter()
                .map(|(k, v)| (k.clone(), order_value(v)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(seq) => Value::Sequence(seq.iter().map(order_value).collect()),
        Value::Tagged(tagged) => Value::Tagged(Box::new(serde_yaml::value::TaggedValue {
            tag: tagged.tag.clone(),
            value: order_value(&tagged.value),
        })),
        other => other.clone(),
    }
}

/// Total order over mapping keys.
///
/// String keys (the overwhelmingly common case) sort lexicographically.
/// Mixed-type keys sort by kind first, then by serialized text, which is
/// arbitrary but deterministic.
fn compare_keys(a: &Value, b: &Value) -> Ordering {
    if let (Value::String(x), Value::String(y)) = (a, b) {
        return x.cmp(y);
    }
    let rank = |v: &Value| match v {
        Value::Null => 0u8,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Sequence(_) => 4,
        Value::Mapping(_) => 5,
        Value::Tagged(_) => 6,
    };
    rank(a).cmp(&rank(b)).then_with(|| {
        let ax = serde_yaml::to_string(a).unwrap_or_default();
        let bx = serde_yaml::to_string(b).unwrap_or_default();
        ax.cmp(&bx)
    })
}
