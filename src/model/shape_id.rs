//! Shape identifiers: `namespace#Name` and `namespace#Name$member`.

use smol_str::SmolStr;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when parsing a malformed shape ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid shape ID `{input}`: {reason}")]
pub struct ShapeIdError {
    pub input: String,
    pub reason: &'static str,
}

/// Absolute identifier of a shape or member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId {
    namespace: SmolStr,
    name: SmolStr,
    member: Option<SmolStr>,
}

impl ShapeId {
    /// Build an ID from already-validated parts.
    pub fn from_parts(namespace: &str, name: &str) -> Self {
        Self {
            namespace: SmolStr::new(namespace),
            name: SmolStr::new(name),
            member: None,
        }
    }

    /// The ID of member `member` of this shape.
    pub fn with_member(&self, member: &str) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(SmolStr::new(member)),
        }
    }

    /// The containing shape's ID (identity for non-member IDs).
    pub fn without_member(&self) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: None,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// The shortest form that resolves to this ID from inside `namespace`.
    ///
    /// Prelude shapes and shapes in the same namespace are written by name.
    pub fn relative_to(&self, namespace: &str) -> String {
        let local = self.namespace == namespace
            || self.namespace == crate::base::constants::PRELUDE_NAMESPACE;
        match (&self.member, local) {
            (None, true) => self.name.to_string(),
            (Some(member), true) => format!("{}${}", self.name, member),
            (_, false) => self.to_string(),
        }
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${member}")?;
        }
        Ok(())
    }
}

impl FromStr for ShapeId {
    type Err = ShapeIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let error = |reason| ShapeIdError {
            input: input.to_string(),
            reason,
        };
        let (namespace, rest) = input.split_once('#').ok_or_else(|| error("missing `#`"))?;
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member)),
            None => (rest, None),
        };

        if namespace.is_empty() || !namespace.split('.').all(is_identifier) {
            return Err(error("namespace must be dot-separated identifiers"));
        }
        if !is_identifier(name) {
            return Err(error("shape name must be an identifier"));
        }
        if member.is_some_and(|member| !is_identifier(member)) {
            return Err(error("member name must be an identifier"));
        }

        let id = Self::from_parts(namespace, name);
        Ok(match member {
            Some(member) => id.with_member(member),
            None => id,
        })
    }
}

impl TryFrom<&str> for ShapeId {
    type Error = ShapeIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShapeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, with at least one non-underscore character.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s.chars().any(|c| c != '_')
}
