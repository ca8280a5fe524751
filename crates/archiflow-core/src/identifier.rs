//! Node identifiers backed by a process-wide string interner.
//!
//! Diagram definitions refer to nodes by short keys (`"user"`, `"proto-svc"`).
//! The keys are interned once so that the graph structures can store and
//! compare them as plain `Copy` values.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access is serialized through a `Mutex`.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned node key.
///
/// Two ids are equal exactly when they were created from the same string.
///
/// # Examples
///
/// ```
/// use archiflow_core::identifier::Id;
///
/// let user = Id::new("user");
/// assert_eq!(user, Id::new("user"));
/// assert_eq!(user, "user");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a key, interning it on first use.
    pub fn new(key: &str) -> Self {
        Self(interner().get_or_intern(key))
    }

    /// Returns the key this id was created from.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<&String> for Id {
    fn from(key: &String) -> Self {
        Self::new(key)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "user"`
    fn eq(&self, other: &str) -> bool {
        interner()
            .resolve(self.0)
            .is_some_and(|value| value == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_new_interns_same_key() {
        let id1 = Id::new("hello-svc");
        let id2 = Id::new("hello-svc");
        let id3 = Id::new("proto-svc");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "hello-svc");
    }

    #[test]
    fn test_display_and_as_string() {
        let id = Id::new("ingress");
        assert_eq!(format!("{id}"), "ingress");
        assert_eq!(id.as_string(), "ingress");
    }

    #[test]
    fn test_from_conversions() {
        let owned = String::from("user");
        let id1: Id = "user".into();
        let id2: Id = (&owned).into();

        assert_eq!(id1, id2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("proto-pod-1");

        assert!(id == "proto-pod-1");
        assert!(id != "proto-pod-2");

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "user");
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Id::new("a"), 1);
        map.insert(Id::new("b"), 2);

        assert_eq!(map.get(&Id::new("a")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
