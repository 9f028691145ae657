//! Identifiers and namespaced keys

use crate::error::HostError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Namespace used for keys the library owns regardless of configuration
pub const LIBRARY_NAMESPACE: &str = "slotcraft";

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id!(
    /// Identity of one custom item definition, fixed for its lifetime
    ItemId
);

uuid_id!(
    /// A player (or other participant) known to the host
    ParticipantId
);

uuid_id!(
    /// A live container created by the host
    ContainerId
);

/// A `namespace:key` pair as accepted by the host
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespacedKey {
    namespace: Box<str>,
    key: Box<str>,
}

impl NamespacedKey {
    /// Create a key, validating both halves
    pub fn new(namespace: &str, key: &str) -> Result<Self, HostError> {
        if !is_valid_namespace(namespace) || !is_valid_key(key) {
            return Err(HostError::InvalidKey(format!("{}:{}", namespace, key)));
        }
        Ok(Self {
            namespace: namespace.into(),
            key: key.into(),
        })
    }

    /// Create a key in the library namespace
    pub fn library(key: &str) -> Result<Self, HostError> {
        Self::new(LIBRARY_NAMESPACE, key)
    }

    /// Create a key from literals that are valid by construction
    pub fn from_static(namespace: &'static str, key: &'static str) -> Self {
        debug_assert!(is_valid_namespace(namespace), "invalid namespace {}", namespace);
        debug_assert!(is_valid_key(key), "invalid key {}", key);
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Get the namespace
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the key
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Namespaces are `[a-z0-9._-]+`
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'.' | b'_' | b'-'))
}

/// Keys are `[a-z0-9/._-]+`
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'/' | b'.' | b'_' | b'-'))
}

impl fmt::Debug for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespacedKey({}:{})", self.namespace, self.key)
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Err(HostError::InvalidKey(s.to_string())),
        }
    }
}

impl Serialize for NamespacedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NamespacedKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
