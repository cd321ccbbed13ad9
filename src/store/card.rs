//! # Password Card
//!
//! The wire and domain representation of a stored credential entry.

use serde::{Deserialize, Serialize};

/// A single password card: a labeled credential tuple.
///
/// The JSON field names are the wire contract shared with clients:
/// `id`, `url`, `name`, `username`, `password`. Every field defaults to
/// the empty string on decode, so a payload may omit any of them.
/// No validation beyond structural decoding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCard {
    /// Server-assigned identifier. Ignored on POST/PUT input; the store
    /// overwrites it before the record becomes reachable.
    #[serde(default)]
    pub id: String,

    /// Free-form URL the credential belongs to.
    #[serde(default)]
    pub url: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub username: String,

    /// The secret value.
    #[serde(default)]
    pub password: String,
}
