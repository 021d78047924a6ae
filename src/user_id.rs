use std::fmt;
use std::fmt::Formatter;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::Error;
use serde::de::Unexpected::Str;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

// partition key for everything a user persists
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserId(String);

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("user id must be non-empty and contain no control characters")]
pub struct UserIdParseError;

impl UserId {
    // for ids we generated ourselves; they satisfy the FromStr rules
    // by construction
    pub(crate) fn from_valid(id: String) -> UserId {
        UserId(id)
    }
}

impl FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.chars().any(char::is_control) {
            return Err(UserIdParseError);
        }
        Ok(UserId(s.to_owned()))
    }
}

impl Deref for UserId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = UserId;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("string containing a valid user id")
            }

            fn visit_str<E>(self, v: &str) -> Result<UserId, E>
            where
                E: Error,
            {
                UserId::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
