use serde::{Deserialize, Serialize};

use crate::user_id::UserId;

// persisted as a JSON array of these, overwritten wholesale on every save
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Note {
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
