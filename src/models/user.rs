// src/models/user.rs
// DOCUMENTATION: Parent/caregiver accounts
// PURPOSE: User record plus registration, login and profile DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user
/// DOCUMENTATION: The password never leaves the process; it is skipped on serialization
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,

    #[serde(skip_serializing)]
    pub password: String,

    pub email: String,
    pub display_name: Option<String>,

    /// parent, caregiver, etc.
    pub profile_type: Option<String>,
    pub child_ages: Option<Vec<String>>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn from_request(id: i32, req: RegisterRequest, now: DateTime<Utc>) -> Self {
        User {
            id,
            username: req.username,
            password: req.password,
            email: req.email,
            display_name: req.display_name,
            profile_type: req.profile_type,
            child_ages: req.child_ages,
            location: req.location,
            created_at: now,
            last_login: Some(now),
        }
    }

    pub fn apply_update(&mut self, req: UpdateUserRequest) {
        if req.display_name.is_some() {
            self.display_name = req.display_name;
        }
        if req.profile_type.is_some() {
            self.profile_type = req.profile_type;
        }
        if req.child_ages.is_some() {
            self.child_ages = req.child_ages;
        }
        if req.location.is_some() {
            self.location = req.location;
        }
    }
}

/// Body of POST /api/register
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub profile_type: Option<String>,

    #[serde(default)]
    pub child_ages: Option<Vec<String>>,

    #[serde(default)]
    pub location: Option<String>,
}

/// Body of POST /api/login
/// DOCUMENTATION: Both fields optional so a missing one yields a 400, not a parse error
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Body of PATCH /api/user
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    pub profile_type: Option<String>,
    pub child_ages: Option<Vec<String>>,
    pub location: Option<String>,
}
