// ── User & role domain types ──

use serde::{Deserialize, Serialize};

use super::Keyed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub fathers_name: Option<String>,
    pub email: String,
    pub role_id: Option<i64>,
    /// Set by an admin via the confirm endpoint; unconfirmed accounts
    /// exist but cannot act.
    pub confirmed: bool,
}

impl User {
    /// "Surname Name Fathersname" display form.
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.surname.as_str(), self.name.as_str()];
        if let Some(ref fathers) = self.fathers_name {
            parts.push(fathers.as_str());
        }
        parts.join(" ").trim().to_owned()
    }
}

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Keyed for Role {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Form input for creating or updating a user (admin only).
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub fathers_name: Option<String>,
    pub role_id: i64,
}
