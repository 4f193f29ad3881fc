//! Mock API data transfer objects
//!
//! These types mirror the JSON records served by the remote API. They are kept
//! free of any application state so the client crate stays reusable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// A record type mirrored from a REST collection (`/category`, `/station`)
///
/// The identifier is assigned by the server on creation and never changes.
pub trait Entity: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the collection, e.g. `"category"`
    const RESOURCE: &'static str;

    /// Human readable singular name, e.g. `"category"`
    const LABEL: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> &str;

    /// Display name of the record
    fn name(&self) -> &str;

    /// Free-form description of the record
    fn description(&self) -> &str;
}

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Entity for Category {
    const RESOURCE: &'static str = "category";
    const LABEL: &'static str = "category";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// A charging station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Entity for Station {
    const RESOURCE: &'static str = "station";
    const LABEL: &'static str = "station";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Field set sent on create (no id) or update (only present fields)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntityDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Patch that only changes the description
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: Some(description.into()),
        }
    }
}

/// A user account as returned by the auth endpoints
///
/// Only identity and display fields are typed. Everything else the server sends
/// is kept in `extra` so the record survives a save/load cycle unchanged.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Best display name: full name, then name, then email, then id
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Values of unknown fields are left out, the server may echo the password
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("full_name", &self.full_name)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Body of `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Body of `POST /auth/register`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &REDACTED)
            .finish()
    }
}

const REDACTED: &str = "<redacted>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_deserialize_ignores_unknown_fields() {
        let json = r#"{"id":"7","name":"Drinks","description":"Beverage category","createdAt":"2024-01-01"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id(), "7");
        assert_eq!(category.name, "Drinks");
    }

    #[test]
    fn test_draft_skips_missing_fields() {
        let patch = EntityDraft::description("All beverages");
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"description":"All beverages"}"#);
    }

    #[test]
    fn test_user_keeps_extra_fields() {
        let json = r#"{"id":"u1","fullName":"Ada Lovelace","email":"a@b.com","avatar":"x.png"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.extra.get("avatar").and_then(|v| v.as_str()), Some("x.png"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["fullName"], "Ada Lovelace");
        assert_eq!(back["avatar"], "x.png");
    }

    #[test]
    fn test_user_display_name_fallbacks() {
        let user = User {
            id: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@b.com");

        let bare = User {
            id: "u2".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.display_name(), "u2");
    }

    #[test]
    fn test_debug_output_hides_passwords() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "Hunter2!secret".to_string(),
        };
        let registration = Registration {
            full_name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            phone: "0912345678".to_string(),
            password: "Hunter2!secret".to_string(),
        };
        let user: User =
            serde_json::from_str(r#"{"id":"7","email":"a@b.com","password":"Hunter2!secret"}"#)
                .unwrap();
        for debug in [
            format!("{credentials:?}"),
            format!("{registration:?}"),
            format!("{user:?}"),
        ] {
            assert!(!debug.contains("Hunter2"), "{debug}");
            assert!(debug.contains("a@b.com"), "{debug}");
        }
    }

    #[test]
    fn test_registration_uses_camel_case() {
        let registration = Registration {
            full_name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            phone: "0912345678".to_string(),
            password: "Secret1!x".to_string(),
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["fullName"], "Ada");
    }
}
