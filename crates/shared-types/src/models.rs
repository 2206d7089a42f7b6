use serde::{Deserialize, Serialize};

/// Role attached to a session identity.
///
/// The service sends a free-form string; anything outside the known set maps
/// to `Other` so an unexpected role can never satisfy a role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    User,
    #[default]
    Other,
}

impl UserRole {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            _ => UserRole::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Other => "other",
        }
    }
}

/// The current session's identity, as returned by `GET /auth/me`.
///
/// Fetched once per dashboard shell mount; drives redirect decisions and is
/// otherwise read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl SessionUser {
    /// Enum view of the wire role string.
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == UserRole::Admin
    }
}

/// Credentials for the thin login page. Identity management itself is owned
/// by the external service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Generic `{ "message": … }` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn session_user_deserializes_from_api_json() {
        let json = r#"{"_id": "u9", "name": "Priya", "email": "priya@example.com", "role": "admin"}"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u9");
        assert!(user.is_admin());
        assert_eq!(user.avatar_url, None);
    }

    #[test]
    fn role_parsing_known_values() {
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("Admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("user"), UserRole::User);
    }

    #[test]
    fn unknown_role_never_grants_admin() {
        for s in ["", "superadmin", "root", "moderator"] {
            let user = SessionUser {
                id: "u1".into(),
                name: "X".into(),
                email: "x@example.com".into(),
                role: s.into(),
                avatar_url: None,
            };
            assert!(!user.is_admin());
            assert_eq!(user.role(), UserRole::Other);
        }
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [UserRole::Admin, UserRole::User, UserRole::Other] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
    }
}
