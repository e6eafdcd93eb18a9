//! 사용자 역할
//!
//! 알려진 역할은 닫힌 열거형으로 다루고, 그 밖의 값은 `Custom`으로 보존합니다.
//! 직렬화 시에는 평범한 문자열(`"user"`, `"admin"`, 그 외 원문 그대로)이 되므로
//! JWT 클레임의 `roles`는 여전히 문자열 배열입니다.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Admin,
    /// 테넌트 정의 등 열린 역할
    Custom(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Custom(name) => name,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "user" => Role::User,
            "admin" => Role::Admin,
            other => Role::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::parse(value)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_serialize_as_plain_strings() {
        let roles = vec![Role::User, Role::Admin, Role::Custom("shop-owner".into())];
        let json = serde_json::to_string(&roles).unwrap();
        assert_eq!(json, r#"["user","admin","shop-owner"]"#);

        let back: Vec<Role> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roles);
    }

    #[test]
    fn test_known_names_parse_to_closed_variants() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Custom("Admin".into()));
    }
}
