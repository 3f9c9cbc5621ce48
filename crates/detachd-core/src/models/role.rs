use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// User role for authorization.
///
/// The taxonomy is open: values outside the known set are kept verbatim in
/// [`UserRole::Other`] so a guard can still report them back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Policyholder,
    ThirdParty,
    Witness,
    Responder,
    InsurerParty,
    InsurerAdmin,
    InsurerAgent,
    MedicalProfessional,
    LegalProfessional,
    GovernmentOfficial,
    SuperAdmin,
    Other(String),
}

impl UserRole {
    /// Every role the platform ships with, in menu order.
    pub const KNOWN: [UserRole; 11] = [
        UserRole::Policyholder,
        UserRole::ThirdParty,
        UserRole::Witness,
        UserRole::Responder,
        UserRole::InsurerParty,
        UserRole::InsurerAdmin,
        UserRole::InsurerAgent,
        UserRole::MedicalProfessional,
        UserRole::LegalProfessional,
        UserRole::GovernmentOfficial,
        UserRole::SuperAdmin,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Policyholder => "policyholder",
            UserRole::ThirdParty => "third_party",
            UserRole::Witness => "witness",
            UserRole::Responder => "responder",
            UserRole::InsurerParty => "insurer_party",
            UserRole::InsurerAdmin => "insurer_admin",
            UserRole::InsurerAgent => "insurer_agent",
            UserRole::MedicalProfessional => "medical_professional",
            UserRole::LegalProfessional => "legal_professional",
            UserRole::GovernmentOfficial => "government_official",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, UserRole::Other(_))
    }

    /// An empty role string, which stands for "no role".
    pub fn is_blank(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.len() != raw.len() {
            return UserRole::from(trimmed.to_string());
        }
        match raw.as_str() {
            "policyholder" => UserRole::Policyholder,
            "third_party" => UserRole::ThirdParty,
            "witness" => UserRole::Witness,
            "responder" => UserRole::Responder,
            "insurer_party" => UserRole::InsurerParty,
            "insurer_admin" => UserRole::InsurerAdmin,
            "insurer_agent" => UserRole::InsurerAgent,
            "medical_professional" => UserRole::MedicalProfessional,
            "legal_professional" => UserRole::LegalProfessional,
            "government_official" => UserRole::GovernmentOfficial,
            "super_admin" => UserRole::SuperAdmin,
            _ => UserRole::Other(raw),
        }
    }
}

impl From<&str> for UserRole {
    fn from(raw: &str) -> Self {
        UserRole::from(raw.to_string())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for UserRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserRole::from(s))
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_round_trip_through_strings() {
        for role in UserRole::KNOWN.iter() {
            assert_eq!(&UserRole::from(role.as_str()), role);
            assert!(role.is_known());
        }
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let role: UserRole = "claims_auditor".parse().unwrap();
        assert_eq!(role, UserRole::Other("claims_auditor".to_string()));
        assert_eq!(role.to_string(), "claims_auditor");
        assert!(!role.is_known());
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&UserRole::InsurerAdmin).unwrap();
        assert_eq!(json, "\"insurer_admin\"");

        let role: UserRole = serde_json::from_str("\"legal_professional\"").unwrap();
        assert_eq!(role, UserRole::LegalProfessional);

        let other: UserRole = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"auditor\"");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let role: UserRole = serde_json::from_str("\" insurer_admin \"").unwrap();
        assert_eq!(role, UserRole::InsurerAdmin);

        let other = UserRole::from("  auditor\t".to_string());
        assert_eq!(other, UserRole::Other("auditor".to_string()));

        assert!(UserRole::from("   ").is_blank());
        assert!(!UserRole::Witness.is_blank());
    }
}
