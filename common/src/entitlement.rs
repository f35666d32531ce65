use serde::{Deserialize, Serialize};

/// Whether the acting user may generate documents and open Studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entitlement {
    #[default]
    Free,
    Premium,
}

impl Entitlement {
    /// Maps the `plan` of `/api/users/me/` to an entitlement.
    pub fn from_plan(plan: &str) -> Self {
        if plan.trim().eq_ignore_ascii_case("premium") {
            Entitlement::Premium
        } else {
            Entitlement::Free
        }
    }

    pub fn is_premium(self) -> bool {
        matches!(self, Entitlement::Premium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plan() {
        assert_eq!(Entitlement::from_plan("premium"), Entitlement::Premium);
        assert_eq!(Entitlement::from_plan(" Premium "), Entitlement::Premium);
        assert_eq!(Entitlement::from_plan("free"), Entitlement::Free);
        assert_eq!(Entitlement::from_plan(""), Entitlement::Free);
        assert!(!Entitlement::default().is_premium());
    }
}
