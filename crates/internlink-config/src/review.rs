use std::fmt;
use std::str::FromStr;

use crate::env_lookup;

/// Which internship states an admin may review.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewPolicy {
    /// Any existing internship may be approved or rejected, including one
    /// that was already reviewed.
    #[default]
    Permissive,
    /// Only `SUBMITTED` internships may be reviewed.
    Strict,
}

impl FromStr for ReviewPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown review policy: {}", other)),
        }
    }
}

impl fmt::Display for ReviewPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl ReviewPolicy {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("INTERNSHIP_REVIEW_POLICY") {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to permissive review policy");
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup_from;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(
            ReviewPolicy::from_lookup(lookup_from(&[])),
            ReviewPolicy::Permissive
        );
    }

    #[test]
    fn test_parses_strict() {
        assert_eq!(
            ReviewPolicy::from_lookup(lookup_from(&[("INTERNSHIP_REVIEW_POLICY", "Strict")])),
            ReviewPolicy::Strict
        );
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(
            ReviewPolicy::from_lookup(lookup_from(&[("INTERNSHIP_REVIEW_POLICY", "lenient")])),
            ReviewPolicy::Permissive
        );
        assert!("lenient".parse::<ReviewPolicy>().is_err());
    }
}
