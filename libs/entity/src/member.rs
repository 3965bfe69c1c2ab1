use std::sync::OnceLock;

use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Member {
    pub id: i32,
    pub english_name: String,
    pub korean_name: String,
    pub contact: String,
    pub email: String,
    pub street: String,
    pub suburb: String,
    pub birthday: Option<NaiveDate>,
    pub children: String,
    pub position: String,
    pub vehicle: bool,
    pub attendance: bool,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Both names and a valid email are required. Everything else is
    /// optional roster metadata.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.english_name.trim().is_empty() {
            bail!("english_name must not be blank");
        }
        if self.korean_name.trim().is_empty() {
            bail!("korean_name must not be blank");
        }
        if !is_valid_email(&self.email) {
            bail!("'{}' is not a valid email address", self.email);
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

    re.is_match(email)
}

#[cfg(test)]
mod test {
    use super::*;

    fn valid_member() -> Member {
        Member {
            english_name: "Jihoon Kim".to_string(),
            korean_name: "김지훈".to_string(),
            email: "jihoon.kim@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_member_passes() {
        // Arrange
        let member = valid_member();

        // Act
        let result = member.validate();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut member = valid_member();
        member.english_name = "  ".to_string();
        assert!(member.validate().is_err());

        let mut member = valid_member();
        member.korean_name = "".to_string();
        assert!(member.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        for email in ["", "no-at-sign", "a@b", "a b@c.com", "a@b c.com"] {
            let mut member = valid_member();
            member.email = email.to_string();
            assert!(member.validate().is_err(), "accepted '{}'", email);
        }
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        // Arrange
        let member = Member {
            contact: String::new(),
            street: String::new(),
            birthday: None,
            message: None,
            ..valid_member()
        };

        // Act
        let result = member.validate();

        // Assert
        assert!(result.is_ok());
    }
}
