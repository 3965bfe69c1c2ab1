use chrono::{DateTime, Utc};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Only the recorded author may edit or delete a comment. An
    /// anonymous visitor never may.
    pub fn editable_by(&self, user: Option<&str>) -> bool {
        user.map_or(false, |name| name == self.author)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn comment() -> Comment {
        Comment {
            author: "jihoon".to_string(),
            content: "Amen".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_author_may_edit() {
        assert!(comment().editable_by(Some("jihoon")));
    }

    #[test]
    fn test_other_user_may_not_edit() {
        // Arrange
        let comment = comment();

        // Act / Assert
        assert!(!comment.editable_by(Some("sooyeon")));
        assert!(!comment.editable_by(Some("Jihoon")));
        assert!(!comment.editable_by(None));
    }
}
