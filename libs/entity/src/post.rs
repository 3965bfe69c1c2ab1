use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Post {
    pub id: i32,
    pub date: NaiveDate,
    pub name: String,
    pub title: String,
    pub content: String,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Which columns a text search runs against. `All` is the OR of the
/// three searchable fields.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    All,
    Title,
    Content,
    Name,
}

impl SearchField {
    /// An absent field means "search everything"; an unrecognized one is
    /// rejected so it surfaces as a not-found instead of a query error.
    pub fn parse(field: Option<&str>) -> Option<Self> {
        match field {
            None | Some("all") => Some(SearchField::All),
            Some("title") => Some(SearchField::Title),
            Some("content") => Some(SearchField::Content),
            Some("name") => Some(SearchField::Name),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_search_field() {
        assert_eq!(SearchField::parse(None), Some(SearchField::All));
        assert_eq!(SearchField::parse(Some("all")), Some(SearchField::All));
        assert_eq!(SearchField::parse(Some("title")), Some(SearchField::Title));
        assert_eq!(
            SearchField::parse(Some("content")),
            Some(SearchField::Content)
        );
        assert_eq!(SearchField::parse(Some("name")), Some(SearchField::Name));
    }

    #[test]
    fn test_unknown_search_field_rejected() {
        assert_eq!(SearchField::parse(Some("author")), None);
        assert_eq!(SearchField::parse(Some("")), None);
    }
}
