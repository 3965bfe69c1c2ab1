#[derive(Debug, Default, PartialEq, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Reserved slug standing in for "no category assigned". Posts whose
/// category was deleted fall back to it.
pub const UNCATEGORIZED_SLUG: &str = "_none";

#[derive(Debug, PartialEq, Clone)]
pub enum CategoryFilter {
    Uncategorized,
    Slug(String),
}

impl CategoryFilter {
    pub fn from_slug(slug: &str) -> Self {
        if slug == UNCATEGORIZED_SLUG {
            CategoryFilter::Uncategorized
        } else {
            CategoryFilter::Slug(slug.to_string())
        }
    }
}

/// URL-safe identifier derived from a display name: lowercase ascii
/// alphanumerics with single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if matches!(c, ' ' | '-' | '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sunday Service"), "sunday-service");
        assert_eq!(slugify("  Youth   Group  "), "youth-group");
        assert_eq!(slugify("Q&A 2024"), "qa-2024");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_sentinel_slug_maps_to_uncategorized() {
        // Arrange / Act
        let filter = CategoryFilter::from_slug("_none");

        // Assert
        assert_eq!(filter, CategoryFilter::Uncategorized);
        assert_eq!(
            CategoryFilter::from_slug("sunday-service"),
            CategoryFilter::Slug("sunday-service".to_string())
        );
    }
}
