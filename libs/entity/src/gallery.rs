use chrono::{DateTime, Utc};

#[derive(Debug, Default, PartialEq, Clone)]
pub struct Gallery {
    pub id: i32,
    pub image_key: String,
    pub created_at: DateTime<Utc>,
}

/// An image already stored as WebP is never re-encoded. The check is a
/// plain filename-suffix test, matching how uploads are keyed.
pub fn needs_conversion(file_name: &str) -> bool {
    !file_name.to_lowercase().ends_with(".webp")
}

/// Key of the converted object: same stem, `.webp` extension.
pub fn converted_key(image_key: &str) -> String {
    match image_key.rsplit_once('.') {
        Some((stem, _)) => format!("{}.webp", stem),
        None => format!("{}.webp", image_key),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_webp_never_needs_conversion() {
        assert!(!needs_conversion("easter.webp"));
        assert!(!needs_conversion("EASTER.WEBP"));
    }

    #[test]
    fn test_other_extensions_need_conversion() {
        assert!(needs_conversion("easter.jpg"));
        assert!(needs_conversion("easter.png"));
        assert!(needs_conversion("easter.webp.png"));
        assert!(needs_conversion("easter"));
    }

    #[test]
    fn test_converted_key_replaces_extension() {
        // Arrange
        let key = "gallery/1a2b-easter.jpg";

        // Act
        let converted = converted_key(key);

        // Assert
        assert_eq!(converted, "gallery/1a2b-easter.webp");
        assert_eq!(converted_key("no-extension"), "no-extension.webp");
    }
}
