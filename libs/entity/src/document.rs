use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One uploaded file with its metadata. Bulletins, standalone PDFs and
/// sheet music share a shape and differ only in kind.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Document {
    pub id: i32,
    pub kind: Kind,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub file_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Default, PartialEq, Clone, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Bulletin,
    Pdf,
    Music,
}

impl Kind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bulletin" => Some(Kind::Bulletin),
            "pdf" => Some(Kind::Pdf),
            "music" => Some(Kind::Music),
            _ => None,
        }
    }

    /// Object keys are grouped by kind.
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            Kind::Bulletin => "bulletins/",
            Kind::Pdf => "pdfs/",
            Kind::Music => "musics/",
        }
    }

    /// A bulletin is identified by its date alone.
    pub fn requires_title(&self) -> bool {
        !matches!(self, Kind::Bulletin)
    }
}

impl From<Kind> for String {
    fn from(value: Kind) -> Self {
        match value {
            Kind::Bulletin => "bulletin".to_string(),
            Kind::Pdf => "pdf".to_string(),
            Kind::Music => "music".to_string(),
        }
    }
}

impl Document {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.kind.requires_title()
            && self.title.as_deref().unwrap_or("").trim().is_empty()
        {
            bail!("title must not be blank for {:?} uploads", self.kind);
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(Kind::parse("bulletin"), Some(Kind::Bulletin));
        assert_eq!(Kind::parse("pdf"), Some(Kind::Pdf));
        assert_eq!(Kind::parse("music"), Some(Kind::Music));
        assert_eq!(Kind::parse("sermon"), None);
    }

    #[test]
    fn test_storage_prefix_per_kind() {
        assert_eq!(Kind::Bulletin.storage_prefix(), "bulletins/");
        assert_eq!(Kind::Pdf.storage_prefix(), "pdfs/");
        assert_eq!(Kind::Music.storage_prefix(), "musics/");
    }

    #[test]
    fn test_bulletin_title_optional() {
        // Arrange
        let document = Document {
            kind: Kind::Bulletin,
            title: None,
            ..Default::default()
        };

        // Act
        let result = document.validate();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_music_requires_title() {
        let document = Document {
            kind: Kind::Music,
            title: Some(" ".to_string()),
            ..Default::default()
        };

        assert!(document.validate().is_err());
    }
}
