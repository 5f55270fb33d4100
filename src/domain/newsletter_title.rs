use unicode_segmentation::UnicodeSegmentation;

use crate::domain::ValidationError;

const MAX_LENGTH: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterTitle(String);

impl NewsletterTitle {
    pub const FIELD: &'static str = "title";

    /// Titles are stored verbatim, but must contain something besides
    /// whitespace and fit in `MAX_LENGTH` graphemes.
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyField(Self::FIELD));
        }
        if s.graphemes(true).count() > MAX_LENGTH {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: MAX_LENGTH,
            });
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for NewsletterTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NewsletterTitle> for String {
    fn from(title: NewsletterTitle) -> Self {
        title.0
    }
}
