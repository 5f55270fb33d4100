use crate::domain::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsletterBody(String);

impl NewsletterBody {
    pub const FIELD: &'static str = "body";

    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            Err(ValidationError::EmptyField(Self::FIELD))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for NewsletterBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NewsletterBody> for String {
    fn from(body: NewsletterBody) -> Self {
        body.0
    }
}
