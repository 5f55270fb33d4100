use chrono::{DateTime, Utc};

use crate::domain::{NewsletterBody, NewsletterTitle, ValidationError};

pub type NewsletterId = i64;

/// A persisted newsletter row.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// The fields a client supplies when creating a newsletter.
#[derive(Clone, Debug)]
pub struct NewNewsletter {
    pub title: NewsletterTitle,
    pub body: NewsletterBody,
}

impl NewNewsletter {
    pub fn parse(title: Option<String>, body: Option<String>) -> Result<Self, ValidationError> {
        let title = title.ok_or(ValidationError::MissingField(NewsletterTitle::FIELD))?;
        let body = body.ok_or(ValidationError::MissingField(NewsletterBody::FIELD))?;

        Ok(Self {
            title: NewsletterTitle::parse(title)?,
            body: NewsletterBody::parse(body)?,
        })
    }
}
