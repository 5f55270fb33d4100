use std::collections::HashMap;

use crate::domain::{NewsletterBody, NewsletterTitle, ValidationError};

/// Columns the store manages on its own.
const IMMUTABLE_FIELDS: [&str; 2] = ["id", "published_at"];

/// A partial update. Fields left as `None` keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterChanges {
    pub title: Option<NewsletterTitle>,
    pub body: Option<NewsletterBody>,
}

impl NewsletterChanges {
    /// Builds a change set from an arbitrary field map, accepting only the
    /// client-editable fields. Nothing is applied if any entry is rejected.
    pub fn parse(fields: HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut changes = Self::default();

        for (name, value) in fields {
            match name.as_str() {
                NewsletterTitle::FIELD => changes.title = Some(NewsletterTitle::parse(value)?),
                NewsletterBody::FIELD => changes.body = Some(NewsletterBody::parse(value)?),
                other if IMMUTABLE_FIELDS.contains(&other) => {
                    return Err(ValidationError::ImmutableField(other.to_owned()));
                },
                other => return Err(ValidationError::UnknownField(other.to_owned())),
            }
        }

        Ok(changes)
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}
