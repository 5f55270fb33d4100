//! Wire representation of newsletters.
//!
//! Only `title` and `published_at` leave the service, together with links
//! to the item and to the collection. `id` and `body` are never serialized.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Newsletter, NewsletterId};

#[derive(Debug, Serialize)]
pub struct NewsletterSchema {
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub url: NewsletterUrls,
}

#[derive(Debug, Serialize)]
pub struct NewsletterUrls {
    #[serde(rename = "self")]
    pub self_: String,
    pub collection: String,
}

/// Builds the hyperlinks embedded in responses.
#[derive(Clone, Debug)]
pub struct Links {
    base_url: String,
}

impl Links {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection(&self) -> String {
        format!("{}/newsletters", self.base_url)
    }

    pub fn newsletter(&self, id: NewsletterId) -> String {
        format!("{}/newsletters/{id}", self.base_url)
    }

    pub fn dump(&self, newsletter: &Newsletter) -> NewsletterSchema {
        NewsletterSchema {
            title: newsletter.title.clone(),
            published_at: newsletter.published_at,
            url: NewsletterUrls {
                self_: self.newsletter(newsletter.id),
                collection: self.collection(),
            },
        }
    }

    pub fn dump_many(&self, newsletters: &[Newsletter]) -> Vec<NewsletterSchema> {
        newsletters.iter().map(|n| self.dump(n)).collect()
    }
}
