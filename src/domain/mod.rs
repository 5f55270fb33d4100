mod errors;
mod newsletter;
mod newsletter_body;
mod newsletter_changes;
mod newsletter_title;

pub use errors::ValidationError;
pub use newsletter::{NewNewsletter, Newsletter, NewsletterId};
pub use newsletter_body::NewsletterBody;
pub use newsletter_changes::NewsletterChanges;
pub use newsletter_title::NewsletterTitle;
