mod errors;
mod extractors;
mod index;
mod newsletters;
mod schema;

pub use errors::ApiError;
pub use extractors::{FormFields, PathParam};
pub use index::index;
pub use newsletters::{
    create_newsletter, delete_newsletter, get_newsletter, list_newsletters, update_newsletter,
};
pub use schema::{Links, NewsletterSchema, NewsletterUrls};
