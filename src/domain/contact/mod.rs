//! Contacts: the draft edited by contact forms and the records read back.

mod draft;
mod record;

pub use draft::{ContactDraft, ContactField};
pub use record::{ContactPage, ContactQuery, ContactRecord, Paging};
