//! Read-only contact directory: the list page and the detail page.

use std::sync::Arc;

use tracing::debug;

use crate::application::form::{FormContext, FormFailure};
use crate::domain::address::AddressRecord;
use crate::domain::contact::{ContactPage, ContactQuery, ContactRecord};
use crate::domain::foundation::ContactId;
use crate::ports::{AddressClient, ContactClient};

const LIST_FAILURE: &str = "Failed to fetch contacts";
const DETAIL_FAILURE: &str = "Failed to fetch contact details";
const ADDRESSES_FAILURE: &str = "Failed to fetch addresses";
const UNREACHABLE: &str = "An error occurred while fetching contacts";

/// A contact together with its addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub contact: ContactRecord,
    pub addresses: Vec<AddressRecord>,
}

/// Reads contacts and addresses. Every failure is also notified.
pub struct ContactDirectory {
    ctx: FormContext,
    contacts: Arc<dyn ContactClient>,
    addresses: Arc<dyn AddressClient>,
}

impl ContactDirectory {
    pub fn new(
        ctx: FormContext,
        contacts: Arc<dyn ContactClient>,
        addresses: Arc<dyn AddressClient>,
    ) -> Self {
        Self {
            ctx,
            contacts,
            addresses,
        }
    }

    /// `GET /contacts` with the given filters.
    pub async fn list(&self, query: &ContactQuery) -> Result<ContactPage, FormFailure> {
        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(self.contacts.list(&credential, query).await).and_then(|response| {
            response
                .decode::<ContactPage>()
                .map_err(|e| FormFailure::decode(e.to_string()))
        });

        match result {
            Ok(page) => {
                debug!(count = page.data.len(), "Contacts listed");
                Ok(page)
            }
            Err(failure) => Err(self.report("list_contacts", failure, LIST_FAILURE).await),
        }
    }

    /// `GET /contacts/{id}` followed by `GET /contacts/{id}/addresses`.
    pub async fn detail(&self, id: ContactId) -> Result<ContactDetail, FormFailure> {
        let credential = self.ctx.session().credential().await;

        let contact = FormFailure::check(self.contacts.get(&credential, id).await).and_then(|response| {
            response
                .data::<ContactRecord>()
                .map_err(|e| FormFailure::decode(e.to_string()))
        });
        let contact = match contact {
            Ok(contact) => contact,
            Err(failure) => return Err(self.report("load_contact", failure, DETAIL_FAILURE).await),
        };

        let addresses = FormFailure::check(self.addresses.list(&credential, id).await).and_then(|response| {
            response
                .data::<Vec<AddressRecord>>()
                .map_err(|e| FormFailure::decode(e.to_string()))
        });
        match addresses {
            Ok(addresses) => Ok(ContactDetail { contact, addresses }),
            Err(failure) => Err(self.report("list_addresses", failure, ADDRESSES_FAILURE).await),
        }
    }

    async fn report(&self, action: &'static str, failure: FormFailure, text: &str) -> FormFailure {
        self.ctx
            .notify_failure(action, &failure, text, UNREACHABLE)
            .await;
        failure
    }
}
