//! Create and edit address forms.
//!
//! Both pages show the parent contact as a header. That read is
//! independent of the form: when it fails an error is shown and the form
//! keeps working without the header.

use std::sync::Arc;

use super::contact::LOAD_CONTACT;
use crate::application::form::{
    FormContext, FormFailure, FormMessages, FormState, FormStatus, LoadMessages, LoadOutcome,
    SubmitOutcome,
};
use crate::domain::address::{AddressDraft, AddressField};
use crate::domain::contact::ContactRecord;
use crate::domain::foundation::{AddressId, ContactId};
use crate::domain::navigation::Route;
use crate::domain::validation::Schema;
use crate::ports::{AddressClient, ContactClient};

const CREATE: FormMessages = FormMessages {
    action: "create_address",
    success: "Address created successfully",
    failure: "Failed to create address",
    unreachable: "An error occurred while creating address",
};

const UPDATE: FormMessages = FormMessages {
    action: "update_address",
    success: "Address updated successfully",
    failure: "Failed to update address",
    unreachable: "An error occurred while updating address",
};

const LOAD_ADDRESS: LoadMessages = LoadMessages {
    action: "load_address",
    failure: "Failed to fetch address details",
    unreachable: "An error occurred while fetching address details",
};

/// Reads the parent contact for the page header.
async fn fetch_contact_header(
    ctx: &FormContext,
    contacts: &dyn ContactClient,
    contact_id: ContactId,
) -> Option<ContactRecord> {
    let credential = ctx.session().credential().await;
    let result = FormFailure::check(contacts.get(&credential, contact_id).await).and_then(|response| {
        response
            .data::<ContactRecord>()
            .map_err(|e| FormFailure::decode(e.to_string()))
    });

    match result {
        Ok(contact) => Some(contact),
        Err(failure) => {
            ctx.notify_failure(
                LOAD_CONTACT.action,
                &failure,
                LOAD_CONTACT.failure,
                LOAD_CONTACT.unreachable,
            )
            .await;
            None
        }
    }
}

/// New address under a contact.
pub struct CreateAddressController {
    ctx: FormContext,
    addresses: Arc<dyn AddressClient>,
    contacts: Arc<dyn ContactClient>,
    contact_id: ContactId,
    contact: Option<ContactRecord>,
    form: FormState<AddressDraft>,
}

impl CreateAddressController {
    pub fn new(
        ctx: FormContext,
        addresses: Arc<dyn AddressClient>,
        contacts: Arc<dyn ContactClient>,
        contact_id: ContactId,
    ) -> Self {
        Self {
            ctx,
            addresses,
            contacts,
            contact_id,
            contact: None,
            form: FormState::new(AddressDraft::page_schema()),
        }
    }

    /// Creates the controller and reads the contact header.
    pub async fn mount(
        ctx: FormContext,
        addresses: Arc<dyn AddressClient>,
        contacts: Arc<dyn ContactClient>,
        contact_id: ContactId,
    ) -> Self {
        let mut controller = Self::new(ctx, addresses, contacts, contact_id);
        controller.load_contact().await;
        controller
    }

    pub fn with_schema(mut self, schema: Schema<AddressDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn contact(&self) -> Option<&ContactRecord> {
        self.contact.as_ref()
    }

    pub fn form(&self) -> &FormState<AddressDraft> {
        &self.form
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub async fn load_contact(&mut self) -> Option<&ContactRecord> {
        self.contact = fetch_contact_header(&self.ctx, self.contacts.as_ref(), self.contact_id).await;
        self.contact.as_ref()
    }

    /// `POST /contacts/{id}/addresses`, then on to the contact's page.
    pub async fn submit(&mut self) -> SubmitOutcome<AddressField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(
            self.addresses
                .create(&credential, self.contact_id, &draft)
                .await,
        )
        .map(|_| ());
        self.form
            .settle(
                &self.ctx,
                CREATE,
                result,
                Some(Route::ContactDetail(self.contact_id)),
            )
            .await
    }
}

/// Existing address, loaded on mount.
pub struct EditAddressController {
    ctx: FormContext,
    addresses: Arc<dyn AddressClient>,
    contacts: Arc<dyn ContactClient>,
    contact_id: ContactId,
    address_id: AddressId,
    contact: Option<ContactRecord>,
    form: FormState<AddressDraft>,
}

impl EditAddressController {
    pub fn new(
        ctx: FormContext,
        addresses: Arc<dyn AddressClient>,
        contacts: Arc<dyn ContactClient>,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> Self {
        Self {
            ctx,
            addresses,
            contacts,
            contact_id,
            address_id,
            contact: None,
            form: FormState::loading(AddressDraft::page_schema()),
        }
    }

    /// Creates the controller, reads the address into the draft, then reads
    /// the contact header.
    pub async fn mount(
        ctx: FormContext,
        addresses: Arc<dyn AddressClient>,
        contacts: Arc<dyn ContactClient>,
        contact_id: ContactId,
        address_id: AddressId,
    ) -> (Self, LoadOutcome) {
        let mut controller = Self::new(ctx, addresses, contacts, contact_id, address_id);
        let outcome = controller.load().await;
        controller.load_contact().await;
        (controller, outcome)
    }

    pub fn with_schema(mut self, schema: Schema<AddressDraft>) -> Self {
        self.form.set_schema(schema);
        self
    }

    pub fn contact(&self) -> Option<&ContactRecord> {
        self.contact.as_ref()
    }

    pub fn form(&self) -> &FormState<AddressDraft> {
        &self.form
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// `GET /contacts/{id}/addresses/{addressId}` into the draft.
    pub async fn load(&mut self) -> LoadOutcome {
        if self.form.status() != FormStatus::Loading {
            return LoadOutcome::NotReady(self.form.status());
        }

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(
            self.addresses
                .get(&credential, self.contact_id, self.address_id)
                .await,
        )
        .and_then(|response| {
            response
                .data::<AddressDraft>()
                .map_err(|e| FormFailure::decode(e.to_string()))
        });
        self.form.finish_load(&self.ctx, LOAD_ADDRESS, result).await
    }

    pub async fn load_contact(&mut self) -> Option<&ContactRecord> {
        self.contact = fetch_contact_header(&self.ctx, self.contacts.as_ref(), self.contact_id).await;
        self.contact.as_ref()
    }

    /// `PUT /contacts/{id}/addresses/{addressId}`, then on to the contact's page.
    pub async fn submit(&mut self) -> SubmitOutcome<AddressField> {
        let draft = match self.form.begin(&self.ctx).await {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };

        let credential = self.ctx.session().credential().await;
        let result = FormFailure::check(
            self.addresses
                .update(&credential, self.contact_id, self.address_id, &draft)
                .await,
        )
        .map(|_| ());
        self.form
            .settle(
                &self.ctx,
                UPDATE,
                result,
                Some(Route::ContactDetail(self.contact_id)),
            )
            .await
    }
}
