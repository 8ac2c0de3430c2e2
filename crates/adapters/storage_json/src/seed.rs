//! Demo contacts written to a fresh store when seeding is enabled.

use contactbook_domain::contact::{Contact, ContactStatus};
use contactbook_domain::contact_list::ContactList;
use contactbook_domain::error::ValidationError;
use contactbook_domain::id::ContactId;

const DEMO: [(&str, &str, &str, ContactStatus); 5] = [
    (
        "Ivan Petrov",
        "ivan.petrov@example.com",
        "+7 (999) 123-45-67",
        ContactStatus::Active,
    ),
    (
        "Anna Sidorova",
        "anna.s@example.com",
        "+7 (999) 234-56-78",
        ContactStatus::Active,
    ),
    (
        "Mikhail Ivanov",
        "m.ivanov@example.com",
        "+7 (999) 345-67-89",
        ContactStatus::Inactive,
    ),
    (
        "Elena Smirnova",
        "elena.s@example.com",
        "+7 (999) 456-78-90",
        ContactStatus::Active,
    ),
    (
        "Dmitry Kozlov",
        "d.kozlov@example.com",
        "+7 (999) 567-89-01",
        ContactStatus::Inactive,
    ),
];

/// The demo contact list, ids 1 through 5.
///
/// # Errors
///
/// Fails only if the demo table itself repeats an id.
pub fn demo_contacts() -> Result<ContactList, ValidationError> {
    let contacts = (1..)
        .zip(DEMO)
        .map(|(id, (name, email, phone, status))| Contact {
            id: ContactId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            status,
        })
        .collect();
    ContactList::try_new(contacts)
}
