//! Demo and sample-data fixtures.

use crate::model::contact::{Contact, ContactDraft, ValidationError};

/// Fixture rows as `(name, email, message)`.
pub const SAMPLE_CONTACTS: [(&str, &str, &str); 5] = [
    (
        "John Doe",
        "john.doe@example.com",
        "Hello! I'm John, a software developer interested in your services.",
    ),
    (
        "Jane Smith",
        "jane.smith@company.com",
        "Hi there! I'd like to discuss a potential collaboration.",
    ),
    (
        "Mike Johnson",
        "mike.j@email.com",
        "Great website! Looking forward to working together.",
    ),
    (
        "Sarah Wilson",
        "sarah.wilson@corp.com",
        "I have some questions about your products and services.",
    ),
    (
        "David Brown",
        "david.brown@startup.io",
        "Impressive work! Let's connect and explore opportunities.",
    ),
];

/// Sample rows as validated drafts, ready for `replace_all`.
pub fn sample_drafts() -> Result<Vec<ContactDraft>, ValidationError> {
    SAMPLE_CONTACTS
        .iter()
        .map(|(name, email, message)| ContactDraft::parse(name, email, message))
        .collect()
}

/// Static demo listing with ids `1..=5`; never touches the store.
pub fn demo_contacts() -> Vec<Contact> {
    SAMPLE_CONTACTS
        .iter()
        .zip(1..)
        .map(|((name, email, message), id)| Contact {
            id,
            name: (*name).to_string(),
            email: (*email).to_string(),
            message: (*message).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{demo_contacts, sample_drafts, SAMPLE_CONTACTS};

    #[test]
    fn every_sample_passes_validation() {
        let drafts = sample_drafts().unwrap();
        assert_eq!(drafts.len(), SAMPLE_CONTACTS.len());
    }

    #[test]
    fn demo_contacts_are_numbered_from_one() {
        let ids: Vec<_> = demo_contacts().iter().map(|contact| contact.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(demo_contacts()[0].name, "John Doe");
    }
}
