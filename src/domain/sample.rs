use super::*;

/// Contacts a fresh book starts with when nothing has been saved yet.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "John Doe".to_string(),
            phone: "+1234567890".to_string(),
            email: "john.doe@example.com".to_string(),
            tag: Tag::Friend,
        },
        Contact {
            id: 2,
            name: "Jane Smith".to_string(),
            phone: "+0987654321".to_string(),
            email: "jane.smith@company.com".to_string(),
            tag: Tag::Work,
        },
        Contact {
            id: 3,
            name: "Mom".to_string(),
            phone: "+1122334455".to_string(),
            email: "mom@family.com".to_string(),
            tag: Tag::Family,
        },
    ]
}
