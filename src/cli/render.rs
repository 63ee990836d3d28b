use crate::prelude::{Contact, Notice, NoticeKind, Stats};

pub const NO_CONTACTS: &str = "No contacts found matching your criteria.";

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "#{} {} [{}]\n\
        \tPhone: {}\n\
        \tEmail: {}",
        contact.id, contact.name, contact.tag, contact.phone, contact.email
    )
}

pub fn display_contacts(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return NO_CONTACTS.to_string();
    }

    contacts
        .iter()
        .map(|c| display_contact(c))
        .collect::<Vec<String>>()
        .join("\n\n")
}

pub fn display_stats(stats: &Stats) -> String {
    format!(
        "Total: {} | Friends: {} | Work: {} | Family: {}",
        stats.total, stats.friend, stats.work, stats.family
    )
}

pub fn display_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => notice.message.clone(),
        NoticeKind::Error => format!("Error: {}", notice.message),
    }
}
