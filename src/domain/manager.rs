use super::*;

use chrono::Utc;
use log::{debug, info, warn};
use std::collections::HashSet;

/// Owns the contact list and enforces its invariants.
///
/// Every contact has a non-empty name, phone and email, and no two contacts
/// share a phone or an email. Each successful mutation writes the full list
/// back through [`Persistence`].
pub struct ContactStore {
    contacts: Vec<Contact>,
    editing: Option<u64>,
    persistence: Persistence,
}

/// Aggregate counts shown in the stats strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub friend: usize,
    pub work: usize,
    pub family: usize,
}

impl ContactStore {
    /// Loads the saved list, or starts from the sample contacts when nothing
    /// usable is stored.
    pub fn open(persistence: Persistence) -> Self {
        let contacts = match persistence.load() {
            Some(contacts) => contacts,
            None => {
                info!("event=store_open status=seeded medium={}", persistence.medium());
                sample::sample_contacts()
            }
        };

        Self {
            contacts,
            editing: None,
            persistence,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Contact currently under the edit cursor, if any.
    pub fn editing(&self) -> Option<&Contact> {
        self.editing.and_then(|id| self.get(id))
    }

    pub fn is_memory_only(&self) -> bool {
        self.persistence.is_memory_only()
    }

    pub fn create(&mut self, input: ContactInput) -> Result<Contact, AppError> {
        let input = input.normalized();
        input.validate(self.contacts.iter())?;

        let contact = input.into_contact(self.next_id());
        self.contacts.push(contact.clone());
        self.persist();

        debug!("event=contact_create id={}", contact.id);
        Ok(contact)
    }

    pub fn update(&mut self, id: u64, input: ContactInput) -> Result<Contact, AppError> {
        let position = self.position(id)?;

        let input = input.normalized();
        input.validate(self.contacts.iter().filter(|c| c.id != id))?;

        let contact = input.into_contact(id);
        self.contacts[position] = contact.clone();
        self.editing = None;
        self.persist();

        debug!("event=contact_update id={}", id);
        Ok(contact)
    }

    /// Removes the contact with `id`. Confirming the removal is up to the caller.
    pub fn delete(&mut self, id: u64) -> Result<(), AppError> {
        let position = self.position(id)?;

        self.contacts.remove(position);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.persist();

        debug!("event=contact_delete id={}", id);
        Ok(())
    }

    /// Points the edit cursor at `id` and returns the values to pre-fill.
    pub fn begin_edit(&mut self, id: u64) -> Result<Contact, AppError> {
        let position = self.position(id)?;
        self.editing = Some(id);
        Ok(self.contacts[position].clone())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Contacts matching `term` and `filter`, ordered by name.
    pub fn query(&self, term: Option<&str>, filter: TagFilter) -> Vec<&Contact> {
        search::filter_sorted(&self.contacts, term, filter)
    }

    pub fn stats(&self) -> Stats {
        self.contacts
            .iter()
            .fold(Stats::default(), |mut stats, contact| {
                stats.total += 1;
                match contact.tag {
                    Tag::Friend => stats.friend += 1,
                    Tag::Work => stats.work += 1,
                    Tag::Family => stats.family += 1,
                    Tag::Other => {}
                }
                stats
            })
    }

    fn position(&self, id: u64) -> Result<usize, AppError> {
        self.contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    // Millisecond clock, bumped past the largest id in use.
    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let max = self.contacts.iter().map(|c| c.id).max().unwrap_or_default();

        if now > max {
            return now;
        }

        match max.checked_add(1) {
            Some(id) => id,
            None => {
                warn!("event=contact_id status=exhausted fallback=lowest_free");
                self.lowest_free_id()
            }
        }
    }

    // There are fewer contacts than ids, so a free one always exists.
    fn lowest_free_id(&self) -> u64 {
        let used: HashSet<u64> = self.contacts.iter().map(|c| c.id).collect();
        (1..=u64::MAX)
            .find(|id| !used.contains(id))
            .unwrap_or_default()
    }

    fn persist(&mut self) {
        self.persistence.save(&self.contacts);
    }
}
