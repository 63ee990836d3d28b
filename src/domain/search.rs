use super::*;
use feruca::Collator;
use std::{cmp::Ordering, fmt, str::FromStr};

/// Tag restriction applied by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    Any,
    Only(Tag),
}

impl TagFilter {
    pub fn accepts(&self, contact: &Contact) -> bool {
        match self {
            TagFilter::Any => true,
            TagFilter::Only(tag) => contact.tag == *tag,
        }
    }
}

impl From<Tag> for TagFilter {
    fn from(tag: Tag) -> Self {
        TagFilter::Only(tag)
    }
}

impl FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return Ok(TagFilter::Any);
        }
        Ok(TagFilter::Only(s.parse()?))
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::Any => f.write_str("any"),
            TagFilter::Only(tag) => write!(f, "{}", tag),
        }
    }
}

/// Case-insensitive substring match against name, phone or email.
/// `term` must already be lowercased; an empty term matches everything.
/// The term is used as typed, surrounding spaces included.
pub fn matches_term(contact: &Contact, term: &str) -> bool {
    term.is_empty()
        || contact.name.to_lowercase().contains(term)
        || contact.phone.to_lowercase().contains(term)
        || contact.email.to_lowercase().contains(term)
}

/// Unicode collation (CLDR root order): accents sort next to their base
/// letter and lowercase comes before uppercase when names otherwise tie.
pub fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}

/// Filters `contacts` and orders the result by name.
///
/// `sort_by` is stable, so contacts with equal names keep their input order.
pub fn filter_sorted<'a, I>(contacts: I, term: Option<&str>, filter: TagFilter) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let term = term.map(|t| t.to_lowercase()).unwrap_or_default();

    let mut result: Vec<&Contact> = contacts
        .into_iter()
        .filter(|c| filter.accepts(c) && matches_term(c, &term))
        .collect();

    let mut collator = Collator::default();
    result.sort_by(|a, b| compare_names(&mut collator, &a.name, &b.name));
    result
}
