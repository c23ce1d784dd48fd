//! Free-text search filter.
//!
//! # Responsibility
//! - Filter item sets by case-insensitive substring match across a
//!   configurable field list.
//!
//! # Invariants
//! - An empty term is the identity filter.
//! - Matching is OR across the requested fields.
//! - The input is never mutated and order is preserved, so filtering
//!   commutes with the partitioners.

use crate::model::event::Event;
use crate::model::guide::Guide;
use crate::model::habit::Habit;
use crate::model::item::{Document, Recommendation, Reminder};
use crate::model::office::ServiceOffice;
use crate::model::resource::Resource;

/// Text fields the filter can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Description,
    Category,
    /// Street address (service offices).
    Address,
    /// Offered-services list (service offices).
    Services,
}

/// The common field set shared by every item kind.
pub const TEXT_FIELDS: [SearchField; 3] = [
    SearchField::Title,
    SearchField::Description,
    SearchField::Category,
];

/// Seam for items the search filter can inspect.
pub trait Searchable {
    /// Appends the text values this item holds for `field`.
    ///
    /// Items without the field append nothing; list-valued fields append
    /// one entry per element.
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>);
}

/// Keeps the items matching `term` in at least one of `fields`.
///
/// Case-insensitive substring match. An empty `term` returns the input
/// unchanged.
pub fn search<T: Searchable + Clone>(items: &[T], term: &str, fields: &[SearchField]) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    let mut texts = Vec::new();
    items
        .iter()
        .filter(|item| {
            texts.clear();
            for field in fields {
                item.collect_text(*field, &mut texts);
            }
            texts
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

impl Searchable for Document {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for Reminder {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for Recommendation {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for Guide {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for Habit {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for Event {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

impl Searchable for ServiceOffice {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.name),
            SearchField::Category => out.push(&self.category),
            SearchField::Address => out.push(&self.address),
            SearchField::Services => {
                out.extend(self.offered_services.iter().map(String::as_str));
            }
            SearchField::Description => {}
        }
    }
}

impl Searchable for Resource {
    fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
        match field {
            SearchField::Title => out.push(&self.title),
            SearchField::Description => out.push(&self.description),
            SearchField::Category => out.push(&self.category),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{search, SearchField, Searchable, TEXT_FIELDS};

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        title: &'static str,
        description: &'static str,
    }

    impl Searchable for Entry {
        fn collect_text<'a>(&'a self, field: SearchField, out: &mut Vec<&'a str>) {
            match field {
                SearchField::Title => out.push(self.title),
                SearchField::Description => out.push(self.description),
                _ => {}
            }
        }
    }

    #[test]
    fn empty_term_is_identity() {
        let entries = vec![Entry {
            title: "Passport",
            description: "travel",
        }];
        assert_eq!(search(&entries, "", &TEXT_FIELDS), entries);
    }

    #[test]
    fn match_is_case_insensitive_and_or_across_fields() {
        let entries = vec![
            Entry {
                title: "Passport",
                description: "International travel document",
            },
            Entry {
                title: "PAN Card",
                description: "Tax identification",
            },
        ];
        let hits = search(&entries, "TRAVEL", &TEXT_FIELDS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Passport");

        let none = search(&entries, "travel", &[SearchField::Title]);
        assert!(none.is_empty());
    }
}
