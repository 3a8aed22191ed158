//! List filtering shared by the gallery, events and admin listings.

use crate::models::{Category, ContentItem, ContentType, Image};

/// A record that belongs to exactly one kind (category, content type).
pub trait Classified {
    type Kind: Copy + PartialEq;

    fn kind(&self) -> Self::Kind;
}

/// A record addressed by a numeric id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Classified for Image {
    type Kind = Category;

    fn kind(&self) -> Category {
        self.category
    }
}

impl Classified for ContentItem {
    type Kind = ContentType;

    fn kind(&self) -> ContentType {
        self.content_type
    }
}

impl Identified for Image {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for ContentItem {
    fn id(&self) -> i64 {
        self.id
    }
}

/// The selection of a filter button row: everything, or a single kind.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Filter<K> {
    #[default]
    All,
    Only(K),
}

impl<K: Copy + PartialEq> Filter<K> {
    pub fn matches<T: Classified<Kind = K>>(&self, item: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(kind) => item.kind() == *kind,
        }
    }

    /// Items passing the filter, in their original order.
    pub fn apply<T: Classified<Kind = K> + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|item| self.matches(*item)).cloned().collect()
    }

    pub fn count<T: Classified<Kind = K>>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }
}

/// Drop the record with `id` from a displayed list. Returns whether it was present.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i64) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Find a record by id.
pub fn find_by_id<T: Identified>(items: &[T], id: i64) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}
