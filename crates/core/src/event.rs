//! Event entity: the thing users plan, list, and edit.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::EventId;

/// A planned event.
///
/// # Invariants
/// - `creator` is the email of an existing user (FK in the relational store).
/// - Only the creator may update or delete the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub creator: String,
    pub title: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
}

/// Input for creating an event. The creator is not part of the draft; it is
/// taken from the authenticated request.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub location: String,
}

impl EventDraft {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        Ok(())
    }

    pub fn into_event(self, creator: impl Into<String>) -> Event {
        Event {
            id: EventId::new(),
            creator: creator.into(),
            title: self.title,
            image: self.image,
            description: self.description,
            tags: self.tags,
            location: self.location,
        }
    }
}

/// Partial update for an event. `None` means "leave the field unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub location: Option<String>,
}

impl EventPatch {
    /// True when no field is present (the update is a no-op).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.location.is_none()
    }

    /// Apply the present fields onto `event`, leaving the rest untouched.
    pub fn apply_to(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(image) = &self.image {
            event.image = image.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(tags) = &self.tags {
            event.tags = tags.clone();
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn book_launch() -> Event {
        EventDraft {
            title: "FastAPI Book Launch".to_string(),
            image: "https://linktomyimage.com/image.png".to_string(),
            description: "We will be discussing the contents of the book.".to_string(),
            tags: vec!["python".to_string(), "book".to_string()],
            location: "Google Meet".to_string(),
        }
        .into_event("reader@packt.com")
    }

    #[test]
    fn draft_rejects_blank_title() {
        let draft = EventDraft {
            title: "   ".to_string(),
            image: String::new(),
            description: String::new(),
            tags: vec![],
            location: String::new(),
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut event = book_launch();
        let patch = EventPatch {
            title: Some("Updated FastAPI event".to_string()),
            ..EventPatch::default()
        };

        patch.apply_to(&mut event);

        assert_eq!(event.title, "Updated FastAPI event");
        assert_eq!(event.location, "Google Meet");
        assert_eq!(event.tags.len(), 2);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut event = book_launch();
        let before = event.clone();

        let patch = EventPatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut event);

        assert_eq!(event, before);
    }

    proptest! {
        // Any combination of present/absent fields: absent fields survive,
        // present fields land verbatim.
        #[test]
        fn patch_merge_is_field_local(
            title in proptest::option::of(".*"),
            image in proptest::option::of(".*"),
            description in proptest::option::of(".*"),
            tags in proptest::option::of(proptest::collection::vec(".*", 0..4)),
            location in proptest::option::of(".*"),
        ) {
            let mut event = book_launch();
            let before = event.clone();
            let patch = EventPatch { title, image, description, tags, location };

            patch.apply_to(&mut event);

            prop_assert_eq!(&event.title, patch.title.as_ref().unwrap_or(&before.title));
            prop_assert_eq!(&event.image, patch.image.as_ref().unwrap_or(&before.image));
            prop_assert_eq!(
                &event.description,
                patch.description.as_ref().unwrap_or(&before.description)
            );
            prop_assert_eq!(&event.tags, patch.tags.as_ref().unwrap_or(&before.tags));
            prop_assert_eq!(&event.location, patch.location.as_ref().unwrap_or(&before.location));
            prop_assert_eq!(event.id, before.id);
            prop_assert_eq!(&event.creator, &before.creator);
        }
    }
}
