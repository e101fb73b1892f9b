use serde::{Deserialize, Serialize};

/// Title substituted when an element has no usable heading.
pub const NO_TITLE: &str = "No Title";
/// Description substituted when an element has no usable paragraph.
pub const NO_DESCRIPTION: &str = "No Description";

/// Per-element fields as read from the DOM, before fallback substitution.
///
/// `title` and `description` are `None` when the sub-element lookup missed
/// or its text could not be read.
#[derive(Debug, Clone, Default)]
pub struct RawElement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub text: String,
    pub html: String,
}

/// One extracted result item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Zero-based DOM position of the source element. Assigned before
    /// filtering, so excluded elements leave gaps in the sequence.
    pub index: usize,
    pub title: String,
    pub description: String,
    /// Full visible text of the source element.
    pub text: String,
    /// Serialized outer HTML of the source element.
    pub html: String,
}

impl ExtractedItem {
    /// Build an item from raw fields, substituting the fallback strings for
    /// a missing or blank title/description.
    ///
    /// Returns `None` when both fields resolve to fallbacks; such elements
    /// are excluded from the result.
    pub fn from_raw(index: usize, raw: RawElement) -> Option<Self> {
        let title = resolve_field(raw.title, NO_TITLE);
        let description = resolve_field(raw.description, NO_DESCRIPTION);
        if title == NO_TITLE && description == NO_DESCRIPTION {
            return None;
        }
        Some(Self {
            index,
            title,
            description,
            text: raw.text,
            html: raw.html,
        })
    }
}

fn resolve_field(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Turn per-element raw fields into the final ordered item list.
///
/// Indexes follow the DOM order of the raw elements.
pub fn assemble_items(raw: Vec<RawElement>) -> Vec<ExtractedItem> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, r)| ExtractedItem::from_raw(index, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(title: &str, description: &str) -> RawElement {
        RawElement {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            text: format!("{title} {description}"),
            html: format!("<div><h3>{title}</h3><p>{description}</p></div>"),
        }
    }

    #[test]
    fn complete_elements_keep_dom_order_and_indexes() {
        let raw = vec![
            complete("One", "first"),
            complete("Two", "second"),
            complete("Three", "third"),
        ];
        let items = assemble_items(raw);
        assert_eq!(items.len(), 3);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.index, i);
        }
        assert_eq!(items[0].title, "One");
        assert_eq!(items[2].description, "third");
    }

    #[test]
    fn missing_heading_falls_back_to_no_title() {
        let raw = vec![RawElement {
            title: None,
            description: Some("a card".to_string()),
            ..Default::default()
        }];
        let items = assemble_items(raw);
        assert_eq!(items[0].title, NO_TITLE);
        assert_eq!(items[0].description, "a card");
    }

    #[test]
    fn missing_paragraph_falls_back_to_no_description() {
        let raw = vec![RawElement {
            title: Some("Heading".to_string()),
            description: None,
            ..Default::default()
        }];
        let items = assemble_items(raw);
        assert_eq!(items[0].title, "Heading");
        assert_eq!(items[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn blank_field_text_is_treated_as_missing() {
        let raw = vec![RawElement {
            title: Some("   ".to_string()),
            description: Some("still here".to_string()),
            ..Default::default()
        }];
        assert_eq!(assemble_items(raw)[0].title, NO_TITLE);
    }

    #[test]
    fn field_text_is_trimmed() {
        let raw = vec![RawElement {
            title: Some("  Padded  ".to_string()),
            description: None,
            ..Default::default()
        }];
        assert_eq!(assemble_items(raw)[0].title, "Padded");
    }

    #[test]
    fn element_with_both_fallbacks_is_excluded() {
        let raw = vec![RawElement {
            text: "markup only".to_string(),
            html: "<div></div>".to_string(),
            ..Default::default()
        }];
        assert!(assemble_items(raw).is_empty());
    }

    #[test]
    fn excluded_elements_leave_index_gaps() {
        let raw = vec![RawElement::default(), complete("Kept", "still here")];
        let items = assemble_items(raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].index, 1);
    }

    #[test]
    fn heading_only_element_is_kept_with_fallback_description() {
        // Element A carries both fields; element B has a heading only.
        let raw = vec![
            complete("Alpha", "First item"),
            RawElement {
                title: Some("Beta".to_string()),
                description: None,
                ..Default::default()
            },
        ];
        let items = assemble_items(raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, 0);
        assert_eq!(items[0].title, "Alpha");
        assert_eq!(items[0].description, "First item");
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].title, "Beta");
        assert_eq!(items[1].description, NO_DESCRIPTION);
    }

    #[test]
    fn included_items_retain_text_and_markup() {
        let raw = vec![RawElement {
            title: Some("Card".to_string()),
            description: None,
            text: "Card body".to_string(),
            html: "<div class=\"card\"><h3>Card</h3></div>".to_string(),
        }];
        let items = assemble_items(raw);
        assert_eq!(items[0].text, "Card body");
        assert_eq!(items[0].html, "<div class=\"card\"><h3>Card</h3></div>");
    }

    #[test]
    fn items_serialize_with_stable_field_names() {
        let item = ExtractedItem {
            index: 0,
            title: "T".to_string(),
            description: "D".to_string(),
            text: "T D".to_string(),
            html: "<div></div>".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["title"], "T");
        assert_eq!(json["description"], "D");
        assert_eq!(json["html"], "<div></div>");
    }
}
