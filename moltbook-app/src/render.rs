use moltbook_crawler::item::ExtractedItem;

/// Render items the way the interactive front end lists them: a separator,
/// the one-based position with the title, the description, then the raw
/// markup of the source element.
pub fn render_text(items: &[ExtractedItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("---\n");
        out.push_str(&format!("{}. {}\n", item.index + 1, item.title));
        out.push_str(&item.description);
        out.push('\n');
        out.push_str("Raw HTML:\n");
        out.push_str(&item.html);
        out.push('\n');
    }
    out
}

/// Render the item list as pretty-printed JSON.
pub fn render_json(items: &[ExtractedItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, title: &str, description: &str) -> ExtractedItem {
        ExtractedItem {
            index,
            title: title.to_string(),
            description: description.to_string(),
            text: format!("{title} {description}"),
            html: format!("<div><h3>{title}</h3></div>"),
        }
    }

    #[test]
    fn text_output_numbers_items_from_one() {
        let rendered = render_text(&[item(0, "Alpha", "First item")]);
        assert!(rendered.contains("1. Alpha"));
        assert!(rendered.contains("First item"));
        assert!(rendered.contains("<div><h3>Alpha</h3></div>"));
    }

    #[test]
    fn text_output_numbers_follow_dom_positions() {
        // An excluded element leaves a gap; numbering tracks DOM position.
        let rendered = render_text(&[item(1, "Beta", "Second card")]);
        assert!(rendered.contains("2. Beta"));
    }

    #[test]
    fn json_output_is_an_array_of_items() {
        let rendered = render_json(&[item(0, "Alpha", "First item")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["title"], "Alpha");
        assert_eq!(parsed[0]["index"], 0);
        assert_eq!(parsed[0]["description"], "First item");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_text(&[]).is_empty());
    }
}
