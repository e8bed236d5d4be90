//! HTML timeline rendering.
//!
//! The renderer is deliberately dumb: it serialises the collected
//! [`Timeline`] into two JSON arrays (lanes and items) and splices them into
//! an embedded single-page template built on vis-timeline. All filtering and
//! ordering decisions were already made by the collector; nothing here drops
//! or reorders events.

use logweave_collect::Timeline;
use serde_json::json;

const TEMPLATE: &str = include_str!("../assets/timeline.html");

/// Page-level knobs for the rendered output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub subtitle: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Logweave Timeline".to_string(),
            subtitle: "Grouped view of Salt and Uyuni log events".to_string(),
        }
    }
}

/// Render the timeline into a self-contained HTML page.
pub fn render(timeline: &Timeline, options: &RenderOptions) -> String {
    let groups: Vec<serde_json::Value> = timeline
        .groups
        .iter()
        .map(|lane| {
            json!({
                "id": lane.group.id(),
                "content": lane.group.display_name(),
            })
        })
        .collect();

    let items: Vec<serde_json::Value> = timeline
        .groups
        .iter()
        .flat_map(|lane| lane.events.iter())
        .map(|event| {
            json!({
                "id": event.sequence_id,
                "group": event.group.id(),
                "content": escape_html(&event.label),
                "title": escape_html(&event.label),
                "start": event.timestamp.format("%Y-%m-%dT%H:%M:%S%.3f").to_string(),
                "className": event.color,
                "record": event.raw,
            })
        })
        .collect();

    TEMPLATE
        .replace("__TITLE__", &escape_html(&options.title))
        .replace("__SUBTITLE__", &escape_html(&options.subtitle))
        .replace("__GROUPS__", &embed_json(&serde_json::Value::from(groups)))
        .replace("__ITEMS__", &embed_json(&serde_json::Value::from(items)))
}

/// Serialise a JSON value for inline embedding in a `<script>` block. A
/// literal `</` inside a string would end the script element early, so it is
/// emitted as the equivalent escape `<\/`.
fn embed_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
