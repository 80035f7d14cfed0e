//! Output formatting utilities

use crate::application::{BuildReport, CollectionSummary};
use crate::domain::ContentItem;

/// Format collection items for display
pub fn format_item_list(items: &[ContentItem]) -> String {
    if items.is_empty() {
        return "No items found".to_string();
    }

    let mut output = String::new();
    for item in items {
        let label = item.title().unwrap_or(item.slug());
        match item.date() {
            Some(date) => {
                output.push_str(&format!(
                    "{}  {}  {}\n",
                    date.format("%Y-%m-%d"),
                    label,
                    item.url()
                ));
            }
            // Undated: pad to keep columns aligned
            None => output.push_str(&format!("            {}  {}\n", label, item.url())),
        }
    }
    output
}

/// Format registered collections for display
pub fn format_collection_list(collections: &[CollectionSummary]) -> String {
    if collections.is_empty() {
        return "No collections registered".to_string();
    }

    let mut output = String::new();
    for c in collections {
        output.push_str(&format!(
            "{}  {}  ({} items, {} dated)\n",
            c.name, c.glob, c.items, c.dated
        ));
    }
    output
}

/// Format a build report for display
pub fn format_build_report(report: &BuildReport) -> String {
    let mut output = String::new();
    for (name, items, dated) in &report.collections {
        output.push_str(&format!("{}: {} items ({} dated)\n", name, items, dated));
    }
    output.push_str(&format!("Copied {} passthrough files\n", report.files_copied));
    output.push_str(&format!("Wrote {}\n", report.manifest.display()));
    output
}
