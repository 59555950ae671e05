//! Renders a per-term match summary as a table.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use wordfilter_core::MatchSummaryItem;

pub fn render_summary(summary: &[MatchSummaryItem]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Level", "Term", "Occurrences"]);

    for item in summary {
        table.add_row(vec![
            item.level.to_string(),
            item.term.clone(),
            item.occurrences.to_string(),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfilter_core::SeverityLevel;

    #[test]
    fn test_table_lists_every_item() {
        let summary = vec![
            MatchSummaryItem { level: SeverityLevel::Medium, term: "stupid".into(), occurrences: 2 },
            MatchSummaryItem { level: SeverityLevel::Low, term: "heck".into(), occurrences: 1 },
        ];
        let rendered = render_summary(&summary);
        assert!(rendered.contains("Occurrences"));
        assert!(rendered.contains("stupid"));
        assert!(rendered.contains("medium"));
        assert!(rendered.contains("heck"));
    }
}
