use crate::application::dto::SearchMode;
use crate::application::read_models::{DeletionView, UsageReadModel, UsageSectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for usage rows
const TABLE_HEADER: &str = "| | Asset | Path |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---|-------|------|\n";

/// MarkdownFormatter adapter for a reviewable Markdown usage report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, model: &UsageReadModel) {
        output.push_str("# Asset Usage Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}\n\n",
            model.metadata.tool_name, model.metadata.tool_version, model.metadata.timestamp
        ));
    }

    fn render_section(&self, output: &mut String, section: &UsageSectionView) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_markdown_table_cell(&section.asset)
        ));

        if !section.known {
            output.push_str("*Not part of the asset database*\n\n");
            return;
        }

        let description = match section.mode {
            SearchMode::Direct => "Assets that reference it directly:",
            SearchMode::Transitive => {
                "The asset is used by the following assets (directly or indirectly):"
            }
        };
        output.push_str(description);
        output.push_str("\n\n");

        if section.rows.is_empty() {
            output.push_str("*No usages found*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for row in &section.rows {
            let marker = if row.in_resources { "RES" } else { "" };
            output.push_str(&format!(
                "| {} | {} | `{}` |\n",
                marker,
                Self::escape_markdown_table_cell(&row.file_name),
                Self::escape_markdown_table_cell(&row.path)
            ));
        }
        output.push('\n');
    }

    fn render_deletions(&self, output: &mut String, deletions: &DeletionView) {
        output.push_str("## Deleted Assets\n\n");
        if deletions.deleted.is_empty() {
            output.push_str("*Nothing was deleted*\n\n");
        }
        for path in &deletions.deleted {
            output.push_str(&format!("- `{}`\n", path));
        }

        if !deletions.failed.is_empty() {
            output.push_str("\n### Failed Deletions\n\n");
            for failure in &deletions.failed {
                output.push_str(&format!(
                    "- `{}`: {}\n",
                    failure.path,
                    failure.reason.replace('\n', " ")
                ));
            }
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, model: &UsageReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        for section in &model.sections {
            self.render_section(&mut output, section);
        }
        if let Some(deletions) = &model.deletions {
            self.render_deletions(&mut output, deletions);
        }

        Ok(output)
    }
}
