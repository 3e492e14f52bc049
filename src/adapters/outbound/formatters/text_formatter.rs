use crate::application::dto::SearchMode;
use crate::application::read_models::{DeletionView, UsageReadModel, UsageSectionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

const RESOURCES_MARKER: &str = "RES";

/// TextFormatter adapter: a terminal listing of each usage section
///
/// Assets under a resources directory are flagged with `RES`, in red when
/// colors are enabled, since code may load them by name and the dependency
/// graph cannot see that.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    /// Colors are enabled when stdout is a terminal
    pub fn new() -> Self {
        Self {
            colored: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn resources_cell(&self, in_resources: bool) -> String {
        match (in_resources, self.colored) {
            (false, _) => " ".repeat(RESOURCES_MARKER.len()),
            (true, false) => RESOURCES_MARKER.to_string(),
            (true, true) => RESOURCES_MARKER.red().to_string(),
        }
    }

    fn render_section(&self, output: &mut String, section: &UsageSectionView) {
        output.push_str(&format!("{}\n", section.asset));

        if !section.known {
            output.push_str("  (not part of the asset database)\n\n");
            return;
        }

        if section.rows.is_empty() {
            output.push_str("  No usages found.\n\n");
            return;
        }

        let heading = match section.mode {
            SearchMode::Direct => "Assets that reference it directly:",
            SearchMode::Transitive => {
                "The asset is used by the following assets (directly or indirectly):"
            }
        };
        output.push_str(&format!("{}\n", heading));

        let name_width = section
            .rows
            .iter()
            .map(|row| row.file_name.chars().count())
            .max()
            .unwrap_or(0);

        for row in &section.rows {
            output.push_str(&format!(
                "  {} {:<width$}  {}\n",
                self.resources_cell(row.in_resources),
                row.file_name,
                row.path,
                width = name_width
            ));
        }
        output.push('\n');
    }

    fn render_deletions(&self, output: &mut String, deletions: &DeletionView) {
        for path in &deletions.deleted {
            output.push_str(&format!("Deleted {}\n", path));
        }
        for failure in &deletions.failed {
            output.push_str(&format!(
                "Failed to delete {}: {}\n",
                failure.path,
                failure.reason.lines().next().unwrap_or_default()
            ));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, model: &UsageReadModel) -> Result<String> {
        let mut output = String::new();

        for section in &model.sections {
            self.render_section(&mut output, section);
        }
        if let Some(deletions) = &model.deletions {
            self.render_deletions(&mut output, deletions);
        }

        Ok(output)
    }
}
