use crate::application::read_models::UsageReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter: the read model serialized as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &UsageReadModel) -> Result<String> {
        let mut output = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize usage report to JSON: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
