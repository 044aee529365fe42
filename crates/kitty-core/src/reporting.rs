use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::AllocationResult;

/// Write an allocation result as pretty JSON (2-space indent, camelCase keys).
pub fn write_allocation_json(path: &Path, result: &AllocationResult) -> Result<()> {
    let content = serde_json::to_string_pretty(result).context("serialize allocation result")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

/// Render a markdown summary table of an allocation.
pub fn render_allocation_md(result: &AllocationResult) -> String {
    let mut out = String::new();
    out.push_str("# Allocation Summary\n\n");
    out.push_str(&format!(
        "- agents: {}\n- total allocated: {}\n- remaining kitty: {}\n\n",
        result.allocations.len(),
        result.total_allocated,
        result.remaining_kitty
    ));

    if result.allocations.is_empty() {
        out.push_str("No agents to allocate to.\n");
        return out;
    }

    out.push_str("| Agent | Discount | Justification |\n");
    out.push_str("|---|---:|---|\n");
    for a in &result.allocations {
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            a.id, a.assigned_discount, a.justification
        ));
    }
    out
}
