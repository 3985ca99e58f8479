//! Pull driver
//!
//! List every stack, map and validate each one in fetch order, then write the
//! whole collection at once. Any error stops the run before the file is
//! touched.

use crate::aws::StackApi;
use crate::error::Result;
use crate::stack::{load_pages, map_summary, StackRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Indentation used in the report file
const REPORT_INDENT: &[u8] = b"    ";

/// Fetch, map and validate every stack
pub async fn collect_records<A>(api: &A) -> Result<Vec<StackRecord>>
where
    A: StackApi + ?Sized,
{
    let pages = load_pages(move |token| api.list_stacks(token)).await?;
    tracing::info!("Listed {} page(s) of stacks", pages.len());

    let mut records = Vec::new();
    for page in &pages {
        for summary in &page.items {
            let record = map_summary(api, summary).await?.validate()?;
            records.push(record);
        }
    }

    tracing::info!("Mapped {} stack(s)", records.len());
    Ok(records)
}

/// Render records as a JSON array with 4-space indentation
pub fn render_report(records: &[StackRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(REPORT_INDENT));
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the report; the JSON is fully rendered before the file is created
pub fn write_report(path: &Path, records: &[StackRecord]) -> Result<()> {
    let json = render_report(records)?;
    std::fs::write(path, json)?;
    tracing::info!("Wrote {} record(s) to {:?}", records.len(), path);
    Ok(())
}

/// Existing paths are used as-is; anything else becomes `cwd/<file name>`
pub fn resolve_output_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }
    match path.file_name() {
        Some(name) => cwd.join(name),
        None => cwd.join(path),
    }
}
