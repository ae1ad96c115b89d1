use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cihui_types::VocabularyRecord;

use crate::error::ExportError;

pub fn write_json<W: Write>(records: &[VocabularyRecord], writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

pub fn save_json(records: &[VocabularyRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(records, &mut writer)?;
    writer.flush()?;
    tracing::info!("Wrote {} records as JSON to {}", records.len(), path.display());
    Ok(())
}
