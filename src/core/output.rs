use crate::core::Row;
use crate::utils::error::{ConvertError, Result};

/// 先寫標題列，再逐列輸出；引號跳脫完全交給 csv writer
pub fn render_csv(rows: &[Row]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(Row::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ConvertError::IoError(e.into_error()))
}
