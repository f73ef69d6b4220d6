use crate::error::LoadResult;
use crate::models::Lounge;
use std::io::Read;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).trim(csv::Trim::All);
    builder
}

/// Decode a raw record, replacing invalid UTF-8 instead of failing the row
fn decode_record(record: &csv::ByteRecord) -> csv::StringRecord {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).trim().to_string())
        .collect()
}

/// Parse lounge rows from any CSV source. The header row names the fields.
///
/// Rows shorter than the header are padded with empty fields. Rows that
/// still cannot be read are logged and skipped so one bad line does not
/// hide the rest of the sheet.
pub fn read_lounges_from_reader<R: Read>(reader: R) -> LoadResult<Vec<Lounge>> {
    let mut rdr = reader_builder().from_reader(reader);
    let headers = decode_record(rdr.byte_headers()?);

    let mut lounges = Vec::new();
    for (idx, result) in rdr.byte_records().enumerate() {
        let row = idx + 1;
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Skipping unreadable CSV row {}: {}", row, e);
                continue;
            }
        };

        let mut record = decode_record(&raw);
        while record.len() < headers.len() {
            record.push_field("");
        }

        match record.deserialize::<Lounge>(Some(&headers)) {
            Ok(lounge) => lounges.push(lounge),
            Err(e) => log::warn!("Skipping invalid CSV row {}: {}", row, e),
        }
    }

    Ok(lounges)
}

/// Parse lounge rows from an in-memory CSV document
pub fn parse_lounges(content: &str) -> LoadResult<Vec<Lounge>> {
    read_lounges_from_reader(content.as_bytes())
}

/// Read lounge rows from a CSV file on disk
pub fn read_lounges(path: &str) -> LoadResult<Vec<Lounge>> {
    let file = std::fs::File::open(path)?;
    read_lounges_from_reader(std::io::BufReader::new(file))
}
