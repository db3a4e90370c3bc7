use std::io::Error;
use tempfile::NamedTempFile;

pub const HEADER: [&str; 4] = ["action", "arg1", "arg2", "arg3"];

/// Writes an intent script with the standard header to a temp file.
pub fn write_script(rows: &[&[&str]]) -> Result<NamedTempFile, Error> {
    let file = NamedTempFile::new()?;
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(file.path())?;

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(*row)?;
    }

    wtr.flush()?;
    Ok(file)
}

/// Two players with 100 each, ready to bet.
pub fn heads_up() -> Vec<&'static [&'static str]> {
    vec![
        &["roster", "2"][..],
        &["setup", "0", "Alice", "100"][..],
        &["setup", "1", "Bob", "100"][..],
        &["start"][..],
    ]
}
