//! CSV writer for the parsed message table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::config::OutputConfig;
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes messages to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `User`, `Message`, followed by the derived time
///   parts when [`OutputConfig::include_time_parts`] is set
/// - Multi-line messages are quoted, their line breaks kept
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_records(messages, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Timestamp", "User", "Message"];
    if config.include_time_parts {
        header.extend([
            "Date", "Year", "Month", "MonthNum", "Day", "DayName", "Hour", "Minute", "Period",
        ]);
    }
    header
}

fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = vec![
        msg.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        msg.user().to_string(),
        msg.text().to_string(),
    ];

    if config.include_time_parts {
        let time = msg.time();
        record.extend([
            time.date.to_string(),
            time.year.to_string(),
            time.month.to_string(),
            time.month_num.to_string(),
            time.day.to_string(),
            time.day_name.to_string(),
            time.hour.to_string(),
            time.minute.to_string(),
            time.period.clone(),
        ]);
    }

    record
}
