use std::io::Write;
use std::time::Duration;

use crate::Row;

/// Column names of the CSV table, in order
pub const HEADER: [&str; 7] = [
    "Size",
    "BST_Random_Insert",
    "BST_Balanced_Insert",
    "SortedSet_Insert",
    "BST_Random_Delete",
    "BST_Balanced_Delete",
    "SortedSet_Delete",
];

/// Writes one record per row after the header. Times are in milliseconds.
pub fn write_csv<W: Write>(rows: &[Row], writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&HEADER)?;

    for row in rows {
        writer.write_record(&[
            row.size.to_string(),
            millis(row.random_insert).to_string(),
            millis(row.balanced_insert).to_string(),
            millis(row.reference_insert).to_string(),
            millis(row.random_delete).to_string(),
            millis(row.balanced_delete).to_string(),
            millis(row.reference_delete).to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Logs a human readable summary of each row, including the tree heights
pub fn log_summary(rows: &[Row]) {
    for row in rows {
        log::info!(
            "n = {:>6}: insert {:>9.3}ms random / {:>9.3}ms balanced / {:>9.3}ms set, \
             delete {:>9.3}ms random / {:>9.3}ms balanced / {:>9.3}ms set, \
             height {} random / {} balanced",
            row.size,
            millis(row.random_insert),
            millis(row.balanced_insert),
            millis(row.reference_insert),
            millis(row.random_delete),
            millis(row.balanced_delete),
            millis(row.reference_delete),
            row.random_height,
            row.balanced_height,
        );
    }
}

pub(crate) fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
