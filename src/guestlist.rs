//! Bulk import of the spreadsheet guestlist export.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use diesel::prelude::*;
use log::debug;

use crate::error::Result;
use crate::models::{GuestRow, NewGuest};
use crate::schema::guests;

/// Fixed input name, read from the working directory.
pub const GUESTLIST_FILE: &str = "guestlist.csv";

fn csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(source)
}

/// Open `path` and run [`import`] over it.
pub fn import_file<P: AsRef<Path>>(conn: &mut MysqlConnection, path: P) -> Result<usize> {
    let file = File::open(path)?;
    import(conn, file)
}

/// Insert every row of the export into the guests table, one parameterized
/// insert per row, committed as a single transaction after the last row.
///
/// Rows with a plus-one name produce the 4-column insert, rows without one
/// the 3-column insert. A malformed row or a failed insert aborts the whole
/// run and nothing is committed. Nothing deduplicates: re-running over the
/// same export re-issues every insert.
pub fn import<R: Read>(conn: &mut MysqlConnection, source: R) -> Result<usize> {
    let mut reader = csv_reader(source);

    conn.transaction(|conn| {
        let mut imported = 0;
        for result in reader.deserialize() {
            let row: GuestRow = result?;
            let guest = NewGuest::from(row);
            debug!("inserting guest {}", guest.id);
            diesel::insert_into(guests::table)
                .values(&guest)
                .execute(conn)?;
            imported += 1;
        }
        Ok(imported)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GuestRow;

    #[test]
    fn parses_headerless_rows_positionally() {
        let export = "123e4567-e89b,Jane Doe,TRUE,John Doe\nabcd1234,Bob Smith,FALSE,\n";
        let rows: Vec<GuestRow> = csv_reader(export.as_bytes())
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].invitation_id, "123e4567-e89b");
        assert_eq!(rows[0].guest_name, "Jane Doe");
        assert_eq!(rows[0].plus_one_allowed, "TRUE");
        assert_eq!(rows[0].plus_one_name, "John Doe");
        assert_eq!(rows[1].plus_one_allowed, "FALSE");
        assert_eq!(rows[1].plus_one_name, "");
    }

    #[test]
    fn short_row_is_an_error() {
        let mut reader = csv_reader("abcd1234,Bob Smith,FALSE".as_bytes());
        let results: Vec<_> = reader.deserialize::<GuestRow>().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
