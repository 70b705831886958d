use super::schema::guests;
use diesel::prelude::*;
use serde::Deserialize;

/// One line of the guestlist export: four positional columns, no header row.
#[derive(Debug, Deserialize)]
pub struct GuestRow {
    pub invitation_id: String,
    pub guest_name: String,
    pub plus_one_allowed: String,
    pub plus_one_name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = guests)]
pub struct NewGuest {
    pub id: String,
    pub guest_name: String,
    pub plus_one_allowed: bool,
    pub plus_one_name: Option<String>,
}

impl From<GuestRow> for NewGuest {
    fn from(row: GuestRow) -> Self {
        // The allowance flag must be the exact string "TRUE"; the
        // spreadsheet export writes it uppercased, anything else is false.
        let plus_one_allowed = row.plus_one_allowed == "TRUE";

        // An empty plus-one name becomes None, which diesel leaves out of
        // the insert column list entirely.
        let plus_one_name = if row.plus_one_name.is_empty() {
            None
        } else {
            Some(row.plus_one_name)
        };

        NewGuest {
            id: row.invitation_id.replace('-', ""),
            guest_name: row.guest_name,
            plus_one_allowed,
            plus_one_name,
        }
    }
}
