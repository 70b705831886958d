use std::env;

use diesel::prelude::*;

use crate::error::{Error, Result};

/// Connect to the rsvp database. The target comes from `DATABASE_URL`, read
/// from the environment or a local `.env` file.
pub fn establish_connection() -> Result<MysqlConnection> {
    dotenvy::dotenv().ok();
    let database_url = env::var("DATABASE_URL").map_err(|_| Error::MissingDatabaseUrl)?;
    Ok(MysqlConnection::establish(&database_url)?)
}
