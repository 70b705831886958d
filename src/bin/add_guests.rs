use anyhow::{Context, Result};
use log::info;
use rsvp_admin::{db, guestlist};

fn main() -> Result<()> {
    env_logger::init();

    let mut conn = db::establish_connection().context("could not connect to the rsvp database")?;
    let imported = guestlist::import_file(&mut conn, guestlist::GUESTLIST_FILE)
        .with_context(|| format!("import from {} failed", guestlist::GUESTLIST_FILE))?;

    info!("imported {imported} guests");
    Ok(())
}
