//! Postal-code management commands over the persisted cookie jar.

use taplist_core::AppConfig;

use super::session::Session;
use crate::PostalAction;

pub(crate) fn run_postal(config: AppConfig, action: &PostalAction) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    match action {
        PostalAction::Set { code } => {
            let _ = session.postal.save(code);
            session.persist_jar()?;
            println!("postal code saved for 30 days: {code}");
        }
        PostalAction::Clear => {
            let _ = session.postal.clear();
            session.persist_jar()?;
            println!("postal code cleared");
        }
        PostalAction::Show => match session.postal.postal_code() {
            Some(code) => println!("{code}"),
            None => println!("no location preference set"),
        },
    }
    Ok(())
}
