//! CLI commands

pub mod init;
pub mod list;
pub mod show;
pub mod tags;
pub mod theme;

use crate::content::LoadError;
use crate::templates;

/// Show a load failure to the reader and turn it into the command's error
///
/// The reader sees the symptom only; the cause goes to the log.
pub(crate) fn report(err: LoadError, html: bool) -> anyhow::Error {
    if html {
        println!("{}", templates::error_panel(err.user_message()));
    } else {
        eprintln!("⚠️ {}", err.user_message());
    }
    anyhow::Error::new(err)
}
