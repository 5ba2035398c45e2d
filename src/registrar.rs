// The single read-modify-write run: ask, load, append, persist.

use crate::config::RegistrarConfig;
use crate::error::Result;
use crate::model::UserRecord;
use crate::store::{load_collection, persist_collection};
use crate::ui::{collect_input, Prompter};

pub struct Registrar {
    config: RegistrarConfig,
}

impl Registrar {
    pub fn new(config: RegistrarConfig) -> Self {
        Registrar { config }
    }

    /// The configuration this registrar reads and writes through.
    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Run one registration and return the record that was stored.
    ///
    /// Input is collected before the file is touched, and the first failing
    /// step aborts the run; the user file is only replaced once the new
    /// contents have been fully written.
    pub fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<UserRecord> {
        let (name, email) = collect_input(prompter)?;
        let record = UserRecord::new(name, email);

        let path = self.config.users_file.as_path();
        let users = load_collection(path)?.append(record.clone());
        persist_collection(path, &users)?;

        log::info!("registered user #{} in {}", users.len(), path.display());
        Ok(record)
    }
}
