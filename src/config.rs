// Runtime configuration: only the location of the user file.

use std::path::PathBuf;

pub const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarConfig {
    pub users_file: PathBuf,
}

impl RegistrarConfig {
    pub fn new(users_file: impl Into<PathBuf>) -> Self {
        RegistrarConfig { users_file: users_file.into() }
    }
}

/// `users.json` in the working directory.
impl Default for RegistrarConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_FILE)
    }
}
