// Library root
// -----------
// The binary (`main.rs`) wires these modules together to add one user to
// the JSON user file.
//
// Module responsibilities:
// - `config`: where the user file lives.
// - `model`: `UserRecord` / `UserCollection`, the JSON shapes on disk.
// - `store`: loading the file and replacing it atomically.
// - `ui`: prompting for name and email, printing the confirmation.
// - `registrar`: runs the steps in order and stops at the first failure.
// - `error`: the error type every step returns.
pub mod config;
pub mod error;
pub mod model;
pub mod registrar;
pub mod store;
pub mod ui;

pub use config::RegistrarConfig;
pub use error::{RegistrarError, Result};
pub use model::{UserCollection, UserRecord};
pub use registrar::Registrar;
