// Entrypoint for the registrar.
// - Keeps `main` small: build the config, pick a prompter, run once.
// - Returns `anyhow::Result` so any failure prints its cause and exits 1.

use std::io::{self, IsTerminal};
use user_registrar::ui::{report_success, LinePrompter, TerminalPrompter};
use user_registrar::{Registrar, RegistrarConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let registrar = Registrar::new(RegistrarConfig::default());

    if io::stdin().is_terminal() {
        registrar.run(&mut TerminalPrompter)?;
    } else {
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        registrar.run(&mut prompter)?;
    }

    report_success(&mut io::stdout().lock())?;
    Ok(())
}
