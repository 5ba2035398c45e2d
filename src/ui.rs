// UI layer: asks the operator for the two values and prints the final
// confirmation. Prompting goes through the `Prompter` trait so the same
// flow works with a real terminal (`dialoguer`) or with piped/in-memory
// input.

use crate::error::{RegistrarError, Result};
use dialoguer::Input;
use std::io::{self, BufRead, Write};

pub const NAME_PROMPT: &str = "Enter user name";
pub const EMAIL_PROMPT: &str = "Enter user email";
pub const SUCCESS_MESSAGE: &str = "User added successfully!";

/// Source of operator answers. One call per prompt, returning the line
/// as typed, without its line terminator.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive prompt backed by `dialoguer::Input`. Empty answers are
/// accepted.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}

/// Plain line reader for non-terminal input. Prompts are written to
/// `output` as `"<prompt>: "`.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LinePrompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed"));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Ask for the name, then the email. No trimming, no validation, no retry.
pub fn collect_input<P: Prompter + ?Sized>(prompter: &mut P) -> Result<(String, String)> {
    let name = prompter
        .read_line(NAME_PROMPT)
        .map_err(|source| RegistrarError::InputUnavailable { field: "name", source })?;
    let email = prompter
        .read_line(EMAIL_PROMPT)
        .map_err(|source| RegistrarError::InputUnavailable { field: "email", source })?;
    Ok((name, email))
}

/// Print the fixed confirmation line.
pub fn report_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    out.flush()
}
