//! Line-oriented terminal I/O over any reader and writer.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

use zeroize::Zeroizing;

use super::CliError;

/// Prompts and output over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,

    // Read secrets from the terminal with echo disabled instead of from `input`.
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// A console that reads every answer, secrets included, from `input`.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Read secrets from the controlling terminal without echoing them.
    ///
    /// Only meaningful when `input` is that terminal.
    #[must_use]
    pub fn hiding_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    /// Consume the console, returning its output.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Raw access to the output, for multi-line renderings such as tables.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl Display) -> Result<(), CliError> {
        writeln!(self.output, "{line}")?;

        Ok(())
    }

    /// Show `label`, then read one trimmed line of input.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::EndOfInput`] when the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }

    /// Use `value` when given, otherwise prompt for it.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::EndOfInput`] when a prompt finds no input.
    pub fn value_or_prompt(
        &mut self,
        value: Option<String>,
        label: &str,
    ) -> Result<String, CliError> {
        match value {
            Some(value) => Ok(value),
            None => self.prompt(label),
        }
    }

    /// Prompt for a value and parse it, reporting `invalid` when it does not parse.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Input`] when the answer does not parse.
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        label: &str,
        invalid: &'static str,
    ) -> Result<T, CliError> {
        self.prompt(label)?
            .parse()
            .map_err(|_err| CliError::Input(invalid))
    }

    /// Use `value` when given, otherwise prompt and parse.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Input`] when a prompted answer does not parse.
    pub fn parsed_or_prompt<T: FromStr>(
        &mut self,
        value: Option<T>,
        label: &str,
        invalid: &'static str,
    ) -> Result<T, CliError> {
        match value {
            Some(value) => Ok(value),
            None => self.prompt_parsed(label, invalid),
        }
    }

    /// Show `label`, then read a secret such as a password.
    ///
    /// Only the line ending is removed; surrounding spaces are part of the
    /// secret.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::EndOfInput`] when the input is exhausted.
    pub fn secret(&mut self, label: &str) -> Result<Zeroizing<String>, CliError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        if self.hide_secrets {
            return match rpassword::read_password() {
                Ok(secret) => Ok(Zeroizing::new(secret)),
                Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                    Err(CliError::EndOfInput)
                }
                Err(error) => Err(error.into()),
            };
        }

        let mut line = Zeroizing::new(String::new());

        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }

        let content = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(content);

        Ok(line)
    }

    /// Prompt for a new password twice until both entries match.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::EndOfInput`] when the input is exhausted.
    pub fn new_password(&mut self) -> Result<Zeroizing<String>, CliError> {
        loop {
            let password = self.secret("Password")?;
            let confirmation = self.secret("Repeat for confirmation")?;

            if password.as_str() == confirmation.as_str() {
                return Ok(password);
            }

            self.say("Error: the two entered values do not match.")?;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use testresult::TestResult;

    use super::*;

    pub(crate) type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    pub(crate) fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub(crate) fn output(console: TestConsole) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(console.into_output())
    }

    #[test]
    fn prompt_trims_answers_and_echoes_labels() -> TestResult {
        let mut console = console("  Alice  \n");

        assert_eq!(console.prompt("Name")?, "Alice");
        assert_eq!(output(console)?, "Name: ");

        Ok(())
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut console = console("");

        let result = console.prompt("Name");

        assert!(
            matches!(result, Err(CliError::EndOfInput)),
            "expected EndOfInput, got {result:?}"
        );
    }

    #[test]
    fn parsed_prompts_report_the_given_message() {
        let mut console = console("abc\n");

        let result = console.prompt_parsed::<i64>("Room ID", "Invalid room ID.");

        assert!(
            matches!(result, Err(CliError::Input("Invalid room ID."))),
            "expected input error, got {result:?}"
        );
    }

    #[test]
    fn secrets_keep_surrounding_spaces() -> TestResult {
        let mut console = console(" secret1 \r\nnext\n");

        assert_eq!(console.secret("Password")?.as_str(), " secret1 ");
        assert_eq!(console.prompt("Name")?, "next");
        assert_eq!(output(console)?, "Password: Name: ");

        Ok(())
    }

    #[test]
    fn secret_reports_end_of_input() {
        let mut console = console("");

        let result = console.secret("Password");

        assert!(
            matches!(result, Err(CliError::EndOfInput)),
            "expected EndOfInput, got {result:?}"
        );
    }

    #[test]
    fn provided_values_skip_the_prompt() -> TestResult {
        let mut console = console("");

        assert_eq!(console.value_or_prompt(Some("x".to_string()), "Name")?, "x");
        assert_eq!(console.parsed_or_prompt(Some(3_i64), "ID", "bad")?, 3);
        assert_eq!(output(console)?, "");

        Ok(())
    }

    #[test]
    fn new_password_repeats_until_confirmed() -> TestResult {
        let mut console = console("secret1\nsecret2\nsecret1\nsecret1\n");

        assert_eq!(console.new_password()?.as_str(), "secret1");
        assert!(
            output(console)?.contains("the two entered values do not match"),
            "mismatch reported"
        );

        Ok(())
    }
}
