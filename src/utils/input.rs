//! Operator input collection.
//!
//! Every prompt loops until the operator supplies a valid value; invalid
//! input re-displays the prompt with a rejection message. The loops have no
//! retry limit, but a closed input stream surfaces as
//! [`InputError::StreamClosed`] so a detached terminal can never spin them.

use crate::error::InputError;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Outcome of the main-menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Report(usize),
    Help,
    Quit,
}

/// Line-oriented prompt/validate loop over an arbitrary reader and writer.
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
}

impl InputCollector<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_trimmed(&mut self, label: &str) -> Result<String, InputError> {
        if label.is_empty() {
            write!(self.writer, "\t>>> ")?;
        } else {
            write!(self.writer, "\t{} >>> ", label)?;
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::StreamClosed);
        }
        Ok(line.trim().to_string())
    }

    fn reject(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.writer, "\t{}", message)?;
        Ok(())
    }

    /// Non-empty free-form text, returned trimmed with case preserved.
    pub fn prompt_string(&mut self, label: &str) -> Result<String, InputError> {
        loop {
            let input = self.read_trimmed(label)?;
            if !input.is_empty() {
                return Ok(input);
            }
            self.reject("Please enter a valid string!")?;
        }
    }

    /// A base-10 integer.
    pub fn prompt_int(&mut self, label: &str) -> Result<i64, InputError> {
        loop {
            let input = self.read_trimmed(label)?;
            match input.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.reject("Please enter a valid int!")?,
            }
        }
    }

    /// A base-10 integer within inclusive bounds; out-of-range values get a
    /// distinct rejection message.
    pub fn prompt_int_in_range(
        &mut self,
        label: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, InputError> {
        loop {
            let input = self.read_trimmed(label)?;
            match input.parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(value),
                Ok(_) => {
                    self.reject(&format!("Please enter an int in range {} to {}.", min, max))?
                }
                Err(_) => self.reject("Please enter a valid int!")?,
            }
        }
    }

    /// Case-insensitive match against a small fixed token set. Returns the
    /// matched token in lowercase.
    pub fn prompt_token(&mut self, label: &str, tokens: &[&str]) -> Result<String, InputError> {
        loop {
            let input = self.read_trimmed(label)?.to_lowercase();
            if tokens.contains(&input.as_str()) {
                return Ok(input);
            }
            self.reject("Please enter a valid input!")?;
        }
    }

    /// Main-menu selection: `q` quits, `h`/`help` opens help, an integer
    /// within `1..=max` selects a report; anything else re-prompts.
    pub fn prompt_menu_choice(
        &mut self,
        label: &str,
        max: usize,
    ) -> Result<MenuChoice, InputError> {
        loop {
            let input = self.read_trimmed(label)?.to_lowercase();
            if input == "q" {
                return Ok(MenuChoice::Quit);
            }
            if input == "h" || input == "help" {
                return Ok(MenuChoice::Help);
            }
            if let Ok(selection) = input.parse::<usize>() {
                if (1..=max).contains(&selection) {
                    return Ok(MenuChoice::Report(selection));
                }
            }
            self.reject("Please enter a valid input!")?;
        }
    }

    /// Display a prompt and wait for any line (used to dismiss the help
    /// screen and error notices).
    pub fn wait_for_line(&mut self, prompt: &str) -> Result<(), InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::StreamClosed);
        }
        Ok(())
    }
}

/// Environment variable configuration reader
pub struct EnvConfigReader;

impl EnvConfigReader {
    /// Read NO_COLOR environment variable
    pub fn read_no_color() -> bool {
        std::env::var("NO_COLOR").is_ok()
    }

    /// Read AVSTAT_PAGE_SIZE environment variable
    pub fn read_page_size() -> Option<usize> {
        std::env::var("AVSTAT_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> InputCollector<Cursor<Vec<u8>>, Vec<u8>> {
        InputCollector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_string_rejects_empty_then_accepts() {
        let mut input = collector("\n   \nCYWG\n");
        let value = input.prompt_string("Enter airport ICAO code").unwrap();
        assert_eq!(value, "CYWG");
    }

    #[test]
    fn test_prompt_string_preserves_case() {
        let mut input = collector("  Air Canada \n");
        assert_eq!(input.prompt_string("Enter airline name").unwrap(), "Air Canada");
    }

    #[test]
    fn test_prompt_int_rejects_garbage() {
        let mut input = collector("abc\n12x\n42\n");
        assert_eq!(input.prompt_int("Enter pilot SIN").unwrap(), 42);
    }

    #[test]
    fn test_prompt_int_in_range_edges() {
        // min - 1 and max + 1 are rejected, min and max accepted
        let mut input = collector("0\n1\n");
        assert_eq!(input.prompt_int_in_range("Select", 1, 14).unwrap(), 1);

        let mut input = collector("15\n14\n");
        assert_eq!(input.prompt_int_in_range("Select", 1, 14).unwrap(), 14);
    }

    #[test]
    fn test_prompt_int_in_range_distinct_message() {
        let mut input = collector("99\n3\n");
        input.prompt_int_in_range("Select", 1, 4).unwrap();
        let output = String::from_utf8(input.writer).unwrap();
        assert!(output.contains("range 1 to 4"));
    }

    #[test]
    fn test_prompt_token_is_case_insensitive() {
        let mut input = collector("X\nN\n");
        let token = input.prompt_token("", &["b", "n", "m", "q"]).unwrap();
        assert_eq!(token, "n");
    }

    #[test]
    fn test_prompt_menu_choice() {
        let mut input = collector("99\nfoo\n17\n");
        let choice = input.prompt_menu_choice("Enter selection", 17).unwrap();
        assert_eq!(choice, MenuChoice::Report(17));

        let mut input = collector("HELP\n");
        assert_eq!(
            input.prompt_menu_choice("Enter selection", 17).unwrap(),
            MenuChoice::Help
        );

        let mut input = collector("Q\n");
        assert_eq!(
            input.prompt_menu_choice("Enter selection", 17).unwrap(),
            MenuChoice::Quit
        );
    }

    #[test]
    fn test_eof_surfaces_stream_closed() {
        let mut input = collector("");
        let err = input.prompt_string("Enter anything").unwrap_err();
        assert!(matches!(err, InputError::StreamClosed));
    }

    #[test]
    fn test_read_page_size() {
        unsafe {
            std::env::set_var("AVSTAT_PAGE_SIZE", "invalid");
        }
        assert!(EnvConfigReader::read_page_size().is_none());
        unsafe {
            std::env::set_var("AVSTAT_PAGE_SIZE", "25");
        }
        assert_eq!(EnvConfigReader::read_page_size(), Some(25));
        unsafe {
            std::env::remove_var("AVSTAT_PAGE_SIZE");
        }
    }
}
