//! Terminal screen handling: clear-and-banner redraws and styled notices.
//!
//! Clearing and color are enabled only when stdout is a terminal, so piped
//! output stays plain text.

use crate::utils::input::EnvConfigReader;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io;

pub struct Screen {
    clear: bool,
    colors: bool,
}

impl Screen {
    pub fn stdout() -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            clear: is_tty,
            colors: is_tty && !EnvConfigReader::read_no_color(),
        }
    }

    /// Clear the terminal and reprint the banner, giving the illusion of a
    /// persistent UI between redraws.
    pub fn refresh(&self) {
        if self.clear {
            let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
        }
        println!();
        println!("\t┌──────────────────────────────┐");
        println!("\t│ Aviation Statistics Database │");
        println!("\t│ Interactive report console   │");
        println!("\t└──────────────────────────────┘");
        println!();
    }

    pub fn notice(&self, message: &str) {
        self.styled(message, Color::Green);
    }

    pub fn warn(&self, message: &str) {
        self.styled(message, Color::Red);
    }

    fn styled(&self, message: &str, color: Color) {
        if self.colors {
            let _ = execute!(
                io::stdout(),
                SetForegroundColor(color),
                Print(format!("\t{}\n", message)),
                ResetColor
            );
        } else {
            println!("\t{}", message);
        }
    }
}
