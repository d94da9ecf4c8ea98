use std::io::{BufRead, Write};

use crate::{game::{Choice, Mode, story::Story}, interface::{arguments::Arguments, shell::InteractiveShell}, util::errors::Result};


const CHOICE_PROMPT: &str = "Enter your choice: ";


pub struct Interface<R: BufRead, W: Write> {
    shell: InteractiveShell<R, W>,
}

impl<R: BufRead, W: Write> Interface<R, W> {
    pub fn new(reader: R, writer: W) -> Interface<R, W> {
        return Interface {
            shell: InteractiveShell::new(reader, writer),
        }
    }

    pub fn init(&mut self, args: &Arguments) -> Result<()> {
        if !args.skip_story {
            self.init_story(&Story::load(&args.story_path))?;
        }
        if !args.skip_menu {
            self.init_options()?;
        }
        return Ok(());
    }

    pub fn init_story(&mut self, story: &Story) -> Result<()> {
        for line in story.lines() {
            self.shell.output_bytes(line)?;
        }
        return Ok(());
    }

    pub fn init_options(&mut self) -> Result<()> {
        self.shell.output(&format!("Hello, you have {} options", Mode::all().len()))?;
        for mode in Mode::all() {
            self.shell.output(&format!(" {} - {}", mode.key(), mode.value()))?;
        }
        loop {
            self.shell.prompt(CHOICE_PROMPT)?;
            let selection = match self.shell.read_choice()? {
                Some(s) => s,
                None => {
                    tracing::debug!("Input closed, leaving the options menu");
                    break;
                }
            };
            let mut echo = b"You selected: ".to_vec();
            echo.extend_from_slice(&selection);
            self.shell.output_bytes(&echo)?;
            let choice = Choice::parse(&selection);
            tracing::debug!(?choice, selection = %String::from_utf8_lossy(&selection), "Dispatching selection");
            match choice {
                Choice::Mode(m) => self.shell.output(&m.selected_message())?,
                Choice::Exit => {
                    self.shell.output("Exiting game. Thanks for playing!")?;
                    break;
                },
                Choice::Invalid => self.shell.output("Invalid option. Please try again.")?,
            };
        }
        return Ok(());
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        return self.shell.into_writer();
    }
}
