//! The interactive loop.

use std::io::{self, Write};

use taskgen_foundation::{Error, Result, Tier};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::{Command, Session};

/// What the REPL does after one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep going.
    Text(String),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "task> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Returns `Ok(false)` once the loop should stop.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };
        if line.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&line);

        match self.eval(&line) {
            Ok(Reply::Text(text)) => println!("{text}"),
            Ok(Reply::Quit) => return Ok(false),
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Runs one command line.
    ///
    /// Unknown commands produce a hint rather than an error.
    ///
    /// # Errors
    ///
    /// Returns the generator's error when a task could not be made.
    pub fn eval(&mut self, line: &str) -> Result<Reply> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => return Ok(Reply::Text(format!("{message} (h for help)"))),
        };

        let text = match command {
            Command::Generate(tier) => self.session.generate(tier)?,
            Command::ToggleMetadata => {
                let state = if self.session.toggle_metadata() { "on" } else { "off" };
                format!("metadata {state}")
            }
            Command::Seed(seed) => {
                self.session.reseed(seed);
                format!("seed {seed}")
            }
            Command::Help => help(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner(&self) {
        let generator = self.session.generator();
        println!(
            "\x1b[1;36mtaskgen\x1b[0m v{} - {} grammars, seed {}",
            env!("CARGO_PKG_VERSION"),
            generator.grammars().len(),
            generator.config().seed
        );
        println!("{}\n", help());
        let _ = io::stdout().flush();
    }
}

fn help() -> String {
    let tiers: Vec<String> = Tier::ALL
        .iter()
        .enumerate()
        .map(|(i, tier)| format!("{}={tier}", i + 1))
        .collect();
    format!(
        "commands: 1-4 generate ({}), m toggle metadata, seed N reseed, q quit",
        tiers.join(" ")
    )
}
