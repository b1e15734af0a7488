//! Session state shared by the REPL and batch mode.

use std::fmt::Write as _;
use std::str::FromStr;

use taskgen_engine::{Task, TaskGenerator};
use taskgen_foundation::{Result, Tier};

/// A command typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `1`-`4`: generate a task at or below a tier.
    Generate(Tier),
    /// `m`: toggle metadata display.
    ToggleMetadata,
    /// `seed N`: restart the random source.
    Seed(u64),
    /// `h`: list commands.
    Help,
    /// `q`: leave the session.
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments: {s}"));
        }

        match (head.as_str(), arg) {
            ("m" | "meta", None) => Ok(Self::ToggleMetadata),
            ("h" | "help" | "?", None) => Ok(Self::Help),
            ("q" | "quit" | "exit", None) => Ok(Self::Quit),
            ("seed", Some(n)) => n
                .parse()
                .map(Self::Seed)
                .map_err(|_| format!("invalid seed: {n}")),
            ("seed", None) => Err("seed requires a number".to_string()),
            (digit, None) => digit
                .parse::<usize>()
                .ok()
                .and_then(Tier::from_index)
                .map(Self::Generate)
                .ok_or_else(|| format!("unknown command: {s}")),
            _ => Err(format!("unknown command: {s}")),
        }
    }
}

/// A generator plus display settings.
pub struct Session {
    generator: TaskGenerator,
    show_metadata: bool,
}

impl Session {
    /// Creates a session around `generator`.
    #[must_use]
    pub fn new(generator: TaskGenerator) -> Self {
        Self {
            generator,
            show_metadata: false,
        }
    }

    /// Sets whether tasks are printed with their metadata.
    #[must_use]
    pub fn with_metadata(mut self, show: bool) -> Self {
        self.show_metadata = show;
        self
    }

    /// Returns the generator.
    #[must_use]
    pub fn generator(&self) -> &TaskGenerator {
        &self.generator
    }

    /// Returns true if metadata is printed.
    #[must_use]
    pub fn show_metadata(&self) -> bool {
        self.show_metadata
    }

    /// Flips metadata display and returns the new setting.
    pub fn toggle_metadata(&mut self) -> bool {
        self.show_metadata = !self.show_metadata;
        self.show_metadata
    }

    /// Restarts the random source.
    pub fn reseed(&mut self, seed: u64) {
        self.generator.reseed(seed);
    }

    /// Generates a task at or below `tier` and renders it.
    ///
    /// # Errors
    /// Returns the generator's error when no task could be made.
    pub fn generate(&mut self, tier: Tier) -> Result<String> {
        let task = self.generator.generate_at(tier)?;
        Ok(render(&task, self.show_metadata))
    }
}

/// Renders a task as one line, plus one indented line per metadata entry
/// when `show_metadata` is set.
#[must_use]
pub fn render(task: &Task, show_metadata: bool) -> String {
    let mut out = format!("[{}, {}] {task}", task.grammar_name(), task.tier());
    if show_metadata {
        for entry in task.metadata() {
            let _ = write!(out, "\n    - {entry}");
        }
    }
    if !task.unresolved().is_empty() {
        let _ = write!(out, "\n    ! unresolved: {}", task.unresolved().join(", "));
    }
    out
}
