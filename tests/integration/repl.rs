//! The REPL loop over scripted input.

use std::collections::VecDeque;

use taskgen_foundation::{Result, Tier};
use taskgen_runtime::{LineEditor, ReadResult, Reply, Repl, Session};

use crate::stdlib_generator;

struct Script {
    lines: VecDeque<String>,
    history: Vec<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
            history: Vec::new(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.pop_front().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }
}

fn repl(lines: &[&str]) -> Repl<Script> {
    let session = Session::new(stdlib_generator(8, Tier::Expert));
    Repl::with_editor(Script::new(lines), session).without_banner()
}

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(text) => text,
        Reply::Quit => panic!("unexpected quit"),
    }
}

#[test]
fn scripted_session_runs_to_eof() {
    let mut repl = repl(&["1", "m", "4", "seed 3", "2", ""]);
    repl.run().unwrap();
    assert!(repl.session().show_metadata());
    assert_eq!(repl.session().generator().config().seed, 3);
}

#[test]
fn quit_stops_before_remaining_lines() {
    let mut repl = repl(&["q", "m"]);
    repl.run().unwrap();
    assert!(!repl.session().show_metadata());
}

#[test]
fn tier_commands_cap_the_grammar() {
    let mut repl = repl(&[]);
    for _ in 0..20 {
        let line = text(repl.eval("1").unwrap());
        assert!(line.starts_with("[Simple errands, easy]"), "{line}");
    }
}

#[test]
fn metadata_lines_follow_the_task() {
    let mut repl = repl(&[]);
    assert_eq!(text(repl.eval("m").unwrap()), "metadata on");
    let mut saw_metadata = false;
    for _ in 0..40 {
        let output = text(repl.eval("4").unwrap());
        let mut lines = output.lines();
        assert!(lines.next().is_some_and(|l| l.starts_with('[')));
        for line in lines {
            assert!(line.starts_with("    - "), "{output}");
            saw_metadata = true;
        }
    }
    assert!(saw_metadata);
}

#[test]
fn seed_command_replays() {
    let mut repl = repl(&[]);
    text(repl.eval("seed 21").unwrap());
    let first = text(repl.eval("3").unwrap());
    text(repl.eval("seed 21").unwrap());
    assert_eq!(text(repl.eval("3").unwrap()), first);
}

#[test]
fn bad_input_gets_a_hint() {
    let mut repl = repl(&[]);
    for line in ["7", "dance", "seed x", "m now"] {
        let reply = text(repl.eval(line).unwrap());
        assert!(reply.ends_with("(h for help)"), "{reply}");
    }
    assert!(matches!(repl.eval("exit").unwrap(), Reply::Quit));
}
