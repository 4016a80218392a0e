//! Terminal side of a game: the move provider behind the human seat and the
//! renderer that prints what happens at the table.
//!
//! Both share one output stream through [`Console`], so prompts and turn
//! messages interleave in the order they happen.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use maumau_engine::errors::GameError;
use maumau_engine::game::{Observer, Snapshot};
use maumau_engine::player::{MoveProvider, Selection, TurnContext};

use crate::formatters::{format_card, format_hand, format_table};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_confirmation, parse_move_input};

/// Output stream shared by everything that prints during a game.
pub type Console<'a> = Rc<RefCell<&'a mut dyn Write>>;

pub const QUIT_QUESTION: &str = "Do you really want to quit the game? [y/n]";

// Write errors are dropped here: the engine traits cannot return them, and a
// broken stdout fails the summary the play command writes afterwards.
fn say(console: &Console<'_>, line: std::fmt::Arguments<'_>) {
    let mut out = console.borrow_mut();
    let _ = out.write_fmt(line);
    let _ = out.write_all(b"\n");
}

fn ask(console: &Console<'_>, question: std::fmt::Arguments<'_>) {
    let mut out = console.borrow_mut();
    let _ = out.write_fmt(question);
    let _ = out.write_all(b" ");
    let _ = out.flush();
}

/// Reads moves for the human seat line by line.
///
/// EOF on the input counts as leaving the game.
pub struct TerminalProvider<'a> {
    console: Console<'a>,
    input: &'a mut dyn BufRead,
}

impl<'a> TerminalProvider<'a> {
    pub fn new(console: Console<'a>, input: &'a mut dyn BufRead) -> Self {
        Self { console, input }
    }

    fn confirm_quit(&mut self) -> bool {
        loop {
            ask(&self.console, format_args!("{}", QUIT_QUESTION));
            let Some(answer) = read_stdin_line(self.input) else {
                return true;
            };
            if let Some(yes) = parse_confirmation(&answer) {
                return yes;
            }
        }
    }
}

impl MoveProvider for TerminalProvider<'_> {
    fn request_move(&mut self, ctx: &TurnContext<'_>) -> Selection {
        say(
            &self.console,
            format_args!("Your hand: {}", format_hand(ctx.hand, &ctx.legal)),
        );
        if ctx.pending_sevens > 0 {
            say(
                &self.console,
                format_args!(
                    "Play a seven or draw {} cards.",
                    2 * ctx.pending_sevens as usize
                ),
            );
        }
        loop {
            ask(
                &self.console,
                format_args!(
                    "{}, play a card on {} (x to quit):",
                    ctx.player_name,
                    format_card(&ctx.top)
                ),
            );
            let Some(line) = read_stdin_line(self.input) else {
                return Selection::Abort;
            };
            match parse_move_input(&line) {
                ParseResult::Slot(slot) => return Selection::Slot(slot),
                ParseResult::Quit => {
                    if self.confirm_quit() {
                        return Selection::Abort;
                    }
                }
                ParseResult::Invalid(msg) => say(&self.console, format_args!("{}", msg)),
            }
        }
    }

    fn reject(&mut self, error: &GameError) {
        say(&self.console, format_args!("{}", error));
    }
}

/// Prints turn messages and a table line whenever the turn passes on.
pub struct TextRenderer<'a> {
    console: Console<'a>,
    names: Vec<String>,
    last_message: String,
    current: Option<usize>,
}

impl<'a> TextRenderer<'a> {
    pub fn new(console: Console<'a>, names: Vec<String>) -> Self {
        Self {
            console,
            names,
            last_message: String::new(),
            current: None,
        }
    }
}

impl Observer for TextRenderer<'_> {
    fn observe(&mut self, snapshot: &Snapshot) {
        if snapshot.last_message != self.last_message {
            say(&self.console, format_args!("{}", snapshot.last_message));
            self.last_message.clone_from(&snapshot.last_message);
        }
        if self.current != Some(snapshot.current_player) {
            self.current = Some(snapshot.current_player);
            let _ = ui::separator(&mut **self.console.borrow_mut());
            say(
                &self.console,
                format_args!("{}", format_table(snapshot, &self.names)),
            );
        }
    }
}
