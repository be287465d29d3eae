//! Line commands standing in for slider moves and link clicks.

use client_core::UiEvent;
use shared::domain::Channel;

pub const HELP: &str = "commands: red|green|blue <0-255>, save, delete <id>, cancel, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ui(UiEvent),
    Help,
    Quit,
}

/// Slider values are passed through as text; range checks happen when the
/// event becomes an intent.
pub fn parse_line(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();
    let arg = words.next();

    if let Some(channel) = Channel::parse(&head) {
        return arg.map(|value| Command::Ui(UiEvent::slider(channel, value)));
    }

    match head.as_str() {
        "save" => Some(Command::Ui(UiEvent::save())),
        "delete" | "rm" => arg.map(|id| Command::Ui(UiEvent::delete(id))),
        "cancel" | "reset" => Some(Command::Ui(UiEvent::cancel())),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
