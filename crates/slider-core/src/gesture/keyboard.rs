/// Navigation requested by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Prev,
    First,
    Last,
    /// Zero-based slide index from a digit key.
    Index(usize),
}

/// Map a DOM `KeyboardEvent.key` value to a command.
#[inline]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowRight" | " " | "Spacebar" => Some(KeyCommand::Next),
        "ArrowLeft" => Some(KeyCommand::Prev),
        "Home" => Some(KeyCommand::First),
        "End" => Some(KeyCommand::Last),
        _ => digit_index(key).map(KeyCommand::Index),
    }
}

#[inline]
fn digit_index(key: &str) -> Option<usize> {
    match key.as_bytes() {
        [d @ b'1'..=b'9'] => Some((d - b'1') as usize),
        _ => None,
    }
}
