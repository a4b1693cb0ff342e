pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

/// Renders a message as one report line, newline included.
pub fn line(msg: Message) -> String {
    format!("{}\n", msg)
}
