//! Message routing: wire text in, tab operation out.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use commands::{NavCommand, decode_message};

/// A tab-control operation resolved from a wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOp {
    /// Close the tab.
    Close,
    /// Reload the tab.
    Reload,
    /// Navigate the tab's history backward.
    Back,
    /// Navigate the tab's history forward.
    Forward,
}

/// The operation a command maps to.
#[must_use]
pub fn op_for(action: NavCommand) -> TabOp {
    match action {
        NavCommand::CloseTab => TabOp::Close,
        NavCommand::ReloadTab => TabOp::Reload,
        NavCommand::GoBack => TabOp::Back,
        NavCommand::GoForward => TabOp::Forward,
    }
}

/// Decode one raw wire message into its tab operation.
///
/// Malformed JSON and unrecognized action names yield `None`: such
/// messages are ignored, not surfaced as errors.
#[must_use]
pub fn decode_op(raw: &str) -> Option<TabOp> {
    match decode_message(raw) {
        Ok(message) => Some(op_for(message.action)),
        Err(err) => {
            log::debug!("ignoring undecodable message: {err}");
            None
        }
    }
}
