//! Confirmation before destructive actions.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item? This action cannot be undone.";

/// Whether the intercepted action may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Cancel,
}

/// A synchronous yes/no prompt.
pub trait Prompt {
    type Error: std::fmt::Debug;

    fn confirm(&self, message: &str) -> Result<bool, Self::Error>;
}

/// Ask before a destructive action. A prompt that fails counts as declined.
pub fn confirm_destructive<P: Prompt>(prompt: &P) -> Decision {
    match prompt.confirm(DELETE_CONFIRM_MESSAGE) {
        Ok(true) => Decision::Proceed,
        Ok(false) => Decision::Cancel,
        Err(err) => {
            log::warn!("confirmation prompt failed, cancelling action: {err:?}");
            Decision::Cancel
        }
    }
}
