//! Remaining-time countdown shown inside the session warning dialog.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

/// Render whole seconds as `"<N> minute(s) <M> second(s)"`.
///
/// The plural `s` is dropped exactly when the value is 1.
#[must_use]
pub fn format_remaining(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes} {} {seconds} {}", plural(minutes, "minute"), plural(seconds, "second"))
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 { unit.to_owned() } else { format!("{unit}s") }
}

/// One step of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTick {
    /// Formatted remaining time after this step.
    pub text: String,
    /// The countdown reached zero on this step.
    pub finished: bool,
}

/// Seconds-remaining counter decremented once per tick, stopping at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(start_secs: u32) -> Self {
        Self { remaining: start_secs }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Formatted text for the current value.
    #[must_use]
    pub fn text(&self) -> String {
        format_remaining(self.remaining)
    }

    /// Advance by one second. Returns `None` once already at zero.
    pub fn tick(&mut self) -> Option<CountdownTick> {
        if self.is_finished() {
            return None;
        }
        self.remaining -= 1;
        Some(CountdownTick { text: self.text(), finished: self.is_finished() })
    }
}
