//! Submit-time gate for forms using built-in constraint validation.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// A form that can report validity and take the validated marker.
pub trait ValidatedForm {
    fn check_validity(&self) -> bool;
    fn mark_validated(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Let the browser submit the form.
    Proceed,
    /// Prevent submission and stop the event from propagating.
    Block,
}

/// Run the validity check for one submission attempt. The validated marker
/// is applied on every attempt so field feedback becomes visible.
pub fn gate_submission<F: ValidatedForm>(form: &mut F) -> Submission {
    let valid = form.check_validity();
    form.mark_validated();
    if valid { Submission::Proceed } else { Submission::Block }
}
