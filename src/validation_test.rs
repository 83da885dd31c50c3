use super::*;

#[derive(Debug, Default)]
struct FakeForm {
    valid: bool,
    validated: bool,
    checks: usize,
}

impl ValidatedForm for FakeForm {
    fn check_validity(&self) -> bool {
        self.valid
    }

    fn mark_validated(&mut self) {
        self.validated = true;
    }
}

impl FakeForm {
    fn gate(&mut self) -> Submission {
        self.checks += 1;
        gate_submission(self)
    }
}

#[test]
fn invalid_form_is_blocked_and_marked() {
    let mut form = FakeForm { valid: false, ..Default::default() };
    assert_eq!(form.gate(), Submission::Block);
    assert!(form.validated);
}

#[test]
fn valid_form_proceeds() {
    let mut form = FakeForm { valid: true, ..Default::default() };
    assert_eq!(form.gate(), Submission::Proceed);
    assert!(form.validated);
}

#[test]
fn resubmission_rechecks_validity() {
    let mut form = FakeForm { valid: false, ..Default::default() };
    assert_eq!(form.gate(), Submission::Block);
    form.valid = true;
    assert_eq!(form.gate(), Submission::Proceed);
    assert_eq!(form.checks, 2);
}
