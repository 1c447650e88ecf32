pub const MSG_REQUIRED_FIELDS: &str = "Compila tutti i campi richiesti.";
pub const MSG_READY_DEMO: &str = "Messaggio pronto per invio (demo).";

/// The contact form as seen by the submit handler.
pub trait FormSurface {
    /// Native constraint validation (`required`, `type=email`, ...).
    fn check_validity(&self) -> bool;
    /// Shows the browser's validation bubbles.
    fn report_validity(&self);
    fn reset(&self);
    fn set_status(&self, text: &str, is_error: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    MissingFields,
    ReadyDemo,
}

impl SubmitOutcome {
    pub const fn message(self) -> &'static str {
        match self {
            SubmitOutcome::MissingFields => MSG_REQUIRED_FIELDS,
            SubmitOutcome::ReadyDemo => MSG_READY_DEMO,
        }
    }

    pub const fn is_error(self) -> bool {
        matches!(self, SubmitOutcome::MissingFields)
    }
}

/// Validate-and-reset flow of the demo contact form. Nothing is sent anywhere.
pub fn handle_submit(form: &impl FormSurface) -> SubmitOutcome {
    if !form.check_validity() {
        let outcome = SubmitOutcome::MissingFields;
        form.set_status(outcome.message(), outcome.is_error());
        form.report_validity();
        return outcome;
    }
    let outcome = SubmitOutcome::ReadyDemo;
    form.set_status(outcome.message(), outcome.is_error());
    form.reset();
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::{FormSurface, MSG_READY_DEMO, MSG_REQUIRED_FIELDS, SubmitOutcome, handle_submit};

    struct FakeForm {
        fields: RefCell<Vec<(&'static str, String)>>,
        reported: Cell<bool>,
        status: RefCell<(String, bool)>,
    }

    impl FakeForm {
        fn new(name: &str, email: &str, message: &str) -> Self {
            Self {
                fields: RefCell::new(vec![
                    ("name", name.into()),
                    ("email", email.into()),
                    ("message", message.into()),
                ]),
                reported: Cell::new(false),
                status: RefCell::new((String::new(), false)),
            }
        }

        fn values(&self) -> Vec<String> {
            self.fields.borrow().iter().map(|(_, v)| v.clone()).collect()
        }
    }

    impl FormSurface for FakeForm {
        fn check_validity(&self) -> bool {
            self.fields.borrow().iter().all(|(_, v)| !v.trim().is_empty())
        }

        fn report_validity(&self) {
            self.reported.set(true);
        }

        fn reset(&self) {
            for (_, value) in self.fields.borrow_mut().iter_mut() {
                value.clear();
            }
        }

        fn set_status(&self, text: &str, is_error: bool) {
            *self.status.borrow_mut() = (text.to_string(), is_error);
        }
    }

    #[test]
    fn missing_fields_keep_input_and_show_error() {
        let form = FakeForm::new("Ada", "", "Ciao");
        assert_eq!(handle_submit(&form), SubmitOutcome::MissingFields);
        assert_eq!(*form.status.borrow(), (MSG_REQUIRED_FIELDS.to_string(), true));
        assert!(form.reported.get());
        assert_eq!(form.values(), vec!["Ada", "", "Ciao"]);
    }

    #[test]
    fn valid_submit_clears_form_and_error() {
        let form = FakeForm::new("Ada", "ada@example.org", "Ciao");
        form.set_status("stale", true);
        assert_eq!(handle_submit(&form), SubmitOutcome::ReadyDemo);
        assert_eq!(*form.status.borrow(), (MSG_READY_DEMO.to_string(), false));
        assert!(!form.reported.get());
        assert!(form.values().iter().all(String::is_empty));
    }

    #[test]
    fn resubmitting_cleared_form_fails_validation() {
        let form = FakeForm::new("Ada", "ada@example.org", "Ciao");
        handle_submit(&form);
        assert_eq!(handle_submit(&form), SubmitOutcome::MissingFields);
    }
}
