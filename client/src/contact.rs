use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlFormElement};

use poimap_shared::{FormSurface, SubmitOutcome, handle_submit};

use crate::dom::{self, ContactElements};

struct ContactForm {
    form: HtmlFormElement,
    status: Element,
}

impl FormSurface for ContactForm {
    fn check_validity(&self) -> bool {
        self.form.check_validity()
    }

    fn report_validity(&self) {
        let _ = self.form.report_validity();
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn set_status(&self, text: &str, is_error: bool) {
        dom::set_status(&self.status, text, is_error);
    }
}

struct SubmitBinding {
    form: HtmlFormElement,
    _handler: Closure<dyn Fn(web_sys::Event)>,
}

thread_local! {
    static SUBMIT_BINDING: RefCell<Option<SubmitBinding>> = const { RefCell::new(None) };
}

/// Intercept submission of the demo contact form. Nothing is ever sent.
pub fn init_contact_form(elements: ContactElements) {
    SUBMIT_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.form.remove_event_listener_with_callback(
                "submit",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });

    let surface = ContactForm {
        form: elements.form.clone(),
        status: elements.status,
    };
    let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |e: web_sys::Event| {
        e.prevent_default();
        if handle_submit(&surface) == SubmitOutcome::MissingFields {
            web_sys::console::info_1(&"Contact form submitted with missing fields".into());
        }
    });

    if elements
        .form
        .add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        SUBMIT_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(SubmitBinding {
                form: elements.form,
                _handler: handler,
            });
        });
    }
}
