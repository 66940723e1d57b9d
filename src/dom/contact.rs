//! Contact form binding.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlButtonElement, HtmlFormElement};

use super::fetch::FetchTransport;
use super::{
    by_id, by_id_as, child, listen, DomError, CONTACT_FORM_ID, FORM_STATUS_ID, FORM_SUBMIT_ID,
};
use crate::config::SiteConfig;
use crate::contact::{
    classify, run_submission, ContactForm, FormFields, FormView, SubmitRequest, TransportError,
};

struct Widgets {
    form: HtmlFormElement,
    status: Element,
    button: HtmlButtonElement,
    label: Element,
    icon: Element,
}

impl Widgets {
    fn render(&self, view: &FormView) {
        self.status.set_text_content(Some(&view.status.text));
        self.status.set_class_name(view.status.class);
        self.button.set_disabled(view.button.disabled);
        self.label.set_text_content(Some(&view.button.label));
        self.icon.set_class_name(view.button.icon_class);
    }

    /// Entries in document order. Files are recorded by name only.
    fn fields(&self) -> Result<FormFields, TransportError> {
        let data = FormData::new_with_form(&self.form)
            .map_err(|e| TransportError::FormData(format!("{:?}", e)))?;
        let entries = js_sys::try_iter(&data)
            .map_err(|e| TransportError::FormData(format!("{:?}", e)))?
            .ok_or_else(|| TransportError::FormData("FormData is not iterable".into()))?;

        let mut fields = FormFields::new();
        for entry in entries {
            let entry = entry.map_err(|e| TransportError::FormData(format!("{:?}", e)))?;
            let pair: js_sys::Array = entry.unchecked_into();
            let Some(name) = pair.get(0).as_string() else {
                continue;
            };
            match pair.get(1).as_string() {
                Some(value) => fields.push_text(name, value),
                None => fields.push_file(name),
            }
        }
        Ok(fields)
    }

    fn request(&self) -> Result<SubmitRequest, TransportError> {
        SubmitRequest::new(&self.form.method(), &self.form.action(), self.fields()?)
    }
}

pub fn mount(doc: &Document, config: &SiteConfig) -> Result<(), DomError> {
    // The contact section is optional
    if doc.get_element_by_id(CONTACT_FORM_ID).is_none() {
        tracing::debug!("No contact form on page");
        return Ok(());
    }

    let button: HtmlButtonElement = by_id_as(doc, FORM_SUBMIT_ID)?;
    let widgets = Rc::new(Widgets {
        form: by_id_as(doc, CONTACT_FORM_ID)?,
        status: by_id(doc, FORM_STATUS_ID)?,
        label: child(&button, "span")?,
        icon: child(&button, "i")?,
        button,
    });
    let machine = Rc::new(RefCell::new(ContactForm::new(config.messages.clone())));
    let transport = Rc::new(FetchTransport::new(widgets.form.clone()));
    let timeout = config.submit_timeout();

    let target = widgets.form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();

        let view = match machine.borrow_mut().begin() {
            Ok(view) => view,
            Err(e) => {
                tracing::debug!("Ignoring submit: {}", e);
                return;
            }
        };
        widgets.render(&view);

        let request = widgets.request();
        let widgets = widgets.clone();
        let machine = machine.clone();
        let transport = transport.clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit(&widgets, &machine, &transport, request, timeout).await;
        });
    })
}

async fn submit(
    widgets: &Widgets,
    machine: &RefCell<ContactForm>,
    transport: &FetchTransport,
    request: Result<SubmitRequest, TransportError>,
    timeout: Duration,
) {
    let messages = machine.borrow().messages().clone();
    let outcome = match request {
        Ok(request) => {
            let deadline = gloo_timers::future::sleep(timeout);
            run_submission(transport, &request, deadline, timeout, &messages).await
        }
        Err(e) => {
            tracing::warn!("Contact form not sent: {}", e);
            classify(Err(e), &messages)
        }
    };

    let (view, reset) = {
        let mut machine = machine.borrow_mut();
        let view = machine.finish(outcome);
        (view, machine.should_reset_fields())
    };
    if reset {
        widgets.form.reset();
    }
    widgets.render(&view);
}
