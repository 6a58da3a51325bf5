use chrono::Utc;
use solar_lead_form::{Coordinate, FormController, LeadSink};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Snapshot of the form plus the callbacks that drive it.
#[derive(Clone)]
pub struct LeadForm {
    /// Controller state as of this render.
    pub state: FormController,
    /// `oninput` for every text input; routes by the input's `name`.
    pub on_input: Callback<InputEvent>,
    /// Map click handler.
    pub on_select: Callback<Coordinate>,
    pub on_submit: Callback<SubmitEvent>,
    /// "New request" button on the success view.
    pub on_new_request: Callback<MouseEvent>,
}

/// Custom hook owning the form controller for the lifetime of the page.
///
/// The controller lives in a shared cell rather than in render state so the
/// submitting gate is checked against the live value, not a snapshot taken
/// when the callback was created.
#[hook]
pub fn use_lead_form<S: LeadSink + 'static>(sink: Rc<S>) -> LeadForm {
    let controller = use_mut_ref(FormController::new);
    let refresh = use_force_update();

    let on_input = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if controller
                .borrow_mut()
                .set_field_by_name(&input.name(), input.value())
            {
                refresh.force_update();
            }
        })
    };

    let on_select = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |coordinate: Coordinate| {
            log::debug!("Location selected: {:?}", coordinate);
            controller.borrow_mut().select_coordinate(coordinate);
            refresh.force_update();
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let begun = controller.borrow_mut().begin_submit(Utc::now());
            refresh.force_update();
            let Ok(payload) = begun else {
                return;
            };

            // Borrow is released before the await; finish_submit re-borrows.
            let delivery = sink.deliver(payload);
            let controller = controller.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = delivery.await;
                controller.borrow_mut().finish_submit(result);
                refresh.force_update();
            });
        })
    };

    let on_new_request = {
        let controller = controller.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().start_new_request();
            refresh.force_update();
        })
    };

    let state = controller.borrow().clone();

    LeadForm {
        state,
        on_input,
        on_select,
        on_submit,
        on_new_request,
    }
}
