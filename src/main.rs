//! Solar study landing page built with Yew.
//! Wires the form hook, the deferred map and the view components.

use solar_lead_form::{Field, SubmissionOutcome, WebhookSink};
use yew::prelude::*;

mod components;
mod deferred;
mod hooks;
mod map;

use components::{FeatureCards, Hero, SelectedPosition, SubmitButton, SuccessCard, TextField};
use deferred::DeferredMap;
use hooks::use_lead_form;

const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

/// Primary page component: success view or the lead form.
#[function_component(App)]
fn app() -> Html {
    let sink = use_memo((), |_| WebhookSink::default());
    let form = use_lead_form(sink);
    let submission = form.state.submission();

    if *form.state.outcome() == SubmissionOutcome::Success {
        return html! { <SuccessCard on_new_request={form.on_new_request.clone()} /> };
    }

    let text_field = |field: Field| {
        html! {
            <TextField
                field={field}
                value={AttrValue::from(submission.get(field).to_string())}
                oninput={form.on_input.clone()}
            />
        }
    };

    html! {
        <div class="page">
            <Hero />
            <FeatureCards />

            <section class="card form-card">
                <h2>{ "Obtenez votre étude gratuite" }</h2>
                <p class="form-description">
                    { "Remplissez le formulaire ci-dessous et recevez une estimation personnalisée sous 24h" }
                </p>

                <form onsubmit={form.on_submit.clone()} novalidate={true}>
                    if let Some(err) = form.state.error_message() {
                        <div class="form-error">{ err }</div>
                    }

                    <div class="form-row">
                        { text_field(Field::Nom) }
                        { text_field(Field::Prenom) }
                    </div>
                    <div class="form-row">
                        { text_field(Field::Email) }
                        { text_field(Field::Telephone) }
                    </div>
                    { text_field(Field::FactureElectricite) }

                    <div class="form-group">
                        <label>{ "📍 Emplacement de votre toiture *" }</label>
                        <p class="hint">
                            { "Cliquez sur la carte pour indiquer l'emplacement exact de votre toiture" }
                        </p>
                        <DeferredMap
                            position={submission.coordinate}
                            on_select={form.on_select.clone()}
                        />
                        <SelectedPosition position={submission.coordinate} />
                    </div>

                    <SubmitButton submitting={form.state.is_submitting()} />

                    <p class="consent">
                        { "En soumettant ce formulaire, vous acceptez d'être contacté par nos conseillers pour votre projet solaire." }
                    </p>
                </form>
            </section>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }
    yew::Renderer::<App>::new().render();
}
