//! Pure Yew view components for the landing page.
//!
//! These render from props only; all form state lives in the
//! [`use_lead_form`](crate::hooks::use_lead_form) hook.

use solar_lead_form::utils::format_coordinate;
use solar_lead_form::{Coordinate, Field};
use yew::prelude::*;

/// Page heading and pitch.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <h1 class="hero-title">{ "☀ Passez au Solaire" }</h1>
            <p class="hero-pitch">
                { "Réduisez vos factures d'électricité jusqu'à 70% avec une installation photovoltaïque sur mesure" }
            </p>
        </header>
    }
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Économies Immédiates",
        "Produisez votre propre électricité et réduisez vos factures dès le premier jour",
    ),
    (
        "Rentable à long terme",
        "Amortissement rapide et revenus garantis pendant 20 ans minimum",
    ),
    (
        "Énergie Propre",
        "Contribuez à la transition énergétique et à la protection de l'environnement",
    ),
];

#[function_component(FeatureCards)]
pub fn feature_cards() -> Html {
    html! {
        <section class="features">
            { FEATURES.iter().map(|(title, body)| html! {
                <div class="card feature-card">
                    <h3>{ *title }</h3>
                    <p>{ *body }</p>
                </div>
            }).collect::<Html>() }
        </section>
    }
}

/// One labelled text input bound to a form field.
#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub field: Field,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let name = props.field.name();
    html! {
        <div class="form-group">
            <label for={name}>{ props.field.label() }</label>
            <input
                id={name}
                name={name}
                type={props.field.input_type()}
                value={props.value.clone()}
                placeholder={props.field.placeholder()}
                oninput={props.oninput.clone()}
                required={true}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectedPositionProps {
    pub position: Option<Coordinate>,
}

/// Confirmation line under the map once a location is picked.
#[function_component(SelectedPosition)]
pub fn selected_position(props: &SelectedPositionProps) -> Html {
    match &props.position {
        Some(c) => html! {
            <p class="selected-position">
                { format!("✓ Position sélectionnée: {}", format_coordinate(c)) }
            </p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub submitting: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn-primary" disabled={props.submitting}>
            { if props.submitting { "Envoi en cours..." } else { "Obtenir mon étude gratuite" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessCardProps {
    pub on_new_request: Callback<MouseEvent>,
}

#[function_component(SuccessCard)]
pub fn success_card(props: &SuccessCardProps) -> Html {
    html! {
        <div class="success-page">
            <div class="card success-card">
                <div class="success-icon">{ "✔" }</div>
                <h2>{ "Merci !" }</h2>
                <p>
                    { "Votre demande a été envoyée avec succès. Nous vous contacterons rapidement pour étudier votre projet solaire." }
                </p>
                <button class="btn-primary" onclick={props.on_new_request.clone()}>
                    { "Faire une nouvelle demande" }
                </button>
            </div>
        </div>
    }
}
