//! Placeholder that swaps in the map once the page can host it.

use crate::map::MapSelector;
use gloo_timers::callback::Interval;
use solar_lead_form::config::{MAP_HEIGHT_PX, READY_POLL_MS};
use solar_lead_form::Coordinate;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// True once the document has loaded and the Leaflet global is present.
fn map_host_ready() -> bool {
    let loaded = gloo_utils::document().ready_state() == "complete";
    let leaflet = js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("L"))
        .unwrap_or(false);
    loaded && leaflet
}

#[derive(Properties, PartialEq)]
pub struct DeferredMapProps {
    pub position: Option<Coordinate>,
    pub on_select: Callback<Coordinate>,
}

#[function_component(DeferredMap)]
pub fn deferred_map(props: &DeferredMapProps) -> Html {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        // Re-runs when `ready` flips, which drops the interval.
        use_effect_with(*ready, move |&is_ready| {
            let poll = if is_ready {
                None
            } else if map_host_ready() {
                ready.set(true);
                None
            } else {
                Some(Interval::new(READY_POLL_MS, move || {
                    if map_host_ready() {
                        ready.set(true);
                    }
                }))
            };
            move || drop(poll)
        });
    }

    if *ready {
        html! {
            <MapSelector position={props.position} on_select={props.on_select.clone()} />
        }
    } else {
        html! {
            <div
                class="map-placeholder"
                style={format!("height: {}px; width: 100%;", MAP_HEIGHT_PX)}
            />
        }
    }
}
