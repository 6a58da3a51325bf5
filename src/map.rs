//! Leaflet map widget: click to drop the roof marker.

use leaflet::{
    Icon, IconOptions, LatLng, Map, MapOptions, Marker, MarkerOptions, MouseEvent as MapClick,
    Point, TileLayer, TileLayerOptions,
};
use solar_lead_form::config::{
    MarkerIconMetrics, MarkerIconUrls, DEFAULT_ZOOM, MAP_HEIGHT_PX, MARKER_ICON_METRICS,
    MARKER_ICON_URLS, TILE_ATTRIBUTION, TILE_URL_TEMPLATE,
};
use solar_lead_form::Coordinate;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MapSelectorProps {
    /// Currently selected location; the view recenters when it changes.
    pub position: Option<Coordinate>,
    /// Emitted with the clicked point on every map click.
    pub on_select: Callback<Coordinate>,
    #[prop_or(MARKER_ICON_URLS)]
    pub marker_icons: MarkerIconUrls,
    #[prop_or(MARKER_ICON_METRICS)]
    pub marker_metrics: MarkerIconMetrics,
}

pub enum Msg {
    Clicked(Coordinate),
}

pub struct MapSelector {
    node_ref: NodeRef,
    map: Option<Map>,
    marker: Option<Marker>,
    // Kept alive for as long as the map holds the listener.
    on_click: Option<Closure<dyn FnMut(MapClick)>>,
}

fn to_lat_lng(coordinate: &Coordinate) -> LatLng {
    LatLng::new(coordinate.latitude, coordinate.longitude)
}

fn point((x, y): (f64, f64)) -> Point {
    Point::new(x, y)
}

fn marker_options(icons: &MarkerIconUrls, metrics: &MarkerIconMetrics) -> MarkerOptions {
    let icon_options = IconOptions::new();
    icon_options.set_icon_url(icons.icon.to_string());
    icon_options.set_shadow_url(icons.shadow.to_string());
    // No typed setter for the retina image in the bindings.
    if let Err(e) = js_sys::Reflect::set(
        &icon_options,
        &JsValue::from_str("iconRetinaUrl"),
        &JsValue::from_str(icons.retina_icon),
    ) {
        log::warn!("Could not set retina marker icon: {:?}", e);
    }
    icon_options.set_icon_size(point(metrics.size));
    icon_options.set_icon_anchor(point(metrics.anchor));
    icon_options.set_popup_anchor(point(metrics.popup_anchor));
    icon_options.set_shadow_size(point(metrics.shadow_size));

    let options = MarkerOptions::new();
    options.set_icon(Icon::new(&icon_options));
    options
}

impl MapSelector {
    /// Bring marker and view in line with `position`.
    fn sync_position(&mut self, props: &MapSelectorProps, animate: bool) {
        let Some(map) = &self.map else {
            return;
        };

        match &props.position {
            Some(coordinate) => {
                let latlng = to_lat_lng(coordinate);
                match &self.marker {
                    Some(marker) => {
                        marker.set_lat_lng(&latlng);
                    }
                    None => {
                        let marker = Marker::new_with_options(
                            &latlng,
                            &marker_options(&props.marker_icons, &props.marker_metrics),
                        );
                        marker.add_to(map);
                        self.marker = Some(marker);
                    }
                }
                if animate {
                    map.fly_to(&latlng, map.get_zoom());
                }
            }
            None => {
                if let Some(marker) = self.marker.take() {
                    marker.remove();
                }
            }
        }
    }
}

impl Component for MapSelector {
    type Message = Msg;
    type Properties = MapSelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node_ref: NodeRef::default(),
            map: None,
            marker: None,
            on_click: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Clicked(coordinate) => {
                ctx.props().on_select.emit(coordinate);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().position != old_props.position {
            self.sync_position(ctx.props(), true);
        }
        false
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(container) = self.node_ref.cast::<HtmlElement>() else {
            log::warn!("Map container not mounted, skipping map initialisation");
            return;
        };

        let props = ctx.props();
        let center = props.position.unwrap_or_else(Coordinate::default_center);
        let map = Map::new_with_element(&container, &MapOptions::default());
        map.set_view(&to_lat_lng(&center), DEFAULT_ZOOM);

        let tile_options = TileLayerOptions::new();
        tile_options.set_attribution(TILE_ATTRIBUTION.to_string());
        TileLayer::new_options(TILE_URL_TEMPLATE, &tile_options).add_to(&map);

        let link = ctx.link().clone();
        let on_click = Closure::wrap(Box::new(move |event: MapClick| {
            let at = event.lat_lng();
            link.send_message(Msg::Clicked(Coordinate::new(at.lat(), at.lng())));
        }) as Box<dyn FnMut(MapClick)>);
        map.on("click", on_click.as_ref().unchecked_ref());

        self.map = Some(map);
        self.on_click = Some(on_click);
        self.sync_position(props, false);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(map) = self.map.take() {
            map.remove();
        }
        self.marker = None;
        self.on_click = None;
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div
                ref={self.node_ref.clone()}
                class="map-selector"
                style={format!("height: {}px; width: 100%;", MAP_HEIGHT_PX)}
            />
        }
    }
}
