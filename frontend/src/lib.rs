use seed::{prelude::*, *};
use serde_wasm_bindgen::to_value;
use shared::{Coordinate, Driver};
use tracklog::{
    distance::track_distance_km,
    filter::pin_positions,
    geometry::route_geometry,
    gpx_export::track_gpx_data_url,
    selection::{PopupContent, Selection},
    time::display_timestamp,
    Journey,
};
use wasm_bindgen::{
    JsCast,
    prelude::{JsValue, wasm_bindgen},
};

#[wasm_bindgen(module = "/maplibre_map.js")]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    fn init_map(style_url: &str, access_token: JsValue);
    #[wasm_bindgen(js_name = centerMap)]
    fn center_map(center: JsValue, zoom: f64);
    #[wasm_bindgen(js_name = setRouteGeometry)]
    fn set_route_geometry(geojson: &str);
    #[wasm_bindgen(js_name = setJourneyMarkers)]
    fn set_journey_markers(start: JsValue, end: JsValue);
    #[wasm_bindgen(js_name = setPinMarkers)]
    fn set_pin_markers(pins: JsValue);
    #[wasm_bindgen(js_name = openPopup)]
    fn open_popup(anchor: JsValue, content: JsValue);
}

const DRIVER_POSITIONS: &str = include_str!("../data/driver-positions.json");
const INITIAL_ZOOM: f64 = 12.0;

fn map_style_url() -> String {
    if let Some(url) = option_env!("MAP_STYLE_URL") {
        return url.to_string();
    }
    "https://demotiles.maplibre.org/style.json".to_string()
}

fn map_access_token() -> JsValue {
    match option_env!("MAP_ACCESS_TOKEN") {
        Some(token) => JsValue::from_str(token),
        None => JsValue::NULL,
    }
}

pub struct Model {
    journey: Result<TrackedJourney, String>,
}

struct TrackedJourney {
    journey: Journey,
    pins: Vec<Coordinate>,
    distance_km: f64,
    gpx_href: Option<String>,
    selection: Selection,
}

pub enum Msg {
    MarkerClicked(Coordinate),
    PopupClosed,
}

pub fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders.stream(streams::window_event(Ev::from("marker-click"), |event| {
        let event = event
            .dyn_into::<web_sys::CustomEvent>()
            .expect("marker-click event must be CustomEvent");
        let waypoint: Coordinate = serde_wasm_bindgen::from_value(event.detail())
            .unwrap_or_else(|_| Coordinate::sentinel());
        web_sys::console::debug_1(
            &format!(
                "[frontend] marker click lat={:.5} lon={:.5} at {}",
                waypoint.latitude, waypoint.longitude, waypoint.timestamp
            )
            .into(),
        );
        Msg::MarkerClicked(waypoint)
    }));
    orders.stream(streams::window_event(Ev::from("popup-close"), |_| {
        Msg::PopupClosed
    }));

    let journey = match Journey::from_json_str(DRIVER_POSITIONS) {
        Ok(journey) => journey,
        Err(err) => {
            web_sys::console::error_1(
                &format!("[frontend] failed to load driver track: {err}").into(),
            );
            return Model {
                journey: Err(err.to_string()),
            };
        }
    };

    let pins = pin_positions(journey.positions());
    let distance_km = track_distance_km(journey.positions());
    let gpx_href = match track_gpx_data_url(&journey) {
        Ok(url) => Some(url),
        Err(err) => {
            web_sys::console::error_1(&format!("[frontend] GPX export failed: {err}").into());
            None
        }
    };

    push_journey_to_map(&journey, &pins);

    Model {
        journey: Ok(TrackedJourney {
            journey,
            pins,
            distance_km,
            gpx_href,
            selection: Selection::default(),
        }),
    }
}

pub fn update(msg: Msg, model: &mut Model, _: &mut impl Orders<Msg>) {
    let Ok(tracked) = &mut model.journey else {
        return;
    };

    match msg {
        Msg::MarkerClicked(waypoint) => {
            let content = PopupContent::new(tracked.journey.driver(), &waypoint);
            if let (Ok(anchor), Ok(content)) = (to_value(&waypoint), to_value(&content)) {
                open_popup(anchor, content);
            }
            tracked.selection.select(waypoint);
        }
        Msg::PopupClosed => tracked.selection.clear(),
    }
}

fn push_journey_to_map(journey: &Journey, pins: &[Coordinate]) {
    let geometry = route_geometry(journey.driver(), journey.positions());
    set_route_geometry(&geometry.to_string());

    if let (Ok(start), Ok(end)) = (to_value(journey.start()), to_value(journey.end())) {
        set_journey_markers(start, end);
    }

    // The sentinel heads the derived sequence but marks nothing on the map.
    if let Ok(markers) = to_value(&pins[1..]) {
        set_pin_markers(markers);
    }

    if let Ok(center) = to_value(journey.start()) {
        center_map(center, INITIAL_ZOOM);
    }
}

pub fn view(model: &Model) -> Node<Msg> {
    let header = h1!["Mover Driver Tracker"];
    let panel = match &model.journey {
        Ok(tracked) => view_journey(tracked),
        Err(err) => view_load_error(err),
    };

    div![C!["app-container"], header, panel]
}

fn view_journey(tracked: &TrackedJourney) -> Node<Msg> {
    div![
        C!["side-panel"],
        view_driver(tracked.journey.driver()),
        view_stats(tracked),
        view_selection(&tracked.selection, tracked.journey.driver()),
        view_gpx_link(&tracked.gpx_href),
    ]
}

fn view_driver(driver: &Driver) -> Node<Msg> {
    div![
        C!["metadata-grid"],
        metadata_card("Chauffeur", driver.name.clone()),
        metadata_card("Appareil", driver.device_label()),
        metadata_card("Téléphone", driver.phone.display()),
    ]
}

fn view_stats(tracked: &TrackedJourney) -> Node<Msg> {
    let journey = &tracked.journey;
    div![
        C!["stats"],
        h2!["Trajet"],
        div![
            C!["metadata-grid"],
            metadata_card("Positions", journey.positions().len().to_string()),
            metadata_card("Repères", (tracked.pins.len() - 1).to_string()),
            metadata_card("Distance", format_km(tracked.distance_km)),
            metadata_card("Départ", display_timestamp(&journey.start().timestamp)),
            metadata_card("Arrivée", display_timestamp(&journey.end().timestamp)),
        ],
    ]
}

fn view_selection(selection: &Selection, driver: &Driver) -> Node<Msg> {
    let body = match selection.waypoint() {
        Some(waypoint) => {
            let content = PopupContent::new(driver, waypoint);
            div![
                p![format!("Chauffeur : {}", content.driver_name)],
                p![format!("Appareil : {}", content.device)],
                p![format!("Téléphone : {}", content.phone)],
                p![format!("Horodatage : {}", content.timestamp)],
                p![format!(
                    "Position : {:.5} / {:.5}",
                    waypoint.latitude, waypoint.longitude
                )],
            ]
        }
        None => p!["Cliquez sur un repère de la carte pour afficher les informations du chauffeur."],
    };

    div![C!["selection"], h2!["Repère sélectionné"], body]
}

fn view_gpx_link(gpx_href: &Option<String>) -> Node<Msg> {
    match gpx_href {
        Some(href) => a![
            C!["gpx-download"],
            attrs! {
                At::Href => href,
                At::Download => "journey.gpx",
            },
            "Télécharger le GPX",
        ],
        None => empty![],
    }
}

fn view_load_error(err: &str) -> Node<Msg> {
    div![
        C!["error-panel"],
        h2!["Données indisponibles"],
        p![C!["error"], err],
    ]
}

fn metadata_card(label: &str, content: String) -> Node<Msg> {
    div![
        C!["metadata-card"],
        span![C!["label"], label],
        strong![content],
    ]
}

fn format_km(value: f64) -> String {
    format!("{value:.2} km")
}

#[wasm_bindgen(start)]
pub fn start() {
    init_map(&map_style_url(), map_access_token());
    App::start("app", init, update, view);
}
