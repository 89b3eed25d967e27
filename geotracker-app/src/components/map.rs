use leaflet::LatLng;
use leptos::*;
use wasm_bindgen::closure::Closure;

use geotracker_core::{config::MapSettings, MapError, MapFactory, MapWidget};
use geotracker_entities::geo::Position;

const MARKER_CLASS_NAME: &str = "marker-pulse-container";
const MARKER_HTML: &str = r#"<div class="marker-pulse"></div>"#;
const MARKER_SIZE: f64 = 20.0;
const ACCURACY_COLOR: &str = "rgba(0, 242, 254, 0.3)";
const ACCURACY_FILL_COLOR: &str = "rgba(0, 242, 254, 0.1)";
const ACCURACY_FILL_OPACITY: f64 = 0.5;

/// Creates Leaflet maps and reports clicks on them.
#[derive(Debug, Clone, Copy)]
pub struct LeafletMapFactory {
    clicked: WriteSignal<Option<Position>>,
}

impl LeafletMapFactory {
    #[must_use]
    pub const fn new(clicked: WriteSignal<Option<Position>>) -> Self {
        Self { clicked }
    }
}

impl MapFactory for LeafletMapFactory {
    type Map = LeafletMap;

    fn create_map(&self, center: Position, settings: &MapSettings) -> Result<LeafletMap, MapError> {
        if document()
            .get_element_by_id(&settings.container_id)
            .is_none()
        {
            return Err(MapError::ContainerNotFound(settings.container_id.clone()));
        }

        let options = leaflet::MapOptions::new();
        options.set_zoom_control(false);
        options.set_attribution_control(true);
        let map = leaflet::Map::new(&settings.container_id, &options);
        map.set_view(&lat_lng(center), settings.default_zoom);

        let tile_options = leaflet::TileLayerOptions::new();
        tile_options.set_attribution(settings.attribution.clone());
        tile_options.set_max_zoom(settings.max_zoom);
        leaflet::TileLayer::new_options(&settings.tile_url, &tile_options).add_to(&map);

        let clicked = self.clicked;
        let on_click = Closure::<dyn Fn(leaflet::MouseEvent)>::new(move |ev: leaflet::MouseEvent| {
            let lat_lng = ev.lat_lng();
            clicked.set(Some(Position::new(lat_lng.lat(), lat_lng.lng())));
        });
        map.on("click", on_click.as_ref());

        Ok(LeafletMap {
            map,
            location: None,
            _on_click: on_click,
        })
    }
}

pub struct LeafletMap {
    map: leaflet::Map,
    location: Option<(leaflet::Marker, leaflet::Circle)>,
    // Leaflet only holds a JS reference, the closure must live as long as the map.
    _on_click: Closure<dyn Fn(leaflet::MouseEvent)>,
}

impl MapWidget for LeafletMap {
    fn set_view(&mut self, center: Position, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }

    fn zoom_in(&mut self) {
        self.map.zoom_in(1.0);
    }

    fn zoom_out(&mut self) {
        self.map.zoom_out(1.0);
    }

    fn show_location(&mut self, pos: Position, accuracy_radius: f64) {
        let marker_options = leaflet::MarkerOptions::new();
        marker_options.set_icon(pulse_icon().into());
        let marker = leaflet::Marker::new_with_options(&lat_lng(pos), &marker_options);
        marker.add_to(&self.map);

        let circle_options = leaflet::CircleOptions::new();
        circle_options.set_radius(accuracy_radius);
        circle_options.set_color(ACCURACY_COLOR.to_string());
        circle_options.set_fill_color(ACCURACY_FILL_COLOR.to_string());
        circle_options.set_fill_opacity(ACCURACY_FILL_OPACITY);
        let circle = leaflet::Circle::new_with_options(&lat_lng(pos), &circle_options);
        circle.add_to(&self.map);

        self.location = Some((marker, circle));
    }

    fn clear_location(&mut self) {
        if let Some((marker, circle)) = self.location.take() {
            self.map.remove_layer(&marker);
            self.map.remove_layer(&circle);
        }
    }
}

fn lat_lng(pos: Position) -> LatLng {
    let Position { lat, lng } = pos;
    LatLng::new(lat, lng)
}

fn pulse_icon() -> leaflet::DivIcon {
    let options = leaflet::DivIconOptions::new();
    options.set_class_name(MARKER_CLASS_NAME.to_string());
    options.set_html(MARKER_HTML.to_string());
    options.set_icon_size(leaflet::Point::new(MARKER_SIZE, MARKER_SIZE));
    options.set_icon_anchor(leaflet::Point::new(MARKER_SIZE / 2.0, MARKER_SIZE / 2.0));
    leaflet::DivIcon::new(&options)
}

/// The element the Leaflet map is rendered into.
#[component]
pub fn Map(container_id: String) -> impl IntoView {
    view! {
      <div id=container_id class="map"></div>
    }
}
