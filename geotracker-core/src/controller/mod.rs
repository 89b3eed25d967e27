use std::{fmt, time::Duration};

use geotracker_entities::{geo::Position, location::LocationError, place::Place};

use crate::{
    config::{Config, GeolocationOptions},
    gateways::map::{MapFactory, MapWidget},
};

mod loading;
mod search;


pub use self::{
    loading::LoadingIndicator,
    search::{SearchOutcome, SearchRequest, SearchResults, SearchTicket},
};

use self::search::SearchState;

/// Where a click on the page landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchInput,
    SearchResults,
    Elsewhere,
}

/// The state of the location tracker page.
///
/// All page state lives here. The surrounding UI forwards the user
/// interactions and the responses of the asynchronous browser APIs
/// and renders whatever the accessors return.
pub struct PageController<F>
where
    F: MapFactory,
{
    config: Config,
    factory: F,
    map: Option<F::Map>,
    current_position: Option<Position>,
    coordinates: String,
    notice: Option<String>,
    loading: LoadingIndicator,
    search: SearchState,
}

impl<F> fmt::Debug for PageController<F>
where
    F: MapFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("has_map", &self.map.is_some())
            .field("current_position", &self.current_position)
            .field("coordinates", &self.coordinates)
            .field("notice", &self.notice)
            .field("loading", &self.loading)
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl<F> PageController<F>
where
    F: MapFactory,
{
    pub fn new(config: Config, factory: F) -> Self {
        Self {
            config,
            factory,
            map: None,
            current_position: None,
            coordinates: String::new(),
            notice: None,
            loading: LoadingIndicator::default(),
            search: SearchState::default(),
        }
    }

    // -- accessors -- //

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn map(&self) -> Option<&F::Map> {
        self.map.as_ref()
    }

    pub const fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub const fn current_position(&self) -> Option<Position> {
        self.current_position
    }

    /// The formatted coordinates, empty until a position is known.
    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }

    /// The message of the last failed location request.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn search_results(&self) -> SearchResults<'_> {
        self.search.results()
    }

    pub const fn search_debounce(&self) -> Duration {
        self.config.search.debounce
    }

    // -- location -- //

    /// Start acquiring the device position.
    ///
    /// The caller has to report the outcome with [`Self::location_resolved`].
    pub fn request_location(&mut self) -> GeolocationOptions {
        log::debug!("Request current location");
        self.loading.show();
        self.config.geolocation
    }

    pub fn location_resolved(&mut self, result: Result<Position, LocationError>) {
        self.loading.hide();
        match result {
            Ok(pos) => {
                log::debug!("Current location: {}", pos.display());
                self.notice = None;
                self.update_position(pos);
                if let Some(map) = &mut self.map {
                    let zoom = map.zoom();
                    map.set_view(pos, zoom);
                } else {
                    self.ensure_map(pos);
                }
                self.place_marker(pos);
            }
            Err(err) => {
                log::warn!("Error getting location: {err} (code {})", err.code());
                let default_location = self.config.map.default_location;
                self.notice = Some(err.message());
                self.coordinates = default_location.display().to_string();
                if !self.has_map() {
                    self.ensure_map(default_location);
                    self.place_marker(default_location);
                }
            }
        }
    }

    // -- map -- //

    pub fn map_clicked(&mut self, pos: Position) {
        log::debug!("Map clicked at {}", pos.display());
        self.notice = None;
        self.update_position(pos);
        self.place_marker(pos);
    }

    pub fn zoom_in(&mut self) {
        if let Some(map) = &mut self.map {
            map.zoom_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(map) = &mut self.map {
            map.zoom_out();
        }
    }

    // -- search -- //

    /// The text of the search box changed.
    ///
    /// The returned ticket has to be passed to [`Self::debounce_elapsed`]
    /// once the debounce delay passed.
    pub fn search_input(&mut self, text: String) -> SearchTicket {
        if text.trim().is_empty() {
            self.search.close();
        }
        self.search.input(text)
    }

    pub fn debounce_elapsed(&mut self, ticket: SearchTicket) -> Option<SearchRequest> {
        let query = self.search.take_pending(ticket)?.to_owned();
        if query.trim().is_empty() {
            self.search.close();
            return None;
        }
        self.loading.show();
        let request = self.search.next_request(query);
        log::debug!("Search #{}: {}", request.seq, request.query);
        Some(request)
    }

    pub fn search_completed<E>(
        &mut self,
        seq: u64,
        result: Result<Vec<Place>, E>,
    ) -> SearchOutcome
    where
        E: fmt::Display,
    {
        self.loading.hide();
        self.search
            .complete(seq, result, self.config.search.max_results)
    }

    pub fn select_result(&mut self, index: usize) {
        let Some(place) = self.search.rendered(index).cloned() else {
            log::warn!("No search result #{index}");
            return;
        };
        let Place { display_name, pos } = place;
        log::debug!("Selected {display_name}");
        let zoom = self.config.map.default_zoom;
        if let Some(map) = &mut self.map {
            map.set_view(pos, zoom);
        } else {
            self.ensure_map(pos);
        }
        self.place_marker(pos);
        self.notice = None;
        self.update_position(pos);
        self.search.close();
        self.search.set_text(display_name);
    }

    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.search.close();
        }
    }

    // -- helpers -- //

    fn update_position(&mut self, pos: Position) {
        self.current_position = Some(pos);
        self.coordinates = pos.display().to_string();
    }

    fn ensure_map(&mut self, center: Position) {
        if self.map.is_some() {
            return;
        }
        match self.factory.create_map(center, &self.config.map) {
            Ok(map) => {
                log::debug!("Map created at {}", center.display());
                self.map = Some(map);
            }
            Err(err) => {
                log::error!("Unable to initialize map: {err}");
            }
        }
    }

    fn place_marker(&mut self, pos: Position) {
        let radius = self.config.map.accuracy_radius;
        if let Some(map) = &mut self.map {
            map.clear_location();
            map.show_location(pos, radius);
        }
    }
}
