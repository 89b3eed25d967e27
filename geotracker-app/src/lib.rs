use anyhow::anyhow;
use leptos::{leptos_dom::helpers::TimeoutHandle, *};

use geotracker_boundary::NominatimPlace;
use geotracker_core::{Config, PageController, SearchRequest};
use geotracker_entities::{geo::Position, place::Place};
use geotracker_frontend_api as api;

mod components;
mod geolocation;

use components::*;

const CONFIG_ELEMENT_ID: &str = "geotracker-config";

type Controller = RwSignal<PageController<LeafletMapFactory>>;

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::error!("Invalid configuration, use defaults: {err}");
        Config::default()
    });
    let map_container_id = config.map.container_id.clone();
    let search_api = api::SearchApi::new(config.search.url.clone());

    // -- signals -- //

    let clicked = RwSignal::new(None::<Position>);
    let controller: Controller = RwSignal::new(PageController::new(
        config,
        LeafletMapFactory::new(clicked.write_only()),
    ));
    let debounce_timer = StoredValue::new(None::<TimeoutHandle>);

    let coordinates = Memo::new(move |_| controller.with(|c| c.coordinates().to_owned()));
    let notice = Memo::new(move |_| controller.with(|c| c.notice().map(ToOwned::to_owned)));
    let loading = Memo::new(move |_| controller.with(PageController::is_loading));
    let search_text = Memo::new(move |_| controller.with(|c| c.search_text().to_owned()));
    let results = Memo::new(move |_| controller.with(|c| ResultList::from(c.search_results())));

    // -- actions -- //

    let locate = Action::new(move |()| async move {
        let Some(options) = controller.try_update(PageController::request_location) else {
            return;
        };
        let result = geolocation::current_position(options).await;
        controller.update(|c| c.location_resolved(result));
    });

    let search = Action::new(move |request: &SearchRequest| {
        let SearchRequest { seq, query } = request.clone();
        let search_api = search_api.clone();
        async move {
            let result = search_api.search(&query).await.map(into_places);
            controller.update(|c| {
                c.search_completed(seq, result);
            });
        }
    });

    // -- callbacks -- //

    let on_zoom_in = move || controller.update(PageController::zoom_in);
    let on_zoom_out = move || controller.update(PageController::zoom_out);
    let on_refresh = move || locate.dispatch(());

    let on_search_input = move |text: String| {
        let Some(ticket) = controller.try_update(|c| c.search_input(text)) else {
            return;
        };
        if let Some(timer) = debounce_timer.get_value() {
            timer.clear();
        }
        let delay = controller.with_untracked(PageController::search_debounce);
        let timer = set_timeout_with_handle(
            move || {
                if let Some(Some(request)) = controller.try_update(|c| c.debounce_elapsed(ticket)) {
                    search.dispatch(request);
                }
            },
            delay,
        );
        match timer {
            Ok(timer) => debounce_timer.set_value(Some(timer)),
            Err(err) => log::error!("Unable to start search timer: {err:?}"),
        }
    };

    let on_select = move |index| controller.update(|c| c.select_result(index));
    let on_click = move |target| controller.update(|c| c.click(target));

    // -- effects -- //

    Effect::new(move |_| {
        if let Some(pos) = clicked.get() {
            controller.update(|c| c.map_clicked(pos));
        }
    });

    // -- init -- //

    locate.dispatch(());

    view! {
      <header class="header">
        <h1>"Location Tracker"</h1>
        <PlaceSearch
          text = search_text.into()
          results = results.into()
          on_input = on_search_input
          on_select
          on_click
        />
      </header>
      <main class="map-wrapper">
        <Map container_id = map_container_id />
        <MapControls on_zoom_in on_zoom_out on_refresh />
        <LoadingIndicator active = loading.into() />
      </main>
      <footer>
        <Coordinates coordinates = coordinates.into() notice = notice.into() />
      </footer>
    }
}

/// Read an optional inline TOML configuration from the page.
fn load_config() -> anyhow::Result<Config> {
    let custom_config = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    if custom_config.is_some() {
        log::info!("Load configuration from #{CONFIG_ELEMENT_ID}");
    }
    Config::try_load_from_str_or_default(custom_config.as_deref())
        .map_err(|err| anyhow!("#{CONFIG_ELEMENT_ID}: {err}"))
}

fn into_places(places: Vec<NominatimPlace>) -> Vec<Place> {
    places
        .into_iter()
        .filter_map(|place| {
            let name = place.display_name.clone();
            Place::try_from(place)
                .map_err(|err| log::warn!("Ignore search result '{name}': {err}"))
                .ok()
        })
        .collect()
}
