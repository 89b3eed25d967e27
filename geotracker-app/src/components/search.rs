use leptos::*;
use wasm_bindgen::JsCast;

use geotracker_core::{ClickTarget, SearchResults};

const NO_RESULTS: &str = "No results found";

/// Owned snapshot of the result list for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultList {
    Hidden,
    NoResults,
    Places(Vec<String>),
}

impl From<SearchResults<'_>> for ResultList {
    fn from(from: SearchResults<'_>) -> Self {
        match from {
            SearchResults::Hidden => Self::Hidden,
            SearchResults::NoResults => Self::NoResults,
            SearchResults::Places(places) => Self::Places(
                places
                    .iter()
                    .map(|place| place.display_name.clone())
                    .collect(),
            ),
        }
    }
}

#[component]
pub fn PlaceSearch<I, S, C>(
    text: Signal<String>,
    results: Signal<ResultList>,
    on_input: I,
    on_select: S,
    on_click: C,
) -> impl IntoView
where
    I: Fn(String) + 'static,
    S: Fn(usize) + 'static + Copy,
    C: Fn(ClickTarget) + 'static,
{
    let input_ref = create_node_ref::<html::Input>();
    let results_ref = create_node_ref::<html::Div>();

    let listener = window_event_listener(ev::click, move |ev| {
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let target = target.as_ref();
        let click_target = if input_ref
            .get_untracked()
            .is_some_and(|input| input.contains(target))
        {
            ClickTarget::SearchInput
        } else if results_ref
            .get_untracked()
            .is_some_and(|list| list.contains(target))
        {
            ClickTarget::SearchResults
        } else {
            ClickTarget::Elsewhere
        };
        on_click(click_target);
    });
    on_cleanup(move || listener.remove());

    view! {
      <div class="search-container">
        <input
          id="search-input"
          type="search"
          placeholder="Search for a place"
          autocomplete="off"
          node_ref=input_ref
          prop:value=move || text.get()
          on:input = move |ev| {
            on_input(event_target_value(&ev));
          }
        />
        <div
          id="search-results"
          class="search-results"
          class:active=move || results.with(|r| *r != ResultList::Hidden)
          node_ref=results_ref
        >
          { move || match results.get() {
              ResultList::Hidden => ().into_view(),
              ResultList::NoResults => view! {
                <div class="search-result-item">{ NO_RESULTS }</div>
              }.into_view(),
              ResultList::Places(names) => names
                .into_iter()
                .enumerate()
                .map(|(index, name)| view! {
                  <div class="search-result-item" on:click = move |_| on_select(index)>
                    { name }
                  </div>
                })
                .collect_view(),
            }
          }
        </div>
      </div>
    }
}
