use leptos::*;

#[component]
pub fn Coordinates(coordinates: Signal<String>, notice: Signal<Option<String>>) -> impl IntoView {
    view! {
      <div class="location-info">
        { move || notice.get().map(|msg| view! { <p class="location-notice">{ msg }</p> }) }
        <p id="coordinates">{ move || coordinates.get() }</p>
      </div>
    }
}
