use leptos::*;

#[component]
pub fn MapControls<Z, O, R>(on_zoom_in: Z, on_zoom_out: O, on_refresh: R) -> impl IntoView
where
    Z: Fn() + 'static + Copy,
    O: Fn() + 'static + Copy,
    R: Fn() + 'static + Copy,
{
    view! {
      <div class="map-controls">
        <button id="zoom-in" title="Zoom in" on:click = move |_| on_zoom_in()>"+"</button>
        <button id="zoom-out" title="Zoom out" on:click = move |_| on_zoom_out()>"−"</button>
        <button id="refresh-location" title="Locate me" on:click = move |_| on_refresh()>
          "⟳"
        </button>
      </div>
    }
}
