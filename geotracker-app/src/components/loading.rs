use leptos::*;

#[component]
pub fn LoadingIndicator(active: Signal<bool>) -> impl IntoView {
    view! {
      <div id="loading-indicator" class="loading-indicator" class:active=move || active.get()>
        <div class="spinner"></div>
      </div>
    }
}
