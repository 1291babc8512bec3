use leptos::prelude::*;

#[component]
pub fn AverageScore(
    /// Mean score text, empty while no students are loaded.
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="average-item">
            <span class="drawer-icon">"\u{1F393}"</span>
            <div class="average-text">
                <span class="average-label">"Average Score"</span>
                <span class="average-value">{move || value.get()}</span>
            </div>
        </div>
    }
}
