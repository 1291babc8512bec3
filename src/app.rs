use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use score_roster::{GradesClient, RosterConfig, RosterSession};

use crate::components::score_field::ScoreField;
use crate::components::student_drawer::StudentDrawer;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(RosterSession::new());
    let client = GradesClient::new(RosterConfig::default());

    // Load the roster once on mount. Failures are logged by the session.
    Effect::new(move |_| {
        let Some(ticket) = session.try_update(|s| s.begin_load()) else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let result = client.fetch_grades().await;
            session.try_update(|s| s.finish_load(ticket, result));
        });
    });

    on_cleanup(move || {
        session.try_update(|s| s.cancel_load());
    });

    view! {
        <div class="app-layout">
            <style>{include_str!("app.css")}</style>
            <header class="title-bar">
                <h1 class="title-bar-text">"Test Scores of Students"</h1>
            </header>
            <StudentDrawer session=session />
            <main class="content">
                <div class="toolbar-spacer"></div>
                <ScoreField session=session />
            </main>
        </div>
    }
}
