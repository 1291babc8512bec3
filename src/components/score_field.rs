use leptos::prelude::*;

use score_roster::RosterSession;

/// Numeric field bound to the selected student's score. Every keystroke is
/// written straight into the session.
#[component]
pub fn ScoreField(session: RwSignal<RosterSession>) -> impl IntoView {
    let current = move || session.with(|s| s.current_score());

    view! {
        <div class="score-panel">
            <style>{include_str!("score_field.css")}</style>
            <div class="score-field">
                <label for="score-input" class="score-label">"Score"</label>
                <input
                    id="score-input"
                    type="number"
                    class="score-input"
                    prop:value=current
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        session.update(|s| {
                            s.set_score(&value);
                        });
                    }
                />
            </div>
        </div>
    }
}
