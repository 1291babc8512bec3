//! Permanent left drawer listing the roster.
//!
//! Clicking a student selects them for editing; the entry below the list
//! shows the class average.

use leptos::prelude::*;

use score_roster::RosterSession;

use crate::components::average_score::AverageScore;

#[component]
pub fn StudentDrawer(session: RwSignal<RosterSession>) -> impl IntoView {
    // Names only change on load, so score edits do not re-diff the list.
    let entries = Memo::new(move |_| {
        session.with(|s| {
            s.records()
                .iter()
                .enumerate()
                .map(|(index, student)| (index, student.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    let average = Signal::derive(move || session.with(|s| s.average_score()));

    view! {
        <nav class="drawer">
            <style>{include_str!("student_drawer.css")}</style>
            <div class="toolbar-spacer"></div>
            <hr class="drawer-divider" />
            <ul class="student-list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.clone()
                    children=move |(index, name)| {
                        let is_selected = move || session.with(|s| s.is_selected(index));
                        view! {
                            <li>
                                <button
                                    class="student-item"
                                    class:selected=is_selected
                                    on:click=move |_| session.update(|s| s.select(index))
                                >
                                    <span class="drawer-icon">"\u{1F464}"</span>
                                    <span class="student-name">{name}</span>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <hr class="drawer-divider" />
            <AverageScore value=average />
        </nav>
    }
}
