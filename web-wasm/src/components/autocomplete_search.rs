//! 名前検索（候補ドロップダウン付き）

use crate::components::doctor_card::DoctorAvatar;
use doctor_finder_common::{get_autocomplete_suggestions, Doctor};
use leptos::prelude::*;

#[component]
pub fn AutocompleteSearch<F>(
    doctors: Memo<Vec<Doctor>>,
    search_term: Memo<String>,
    on_search_change: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    // 入力中だけ候補を開く（選択・フォーカス喪失で閉じる）
    let (is_open, set_is_open) = signal(false);

    let suggestions = Memo::new(move |_| {
        let term = search_term.get();
        doctors.with(|list| {
            get_autocomplete_suggestions(list, &term)
                .into_iter()
                .cloned()
                .collect::<Vec<Doctor>>()
        })
    });

    let show_suggestions = move || is_open.get() && !suggestions.with(Vec::is_empty);

    let on_input = {
        let on_search_change = on_search_change.clone();
        move |ev: leptos::ev::Event| {
            set_is_open.set(true);
            on_search_change(event_target_value(&ev));
        }
    };

    let on_enter = {
        let on_search_change = on_search_change.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                set_is_open.set(false);
                on_search_change(event_target_value(&ev));
            }
        }
    };

    view! {
        <div class="autocomplete">
            <input
                type="text"
                class="search-input"
                data-testid="autocomplete-input"
                placeholder="Search Symptoms, Doctors, Specialists, Clinics"
                prop:value=move || search_term.get()
                on:input=on_input
                on:keydown=on_enter
                on:focus=move |_| set_is_open.set(true)
                on:blur=move |_| set_is_open.set(false)
            />

            <Show when=show_suggestions>
                <ul class="suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|doctor| doctor.id.clone()
                        children={
                            let on_search_change = on_search_change.clone();
                            move |doctor: Doctor| {
                                let on_search_change = on_search_change.clone();
                                let name = doctor.name.clone();
                                // blur より先に確定させるため mousedown で拾う
                                let on_select = move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    set_is_open.set(false);
                                    on_search_change(name.clone());
                                };
                                view! {
                                    <li
                                        class="suggestion-item"
                                        data-testid="suggestion-item"
                                        on:mousedown=on_select
                                    >
                                        <DoctorAvatar doctor=doctor.clone() size="sm" />
                                        <div class="suggestion-text">
                                            <span class="suggestion-name">{doctor.name.clone()}</span>
                                            <span class="suggestion-specialty">
                                                {doctor.primary_speciality().unwrap_or_default().to_string()}
                                            </span>
                                        </div>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
