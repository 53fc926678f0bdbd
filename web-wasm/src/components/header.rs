//! ヘッダーコンポーネント

use crate::components::autocomplete_search::AutocompleteSearch;
use doctor_finder_common::Doctor;
use leptos::prelude::*;

#[component]
pub fn Header<F>(
    doctors: Memo<Vec<Doctor>>,
    search_term: Memo<String>,
    on_search_change: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    view! {
        <header class="header">
            <div class="container header-inner">
                <h1 class="logo">"Doctor Finder"</h1>
                <AutocompleteSearch
                    doctors=doctors
                    search_term=search_term
                    on_search_change=on_search_change
                />
            </div>
        </header>
    }
}
