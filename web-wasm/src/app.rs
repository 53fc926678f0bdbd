//! メインアプリケーションコンポーネント

use crate::api::doctors::fetch_doctors;
use crate::components::{doctor_list::DoctorList, filter_panel::FilterPanel, header::Header};
use crate::history::BrowserHistory;
use doctor_finder_common::{panel_specialties, FilterPatch, FinderController};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 画面全体の状態
pub type AppController = FinderController<BrowserHistory>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // URLからフィルタ状態を復元して開始
    let controller = RwSignal::new(AppController::new(BrowserHistory));

    // 初回のみ取得（再試行なし）。失敗はコントローラがログに出す
    spawn_local(async move {
        let result = fetch_doctors().await;
        controller.update(|c| c.receive_doctors(result));
    });

    // 戻る/進む: URLから復元のみ（書き戻さない）
    let _popstate = window_event_listener(ev::popstate, move |_| {
        controller.update(|c| {
            c.navigate();
        });
    });

    let filters = Memo::new(move |_| controller.with(|c| c.filters().clone()));
    let doctors = Memo::new(move |_| controller.with(|c| c.doctors().to_vec()));
    let visible = Memo::new(move |_| controller.with(|c| c.visible().to_vec()));
    let loading = Memo::new(move |_| controller.with(|c| c.is_loading()));
    let specialties = Memo::new(move |_| controller.with(|c| panel_specialties(c.specialties())));
    let search_term = Memo::new(move |_| filters.with(|f| f.search.clone()));

    let on_filter_change = move |patch: FilterPatch| {
        controller.update(|c| c.set_filters(patch));
    };

    let on_search_change = move |term: String| {
        controller.update(|c| c.set_filters(FilterPatch::search(term)));
    };

    view! {
        <div class="app">
            <Header
                doctors=doctors
                search_term=search_term
                on_search_change=on_search_change
            />

            <main class="container">
                <div class="main-layout">
                    <aside class="sidebar">
                        <FilterPanel
                            filters=filters
                            specialties=specialties
                            on_filter_change=on_filter_change
                        />
                    </aside>

                    <section class="content">
                        <Show when=move || !loading.get()>
                            <p class="results-count" data-testid="results-count">
                                {move || found_label(visible.with(Vec::len))}
                            </p>
                        </Show>
                        <DoctorList doctors=visible loading=loading />
                    </section>
                </div>
            </main>
        </div>
    }
}

/// "N doctors found"
fn found_label(count: usize) -> String {
    format!("{} doctors found", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_label() {
        assert_eq!(found_label(0), "0 doctors found");
        assert_eq!(found_label(12), "12 doctors found");
    }
}
