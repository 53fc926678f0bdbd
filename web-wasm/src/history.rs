//! ブラウザ履歴をURL状態ストアとして使う
//!
//! フィルタ変更は `history.replaceState` で反映する（履歴エントリを増やさない）。
//! 戻る/進むは `popstate` で検知し、コントローラの `navigate()` で復元する。

use doctor_finder_common::{join_path_and_query, ViewStateStore};
use wasm_bindgen::JsValue;

/// `window.location` / `window.history` を都度参照するストア
///
/// 状態を持たないため、シグナルに入れても Send + Sync を満たす。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHistory;

impl ViewStateStore for BrowserHistory {
    fn current_query(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn commit(&mut self, query: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let url = join_path_and_query(&path, query);

        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            tracing::error!(error = ?e, "failed to update url");
        }
    }
}
