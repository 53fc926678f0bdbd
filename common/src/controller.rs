//! アプリケーション状態コントローラ
//!
//! 医師リスト・フィルタ状態・表示リストの唯一の所有者。
//! URL（ブラウザ履歴）への書き込みは `ViewStateStore` に切り出し、
//! 絞り込み・並び替え・URL変換の純粋関数とは分離する。
//!
//! 処理の流れ:
//! 1. `new`: ストアの現在のクエリからフィルタ状態を復元
//! 2. `receive_doctors`: データ受信（失敗時は空リスト）→ 診療科カタログ・表示リストを再計算
//! 3. `set_filters`: 部分更新をマージ → 表示リスト再計算 → URLへ書き込み
//! 4. `navigate`: 戻る/進む → URLから復元 → 表示リスト再計算（URLへは書き戻さない）

use crate::autocomplete::get_autocomplete_suggestions;
use crate::filter::filter_doctors;
use crate::payload::normalize_doctors;
use crate::query::{decode_filters, encode_filters};
use crate::sort::sort_by_option;
use crate::specialties::get_specialties_list;
use crate::types::{Doctor, FilterPatch, FilterState};
use serde_json::Value;
use std::fmt::Display;

/// URLに保持される表示状態の読み書き
pub trait ViewStateStore {
    /// 現在のクエリ文字列（先頭の '?' の有無は問わない）
    fn current_query(&self) -> String;

    /// フィルタ状態を反映したクエリを書き込む
    fn commit(&mut self, query: &str);
}

/// 履歴への書き込み方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// 現在のエントリを置き換える（履歴を増やさない）
    #[default]
    Replace,
    /// 新しいエントリを積む
    Push,
}

/// メモリ上の履歴（CLIの対話モードとテスト用）
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    mode: HistoryMode,
}

impl MemoryHistory {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_query.into()],
            cursor: 0,
            mode: HistoryMode::Replace,
        }
    }

    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    /// 新しいクエリへ遷移（進む履歴は破棄）
    pub fn push(&mut self, query: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.into());
        self.cursor = self.entries.len() - 1;
    }

    /// 戻る（移動できなければ false）
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// 進む（移動できなければ false）
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// 現在位置（1始まり）と履歴エントリ数
    pub fn position(&self) -> (usize, usize) {
        (self.cursor + 1, self.entries.len())
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ViewStateStore for MemoryHistory {
    fn current_query(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }

    fn commit(&mut self, query: &str) {
        match self.mode {
            HistoryMode::Replace => {
                if let Some(entry) = self.entries.get_mut(self.cursor) {
                    *entry = query.to_string();
                }
            }
            HistoryMode::Push => {
                if self.current_query() != query {
                    self.push(query);
                }
            }
        }
    }
}

/// 検索画面の状態コントローラ
#[derive(Debug, Clone)]
pub struct FinderController<S> {
    store: S,
    doctors: Vec<Doctor>,
    filters: FilterState,
    visible: Vec<Doctor>,
    specialties: Vec<String>,
    loading: bool,
}

impl<S: ViewStateStore> FinderController<S> {
    /// ストアの現在のクエリからフィルタ状態を復元して初期化
    pub fn new(store: S) -> Self {
        let filters = decode_filters(&store.current_query());
        tracing::debug!(?filters, "filters hydrated from url");
        Self {
            store,
            doctors: Vec::new(),
            filters,
            visible: Vec::new(),
            specialties: Vec::new(),
            loading: true,
        }
    }

    /// データソースの取得結果を受け取る
    ///
    /// 失敗はログのみで空リストに倒す（画面はエラーにしない）。
    pub fn receive_doctors<E: Display>(&mut self, result: std::result::Result<Value, E>) {
        let doctors = match result {
            Ok(payload) => normalize_doctors(payload),
            Err(e) => {
                tracing::error!(error = %e, "error fetching doctors");
                Vec::new()
            }
        };
        self.set_doctors(doctors);
    }

    /// 正規化済みの医師リストを設定
    pub fn set_doctors(&mut self, doctors: Vec<Doctor>) {
        tracing::info!(count = doctors.len(), "doctors loaded");
        self.doctors = doctors;
        self.specialties = get_specialties_list(Some(self.doctors.as_slice()));
        self.loading = false;
        self.recompute();
    }

    /// フィルタ状態を部分更新（指定フィールドのみ上書き）し、URLへ反映
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.filters.merge(patch);
        self.recompute();
        let query = encode_filters(&self.filters);
        tracing::debug!(%query, "filters committed");
        self.store.commit(&query);
    }

    /// 戻る/進むの後にURLからフィルタ状態を復元
    ///
    /// URLへは書き戻さない（復元→書き込み→遷移のループを防ぐ）。
    /// 状態が変化した場合は true。
    pub fn navigate(&mut self) -> bool {
        let restored = decode_filters(&self.store.current_query());
        if restored == self.filters {
            return false;
        }
        self.filters = restored;
        self.recompute();
        true
    }

    /// 絞り込み → 並び替えの順で表示リストを再計算
    fn recompute(&mut self) {
        let filtered = filter_doctors(&self.doctors, &self.filters);
        self.visible = match self.filters.sort_by {
            Some(key) => sort_by_option(&filtered, key.option()),
            None => filtered,
        };
    }

    /// 検索語に対する候補（最大3件）
    pub fn suggestions(&self, search_term: &str) -> Vec<&Doctor> {
        get_autocomplete_suggestions(&self.doctors, search_term)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn visible(&self) -> &[Doctor] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 履歴操作（戻る/進む）用
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConsultationType, SortKey, Speciality};
    use serde_json::json;

    fn alice_and_bob() -> Value {
        json!([
            {
                "id": "1",
                "name": "Alice",
                "fees": "₹300",
                "experience": "5 Years of experience",
                "specialities": [{"name": "Dentist"}],
                "video_consult": true,
                "in_clinic": false
            },
            {
                "id": "2",
                "name": "Bob",
                "fees": "₹100",
                "experience": "10 Years of experience",
                "specialities": [{"name": "Cardiologist"}],
                "video_consult": false,
                "in_clinic": true
            }
        ])
    }

    fn loaded(query: &str) -> FinderController<MemoryHistory> {
        let mut controller = FinderController::new(MemoryHistory::new(query));
        controller.receive_doctors::<String>(Ok(alice_and_bob()));
        controller
    }

    fn visible_names<S: ViewStateStore>(controller: &FinderController<S>) -> Vec<String> {
        controller.visible().iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_starts_loading_with_filters_from_url() {
        let controller = FinderController::new(MemoryHistory::new("?search=ali&sort=fees_desc"));
        assert!(controller.is_loading());
        assert_eq!(controller.filters().search, "ali");
        assert_eq!(controller.filters().sort_by, Some(SortKey::FeesDesc));
        assert!(controller.visible().is_empty());
    }

    #[test]
    fn test_end_to_end_sort_and_search() {
        let mut controller = loaded("");
        assert!(!controller.is_loading());
        assert_eq!(visible_names(&controller), vec!["Alice", "Bob"]);

        controller.set_filters(FilterPatch::sort_by(Some(SortKey::FeesAsc)));
        assert_eq!(visible_names(&controller), vec!["Bob", "Alice"]);

        controller.set_filters(FilterPatch::sort_by(Some(SortKey::ExperienceDesc)));
        assert_eq!(visible_names(&controller), vec!["Bob", "Alice"]);

        controller.set_filters(FilterPatch {
            search: Some("ali".to_string()),
            sort_by: Some(None),
            ..Default::default()
        });
        assert_eq!(visible_names(&controller), vec!["Alice"]);
    }

    #[test]
    fn test_url_hydration_applies_on_arrival() {
        let controller = loaded("search=bob");
        assert_eq!(visible_names(&controller), vec!["Bob"]);
        assert_eq!(controller.visible_count(), 1);
    }

    #[test]
    fn test_set_filters_commits_url() {
        let mut controller = loaded("");
        controller.set_filters(FilterPatch::consultation(Some(ConsultationType::Clinic)));
        controller.set_filters(FilterPatch::specialties(vec![
            "Cardiologist".to_string(),
            "Dentist".to_string(),
        ]));
        assert_eq!(
            controller.store().current_query(),
            "consultation=clinic&specialty=Cardiologist&specialty=Dentist"
        );
        assert_eq!(visible_names(&controller), vec!["Bob"]);
        // 置き換えモードでは履歴は増えない
        assert_eq!(controller.store().position(), (1, 1));
        assert!(!controller.store().can_go_back());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut controller = loaded("search=b&consultation=clinic");
        controller.set_filters(FilterPatch::sort_by(Some(SortKey::FeesAsc)));
        let filters = controller.filters();
        assert_eq!(filters.search, "b");
        assert_eq!(filters.consultation_type, Some(ConsultationType::Clinic));
        assert_eq!(filters.sort_by, Some(SortKey::FeesAsc));
    }

    #[test]
    fn test_fetch_failure_degrades_to_empty() {
        let mut controller = FinderController::new(MemoryHistory::default());
        controller.receive_doctors::<&str>(Err("network down"));
        assert!(!controller.is_loading());
        assert!(controller.doctors().is_empty());
        assert!(controller.visible().is_empty());
        assert!(controller.specialties().is_empty());
    }

    #[test]
    fn test_single_object_and_null_payloads() {
        let mut controller = FinderController::new(MemoryHistory::default());
        controller.receive_doctors::<String>(Ok(json!({"id": "1", "name": "Solo"})));
        assert_eq!(visible_names(&controller), vec!["Solo"]);

        controller.receive_doctors::<String>(Ok(Value::Null));
        assert!(controller.visible().is_empty());
    }

    #[test]
    fn test_specialty_catalog_recomputed() {
        let controller = loaded("");
        assert_eq!(controller.specialties(), &["Cardiologist".to_string(), "Dentist".to_string()]);
    }

    #[test]
    fn test_navigation_restores_without_committing() {
        let history = MemoryHistory::new("").with_mode(HistoryMode::Push);
        let mut controller = FinderController::new(history);
        controller.set_doctors(vec![
            Doctor {
                id: "1".to_string(),
                name: "Alice".to_string(),
                specialities: vec![Speciality::new("Dentist")],
                ..Default::default()
            },
            Doctor {
                id: "2".to_string(),
                name: "Bob".to_string(),
                ..Default::default()
            },
        ]);

        controller.set_filters(FilterPatch::search("ali"));
        controller.set_filters(FilterPatch::search("bob"));
        assert_eq!(controller.store().position(), (3, 3));

        assert!(controller.store_mut().back());
        assert!(controller.navigate());
        assert_eq!(controller.filters().search, "ali");
        assert_eq!(visible_names(&controller), vec!["Alice"]);
        // 復元時にURLを書き戻さないので、進む履歴が残っている
        assert_eq!(controller.store().position(), (2, 3));
        assert!(controller.store().can_go_forward());

        assert!(controller.store_mut().forward());
        assert!(controller.navigate());
        assert_eq!(visible_names(&controller), vec!["Bob"]);

        // 変化がなければ false
        assert!(!controller.navigate());
    }

    #[test]
    fn test_suggestions_use_full_collection() {
        let mut controller = loaded("");
        controller.set_filters(FilterPatch::consultation(Some(ConsultationType::Video)));
        let suggestions = controller.suggestions("bo");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Bob");
    }

    #[test]
    fn test_memory_history_push_truncates_forward() {
        let mut history = MemoryHistory::new("a");
        history.push("b");
        history.push("c");
        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        history.push("d");
        assert_eq!(history.position(), (2, 2));
        assert!(history.can_go_back());
        assert_eq!(history.current_query(), "d");
        assert!(!history.forward());
    }
}
