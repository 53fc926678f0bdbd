//! 対話式の検索セッション
//!
//! `FinderController` をメモリ上の履歴（積み上げモード）で動かし、
//! ブラウザの戻る/進むと同じ操作を端末で再現する。

use crate::error::Result;
use crate::render;
use dialoguer::{Input, MultiSelect, Select};
use doctor_finder_common::{
    ConsultationType, FilterPatch, FinderController, HistoryMode, MemoryHistory, SortKey,
    SORT_OPTIONS,
};
use serde_json::Value;

/// 一覧に表示する最大件数
const PAGE_SIZE: usize = 10;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Search,
    Consultation,
    Specialties,
    Sort,
    Details,
    Back,
    Forward,
    Quit,
}

impl BrowseAction {
    pub const ALL: [BrowseAction; 8] = [
        BrowseAction::Search,
        BrowseAction::Consultation,
        BrowseAction::Specialties,
        BrowseAction::Sort,
        BrowseAction::Details,
        BrowseAction::Back,
        BrowseAction::Forward,
        BrowseAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::Search => "名前で検索",
            BrowseAction::Consultation => "診察方法",
            BrowseAction::Specialties => "診療科",
            BrowseAction::Sort => "並び順",
            BrowseAction::Details => "詳細を表示",
            BrowseAction::Back => "戻る",
            BrowseAction::Forward => "進む",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 履歴の状態に応じて選べるアクション（戻れない/進めないときは出さない）
pub fn available_actions(can_go_back: bool, can_go_forward: bool) -> Vec<BrowseAction> {
    BrowseAction::ALL
        .into_iter()
        .filter(|action| match action {
            BrowseAction::Back => can_go_back,
            BrowseAction::Forward => can_go_forward,
            _ => true,
        })
        .collect()
}

/// 検索語を入力どおりに反映し、候補の名前を返す
pub fn apply_search(controller: &mut FinderController<MemoryHistory>, term: String) -> Vec<String> {
    let suggestions = controller
        .suggestions(&term)
        .iter()
        .map(|d| d.name.clone())
        .collect();
    controller.set_filters(FilterPatch::search(term));
    suggestions
}

/// 複数選択の結果を選択順を保って反映
///
/// 既存の選択のうち残ったものはその順のまま、新たに選ばれたものは末尾に追加する。
pub fn merge_selection(current: &[String], chosen: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = current
        .iter()
        .filter(|s| chosen.contains(s))
        .cloned()
        .collect();
    for s in chosen {
        if !merged.contains(s) {
            merged.push(s.clone());
        }
    }
    merged
}

/// 対話セッションを開始
pub fn run_browse(payload: std::result::Result<Value, String>, initial_query: &str, base_path: &str) -> Result<()> {
    let history = MemoryHistory::new(initial_query).with_mode(HistoryMode::Push);
    let mut controller = FinderController::new(history);
    controller.receive_doctors(payload);

    loop {
        print_results(&controller, base_path);

        let actions = available_actions(
            controller.store().can_go_back(),
            controller.store().can_go_forward(),
        );
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let selection = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[selection] {
            BrowseAction::Search => {
                let term: String = Input::new()
                    .with_prompt("名前（空で解除）")
                    .with_initial_text(controller.filters().search.clone())
                    .allow_empty(true)
                    .interact_text()?;
                let suggestions = apply_search(&mut controller, term);
                if !suggestions.is_empty() {
                    println!("  候補: {}", suggestions.join(" / "));
                }
            }
            BrowseAction::Consultation => {
                let items = ["指定なし", ConsultationType::Video.label(), ConsultationType::Clinic.label()];
                let current = match controller.filters().consultation_type {
                    None => 0,
                    Some(ConsultationType::Video) => 1,
                    Some(ConsultationType::Clinic) => 2,
                };
                let choice = Select::new()
                    .with_prompt("診察方法")
                    .items(&items)
                    .default(current)
                    .interact()?;
                let value = match choice {
                    1 => Some(ConsultationType::Video),
                    2 => Some(ConsultationType::Clinic),
                    _ => None,
                };
                controller.set_filters(FilterPatch::consultation(value));
            }
            BrowseAction::Specialties => {
                let catalog = controller.specialties().to_vec();
                if catalog.is_empty() {
                    println!("診療科がありません");
                    continue;
                }
                let checked: Vec<bool> = catalog
                    .iter()
                    .map(|s| controller.filters().has_specialty(s))
                    .collect();
                let picked = MultiSelect::new()
                    .with_prompt("診療科（スペースで選択）")
                    .items(&catalog)
                    .defaults(&checked)
                    .interact()?;
                let chosen: Vec<String> = picked.into_iter().map(|i| catalog[i].clone()).collect();
                let merged = merge_selection(&controller.filters().specialties, &chosen);
                controller.set_filters(FilterPatch::specialties(merged));
            }
            BrowseAction::Sort => {
                let mut items = vec!["指定なし"];
                items.extend(SORT_OPTIONS.iter().map(|o| o.label));
                let current = controller
                    .filters()
                    .sort_by
                    .and_then(|key| SORT_OPTIONS.iter().position(|o| o.value == key.as_str()))
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let choice = Select::new()
                    .with_prompt("並び順")
                    .items(&items)
                    .default(current)
                    .interact()?;
                let value = choice
                    .checked_sub(1)
                    .and_then(|i| SORT_OPTIONS.get(i))
                    .and_then(|o| SortKey::from_token(o.value));
                controller.set_filters(FilterPatch::sort_by(value));
            }
            BrowseAction::Details => {
                let visible = controller.visible();
                if visible.is_empty() {
                    continue;
                }
                let names: Vec<&str> = visible.iter().map(|d| d.name.as_str()).collect();
                let choice = Select::new()
                    .with_prompt("医師を選択")
                    .items(&names)
                    .default(0)
                    .interact()?;
                println!();
                for line in render::doctor_details(&visible[choice]) {
                    println!("{}", line);
                }
            }
            BrowseAction::Back => {
                if controller.store_mut().back() {
                    controller.navigate();
                } else {
                    println!("これ以上戻れません");
                }
            }
            BrowseAction::Forward => {
                if controller.store_mut().forward() {
                    controller.navigate();
                } else {
                    println!("これ以上進めません");
                }
            }
            BrowseAction::Quit => break,
        }
    }

    println!("\n共有URL: {}", render::share_url(base_path, controller.filters()));
    Ok(())
}

fn print_results(controller: &FinderController<MemoryHistory>, base_path: &str) {
    let (current, total) = controller.store().position();
    println!(
        "\n--- {} --- [履歴 {}/{}]",
        render::filter_summary(controller.filters()),
        current,
        total
    );
    println!("{}", render::found_header(controller.visible_count()));

    if controller.visible().is_empty() {
        println!("No doctors found matching your criteria.");
        println!("Try adjusting your filters or search term.");
    }

    for (i, doctor) in controller.visible().iter().take(PAGE_SIZE).enumerate() {
        println!("{}", render::doctor_line(i + 1, doctor));
    }
    if controller.visible_count() > PAGE_SIZE {
        println!("  ...他 {}件", controller.visible_count() - PAGE_SIZE);
    }
    println!("URL: {}\n", render::share_url(base_path, controller.filters()));
}
