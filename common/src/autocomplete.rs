//! 検索ボックスの候補表示
//!
//! 名前の部分一致（大文字小文字を区別しない）で先頭から最大3件。
//! 関連度による並べ替えは行わない。

use crate::filter::name_matches;
use crate::types::Doctor;

/// 候補の最大件数
pub const MAX_SUGGESTIONS: usize = 3;

/// 入力中の検索語に対する候補を返す
pub fn get_autocomplete_suggestions<'a>(doctors: &'a [Doctor], search_term: &str) -> Vec<&'a Doctor> {
    if search_term.trim().is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|d| name_matches(&d.name, search_term))
        .take(MAX_SUGGESTIONS)
        .collect()
}
