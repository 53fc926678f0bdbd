//! 診療科カタログの抽出
//!
//! レコード群に現れる診療科名を重複除去・辞書順で返す。
//! 入力が無い場合は空リストを返す。

use crate::types::Doctor;
use std::collections::BTreeSet;

/// レコード群から診療科一覧を作成
pub fn get_specialties_list(doctors: Option<&[Doctor]>) -> Vec<String> {
    let Some(doctors) = doctors else {
        return Vec::new();
    };

    doctors
        .iter()
        .flat_map(|d| d.specialities.iter())
        .map(|s| s.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
