//! 並び替えロジック（CLI/WASM共通）
//!
//! 料金・経験年数は表示用文字列のため、比較時にパースする。
//! パースできない値は昇順・降順どちらでも末尾に置く。

use crate::types::{Doctor, SortField, SortKey, SortOption, SortOrder};
use std::cmp::Ordering;

/// 並び替えオプションの固定カタログ
pub static SORT_OPTIONS: [SortOption; 4] = [
    SortOption {
        value: "fees_asc",
        label: "Fees: Low to High",
        field: SortField::Fees,
        order: SortOrder::Asc,
    },
    SortOption {
        value: "fees_desc",
        label: "Fees: High to Low",
        field: SortField::Fees,
        order: SortOrder::Desc,
    },
    SortOption {
        value: "experience_desc",
        label: "Experience: Most to Least",
        field: SortField::Experience,
        order: SortOrder::Desc,
    },
    SortOption {
        value: "experience_asc",
        label: "Experience: Least to Most",
        field: SortField::Experience,
        order: SortOrder::Asc,
    },
];

/// 識別子からカタログの項目を検索
pub fn find_sort_option(value: &str) -> Option<&'static SortOption> {
    SORT_OPTIONS.iter().find(|option| option.value == value)
}

impl SortKey {
    /// カタログの対応項目
    pub fn option(&self) -> &'static SortOption {
        match self {
            SortKey::FeesAsc => &SORT_OPTIONS[0],
            SortKey::FeesDesc => &SORT_OPTIONS[1],
            SortKey::ExperienceDesc => &SORT_OPTIONS[2],
            SortKey::ExperienceAsc => &SORT_OPTIONS[3],
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        self.option().label
    }
}

/// 料金文字列をパース（数字以外を除去して整数化）
///
/// "₹500" → Some(500), "₹ 1,200" → Some(1200), "Free" → None
pub fn parse_fee(fees: &str) -> Option<u64> {
    let digits: String = fees.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// 経験年数文字列をパース（先頭の整数部分のみ）
///
/// "13 Years of experience" → Some(13), "  -2y" → Some(-2), "Senior" → None
pub fn parse_experience(experience: &str) -> Option<i64> {
    let trimmed = experience.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().ok().map(|n| sign * n)
}

/// 比較キー（料金の u64 と経験年数の i64 を欠落なく収める）
fn sort_value(doctor: &Doctor, field: SortField) -> Option<i128> {
    match field {
        SortField::Fees => parse_fee(&doctor.fees).map(i128::from),
        SortField::Experience => parse_experience(&doctor.experience).map(i128::from),
    }
}

/// 2件を比較（パース不能な値は順序に関係なく後ろ）
fn compare(a: Option<i128>, b: Option<i128>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(&b),
            SortOrder::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// オプションに従って並び替えた新しいリストを返す（安定ソート）
pub fn sort_by_option(doctors: &[Doctor], option: &SortOption) -> Vec<Doctor> {
    let mut keyed: Vec<(Option<i128>, &Doctor)> = doctors
        .iter()
        .map(|d| (sort_value(d, option.field), d))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare(*a, *b, option.order));
    keyed.into_iter().map(|(_, d)| d.clone()).collect()
}

/// 識別子で並び替え
///
/// 未知・空の識別子は入力順のまま返す（エラーにしない）。
pub fn sort_doctors(doctors: &[Doctor], sort_by: &str) -> Vec<Doctor> {
    match find_sort_option(sort_by) {
        Some(option) => sort_by_option(doctors, option),
        None => doctors.to_vec(),
    }
}
