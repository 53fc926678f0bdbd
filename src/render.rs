//! 端末向けの表示整形

use doctor_finder_common::{build_url, Doctor, FilterState};

/// 対応している診察方法の表示
pub fn consultation_modes(doctor: &Doctor) -> String {
    let modes: Vec<&str> = doctor
        .consultation_types()
        .iter()
        .map(|c| c.label())
        .collect();
    if modes.is_empty() {
        "-".to_string()
    } else {
        modes.join(", ")
    }
}

/// 1件を1行で表示
pub fn doctor_line(index: usize, doctor: &Doctor) -> String {
    format!(
        "{:>3}. {} ({}) | {} | {} | {}",
        index,
        doctor.name,
        doctor.primary_speciality().unwrap_or("-"),
        if doctor.experience.is_empty() { "-" } else { doctor.experience.as_str() },
        if doctor.fees.is_empty() { "-" } else { doctor.fees.as_str() },
        consultation_modes(doctor),
    )
}

/// 詳細表示（クリニック・言語を含む）
pub fn doctor_details(doctor: &Doctor) -> Vec<String> {
    let mut lines = vec![format!("{} [{}]", doctor.name, doctor.name_initials)];

    if !doctor.specialities.is_empty() {
        lines.push(format!("  診療科: {}", doctor.speciality_names()));
    }
    if let Some(intro) = doctor.introduction() {
        lines.push(format!("  紹介: {}", intro));
    }
    if !doctor.languages.is_empty() {
        lines.push(format!("  言語: {}", doctor.languages.join(", ")));
    }
    lines.push(format!("  診察方法: {}", consultation_modes(doctor)));
    if let Some(clinic) = &doctor.clinic {
        lines.push(format!("  クリニック: {}", clinic.name));
        if let Some(address) = doctor.clinic_address_line() {
            lines.push(format!("  住所: {}", address));
        }
    }
    lines
}

/// 現在のフィルタ状態の要約
pub fn filter_summary(filters: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push(format!("検索: \"{}\"", filters.search));
    }
    if let Some(consultation) = filters.consultation_type {
        parts.push(format!("診察: {}", consultation.label()));
    }
    if !filters.specialties.is_empty() {
        parts.push(format!("診療科: {}", filters.specialties.join(", ")));
    }
    if let Some(sort_by) = filters.sort_by {
        parts.push(format!("並び順: {}", sort_by.label()));
    }
    if parts.is_empty() {
        "フィルタなし".to_string()
    } else {
        parts.join(" / ")
    }
}

/// 件数ヘッダ
pub fn found_header(count: usize) -> String {
    format!("{} doctors found", count)
}

/// 共有用URL
pub fn share_url(base_path: &str, filters: &FilterState) -> String {
    build_url(base_path, filters)
}
