//! 絞り込みロジック（CLI/WASM共通）
//!
//! 検索語・診察方法・診療科の3条件をANDで評価する。
//! 未設定の条件はすべてのレコードを通す。

use crate::types::{Doctor, FilterState};

/// 診療科フィルタの標準リスト（フィルタパネルに表示する24項目）
pub const STANDARD_SPECIALTIES: &[&str] = &[
    "General Physician",
    "Dentist",
    "Dermatologist",
    "Paediatrician",
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian-Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
    "Ayurveda",
    "Homeopath",
];

/// 名前に検索語が含まれるか（大文字小文字を区別しない）
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// 1件のレコードがフィルタ条件をすべて満たすか
pub fn matches_filters(doctor: &Doctor, filters: &FilterState) -> bool {
    if !filters.search.is_empty() && !name_matches(&doctor.name, &filters.search) {
        return false;
    }

    if let Some(consultation) = filters.consultation_type {
        if !consultation.offered_by(doctor) {
            return false;
        }
    }

    if !filters.specialties.is_empty() {
        let has_specialty = doctor
            .specialities
            .iter()
            .any(|s| filters.specialties.iter().any(|selected| *selected == s.name));
        if !has_specialty {
            return false;
        }
    }

    true
}

/// フィルタ条件に一致するレコードを入力順のまま返す
pub fn filter_doctors(doctors: &[Doctor], filters: &FilterState) -> Vec<Doctor> {
    doctors
        .iter()
        .filter(|d| matches_filters(d, filters))
        .cloned()
        .collect()
}

/// フィルタパネルに並べる診療科
///
/// 標準リストを先頭にその順で並べ、データにだけ現れる診療科を後ろに追加する。
pub fn panel_specialties(catalog: &[String]) -> Vec<String> {
    let mut items: Vec<String> = STANDARD_SPECIALTIES.iter().map(|s| s.to_string()).collect();
    for specialty in catalog {
        if !items.iter().any(|s| s == specialty) {
            items.push(specialty.clone());
        }
    }
    items
}

/// 診療科名をDOMのtest id用に変換（英数字以外を '-' に置換）
pub fn specialty_test_id(specialty: &str) -> String {
    specialty
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConsultationType, Speciality};

    fn doctor(id: &str, name: &str, specialities: &[&str], video: bool, clinic: bool) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialities: specialities.iter().map(|s| Speciality::new(*s)).collect(),
            video_consult: video,
            in_clinic: clinic,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Doctor> {
        vec![
            doctor("1", "Dr. Alice Menon", &["Dentist"], true, false),
            doctor("2", "Dr. Bob Iyer", &["Cardiologist", "General Physician"], false, true),
            doctor("3", "Dr. Carol Alvarez", &["ENT"], true, true),
            doctor("4", "Dr. Dinesh Kumar", &[], false, false),
        ]
    }

    fn ids(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_all_in_order() {
        let doctors = sample();
        let result = filter_doctors(&doctors, &FilterState::default());
        assert_eq!(result, doctors);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let doctors = sample();
        let filters = FilterState {
            search: "AL".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors(&doctors, &filters)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_without_match() {
        let filters = FilterState {
            search: "zzz".to_string(),
            ..Default::default()
        };
        assert!(filter_doctors(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_consultation_video() {
        let filters = FilterState {
            consultation_type: Some(ConsultationType::Video),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors(&sample(), &filters)), vec!["1", "3"]);
    }

    #[test]
    fn test_consultation_clinic() {
        let filters = FilterState {
            consultation_type: Some(ConsultationType::Clinic),
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors(&sample(), &filters)), vec!["2", "3"]);
    }

    #[test]
    fn test_specialties_any_match() {
        let selected = vec!["General Physician".to_string(), "ENT".to_string()];
        let filters = FilterState {
            specialties: selected.clone(),
            ..Default::default()
        };
        let result = filter_doctors(&sample(), &filters);
        assert_eq!(ids(&result), vec!["2", "3"]);

        // 出力はすべて選択中の診療科を1つ以上持つ
        for d in &result {
            assert!(d.specialities.iter().any(|s| selected.contains(&s.name)));
        }
    }

    #[test]
    fn test_specialty_match_is_exact() {
        let filters = FilterState {
            specialties: vec!["dentist".to_string()],
            ..Default::default()
        };
        assert!(filter_doctors(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filters = FilterState {
            search: "dr.".to_string(),
            consultation_type: Some(ConsultationType::Video),
            specialties: vec!["ENT".to_string(), "Cardiologist".to_string()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_doctors(&sample(), &filters)), vec!["3"]);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let doctors = sample();
        let before = doctors.clone();
        let filters = FilterState {
            search: "bob".to_string(),
            ..Default::default()
        };
        let _ = filter_doctors(&doctors, &filters);
        assert_eq!(doctors, before);
    }

    #[test]
    fn test_specialty_test_id() {
        assert_eq!(specialty_test_id("General Physician"), "General-Physician");
        assert_eq!(specialty_test_id("Dietitian-Nutritionist"), "Dietitian-Nutritionist");
        assert_eq!(specialty_test_id("ENT"), "ENT");
    }

    #[test]
    fn test_panel_specialties_appends_unknown() {
        let catalog = vec!["ENT".to_string(), "Veterinarian".to_string()];
        let items = panel_specialties(&catalog);
        assert_eq!(items.len(), STANDARD_SPECIALTIES.len() + 1);
        assert_eq!(items[0], "General Physician");
        assert_eq!(items.last().map(String::as_str), Some("Veterinarian"));
    }

    #[test]
    fn test_standard_specialties_count() {
        assert_eq!(STANDARD_SPECIALTIES.len(), 24);
    }
}
