//! 医師データとフィルタ状態の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Doctor: 外部データソースから受け取る医師レコード
//! - FilterState: 検索・絞り込み・並び替えの現在値（URLと同期）
//! - FilterPatch: FilterStateへの部分更新

use serde::{Deserialize, Deserializer, Serialize};

/// `null` を既定値として扱うデシリアライザ
///
/// 外部データは欠損や `null` を含むことがあるため、
/// レコード単位でエラーにせず空値に倒す。
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 診療科
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Speciality {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

impl Speciality {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// クリニック住所
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicAddress {
    #[serde(deserialize_with = "null_as_default")]
    pub locality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
}

/// クリニック
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clinic {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: ClinicAddress,
}

/// 医師レコード
///
/// `fees` と `experience` は表示用文字列のまま保持する。
/// 数値比較が必要な箇所（並び替え）でのみ防御的にパースする。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doctor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name_initials: String,

    pub photo: Option<String>,

    pub doctor_introduction: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub specialities: Vec<Speciality>,

    #[serde(deserialize_with = "null_as_default")]
    pub fees: String,              // 例: "₹500"

    #[serde(deserialize_with = "null_as_default")]
    pub experience: String,        // 例: "13 Years of experience"

    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,

    pub clinic: Option<Clinic>,

    #[serde(deserialize_with = "null_as_default")]
    pub video_consult: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub in_clinic: bool,
}

impl Doctor {
    /// 先頭の診療科（カード表示用）
    pub fn primary_speciality(&self) -> Option<&str> {
        self.specialities.first().map(|s| s.name.as_str())
    }

    /// 診療科名をカンマ区切りで連結
    pub fn speciality_names(&self) -> String {
        self.specialities
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 写真URL（空文字は写真なし扱い）
    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref().filter(|p| !p.trim().is_empty())
    }

    /// 紹介文（空文字は未設定扱い）
    pub fn introduction(&self) -> Option<&str> {
        self.doctor_introduction
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// 対応している診察方法（Video → Clinic の順）
    pub fn consultation_types(&self) -> Vec<ConsultationType> {
        ConsultationType::ALL
            .into_iter()
            .filter(|c| c.offered_by(self))
            .collect()
    }

    /// クリニック住所の1行表示: "address_line1, locality"
    pub fn clinic_address_line(&self) -> Option<String> {
        let address = &self.clinic.as_ref()?.address;
        let parts: Vec<&str> = [address.address_line1.as_str(), address.locality.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// 診察方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Video,
    Clinic,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 2] = [ConsultationType::Video, ConsultationType::Clinic];

    /// URLトークン
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::Video => "video",
            ConsultationType::Clinic => "clinic",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::Video => "Video Consult",
            ConsultationType::Clinic => "In Clinic",
        }
    }

    /// URLトークンから変換（既知の2値以外は None）
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "video" => Some(ConsultationType::Video),
            "clinic" => Some(ConsultationType::Clinic),
            _ => None,
        }
    }

    /// 医師がこの診察方法に対応しているか
    pub fn offered_by(&self, doctor: &Doctor) -> bool {
        match self {
            ConsultationType::Video => doctor.video_consult,
            ConsultationType::Clinic => doctor.in_clinic,
        }
    }
}

impl std::str::FromStr for ConsultationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(&s.to_lowercase())
            .ok_or_else(|| format!("Unknown consultation type: {}. Use video or clinic", s))
    }
}

impl std::fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 並び替え対象フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Fees,
    Experience,
}

/// 並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// 並び替えキー（カタログの4項目に対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    FeesAsc,
    FeesDesc,
    ExperienceDesc,
    ExperienceAsc,
}

impl SortKey {
    /// URLトークン
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FeesAsc => "fees_asc",
            SortKey::FeesDesc => "fees_desc",
            SortKey::ExperienceDesc => "experience_desc",
            SortKey::ExperienceAsc => "experience_asc",
        }
    }

    /// URLトークンから変換（カタログ外は None）
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fees_asc" => Some(SortKey::FeesAsc),
            "fees_desc" => Some(SortKey::FeesDesc),
            "experience_desc" => Some(SortKey::ExperienceDesc),
            "experience_asc" => Some(SortKey::ExperienceAsc),
            _ => None,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(&s.to_lowercase()).ok_or_else(|| {
            format!(
                "Unknown sort key: {}. Use fees_asc, fees_desc, experience_desc, or experience_asc",
                s
            )
        })
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 並び替えオプション（固定カタログの1項目）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub field: SortField,
    pub order: SortOrder,
}

/// フィルタ状態
///
/// URLクエリと1対1で対応する。`specialties` は選択順を保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search: String,
    pub consultation_type: Option<ConsultationType>,
    pub specialties: Vec<String>,
    pub sort_by: Option<SortKey>,
}

impl FilterState {
    /// 部分更新をマージ（指定されたフィールドのみ上書き）
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(consultation_type) = patch.consultation_type {
            self.consultation_type = consultation_type;
        }
        if let Some(specialties) = patch.specialties {
            self.specialties = specialties;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }

    /// マージ済みの新しい状態を返す
    pub fn merged(mut self, patch: FilterPatch) -> Self {
        self.merge(patch);
        self
    }

    /// 診察方法の切り替え（選択中の値を再選択すると解除）
    pub fn toggle_consultation(&self, value: ConsultationType) -> FilterPatch {
        if self.consultation_type == Some(value) {
            FilterPatch::consultation(None)
        } else {
            FilterPatch::consultation(Some(value))
        }
    }

    /// 診療科の切り替え（選択済みなら除外、未選択なら末尾に追加）
    pub fn toggle_specialty(&self, specialty: &str) -> FilterPatch {
        let updated = if self.specialties.iter().any(|s| s == specialty) {
            self.specialties
                .iter()
                .filter(|s| s.as_str() != specialty)
                .cloned()
                .collect()
        } else {
            let mut updated = self.specialties.clone();
            updated.push(specialty.to_string());
            updated
        };
        FilterPatch::specialties(updated)
    }

    /// 診療科が選択されているか
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

/// フィルタ状態への部分更新
///
/// `None` のフィールドは変更しない。
/// 診察方法と並び替えは「解除」を表せるよう `Option<Option<_>>` で持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub consultation_type: Option<Option<ConsultationType>>,
    pub specialties: Option<Vec<String>>,
    pub sort_by: Option<Option<SortKey>>,
}

impl FilterPatch {
    pub fn search(value: impl Into<String>) -> Self {
        Self {
            search: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn consultation(value: Option<ConsultationType>) -> Self {
        Self {
            consultation_type: Some(value),
            ..Default::default()
        }
    }

    pub fn specialties(value: Vec<String>) -> Self {
        Self {
            specialties: Some(value),
            ..Default::default()
        }
    }

    pub fn sort_by(value: Option<SortKey>) -> Self {
        Self {
            sort_by: Some(value),
            ..Default::default()
        }
    }
}
