//! Doctor Finder Common Library
//!
//! CLIとWeb(WASM)で共有される型と絞り込み・並び替え・URL同期ロジック

pub mod types;
pub mod error;
pub mod filter;
pub mod sort;
pub mod query;
pub mod specialties;
pub mod autocomplete;
pub mod payload;
pub mod controller;

pub use types::{
    Clinic, ClinicAddress, ConsultationType, Doctor, FilterPatch, FilterState, SortField,
    SortKey, SortOption, SortOrder, Speciality,
};
pub use error::{Error, Result};
pub use filter::{
    filter_doctors, matches_filters, panel_specialties, specialty_test_id, STANDARD_SPECIALTIES,
};
pub use sort::{find_sort_option, parse_experience, parse_fee, sort_doctors, SORT_OPTIONS};
pub use query::{build_url, decode_filters, encode_filters, join_path_and_query};
pub use specialties::get_specialties_list;
pub use autocomplete::{get_autocomplete_suggestions, MAX_SUGGESTIONS};
pub use payload::{normalize_doctors, parse_payload};
pub use controller::{FinderController, HistoryMode, MemoryHistory, ViewStateStore};
