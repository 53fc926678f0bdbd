//! Doctor Finder CLI
//!
//! 医師データの取得・絞り込み・並び替えを端末から行う。
//! コアロジックは `doctor_finder_common` にある。

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;
