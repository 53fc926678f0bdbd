use clap::{Args, Parser, Subcommand};
use doctor_finder_common::{decode_filters, ConsultationType, FilterPatch, FilterState, SortKey};

#[derive(Parser)]
#[command(name = "doctor-finder")]
#[command(about = "医師検索・絞り込み・並び替えツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 医師リストを絞り込み・並び替えて表示
    Search {
        /// データソース（http(s) URL またはJSONファイル）
        #[arg(short = 'S', long)]
        source: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,

        /// 各医師の詳細を表示
        #[arg(short, long)]
        details: bool,
    },

    /// データに含まれる診療科の一覧を表示
    Specialties {
        /// データソース（http(s) URL またはJSONファイル）
        #[arg(short = 'S', long)]
        source: Option<String>,
    },

    /// 名前の検索候補を表示（最大3件）
    Suggest {
        /// 検索語
        #[arg(required = true)]
        term: String,

        /// データソース（http(s) URL またはJSONファイル）
        #[arg(short = 'S', long)]
        source: Option<String>,
    },

    /// 対話的に絞り込み（戻る/進む対応）
    Browse {
        /// データソース（http(s) URL またはJSONファイル）
        #[arg(short = 'S', long)]
        source: Option<String>,

        /// 初期状態のクエリ（例: "search=ali&sort=fees_asc"）
        #[arg(short, long)]
        query: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のデータソースを設定
        #[arg(long)]
        set_data_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// フィルタ指定（クエリ文字列 + 個別オプション）
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// 共有URLのクエリ（例: "?search=ali&specialty=ENT"）
    #[arg(short, long)]
    pub query: Option<String>,

    /// 名前の検索語
    #[arg(short, long)]
    pub search: Option<String>,

    /// 診察方法 (video/clinic)
    #[arg(short, long)]
    pub consultation: Option<ConsultationType>,

    /// 診療科（複数指定可）
    #[arg(long = "specialty")]
    pub specialties: Vec<String>,

    /// 並び順 (fees_asc/fees_desc/experience_desc/experience_asc)
    #[arg(long)]
    pub sort: Option<SortKey>,
}

impl FilterArgs {
    /// クエリを復元し、個別オプションで上書きする
    pub fn to_filter_state(&self) -> FilterState {
        let base = self
            .query
            .as_deref()
            .map(decode_filters)
            .unwrap_or_default();
        base.merged(self.to_patch())
    }

    /// 個別オプションのみの部分更新
    pub fn to_patch(&self) -> FilterPatch {
        FilterPatch {
            search: self.search.clone(),
            consultation_type: self.consultation.map(Some),
            specialties: if self.specialties.is_empty() {
                None
            } else {
                Some(self.specialties.clone())
            },
            sort_by: self.sort.map(Some),
        }
    }
}
