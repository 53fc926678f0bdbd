use clap::Parser;
use doctor_finder::{browse, cli, config, error, fetch, render};
use cli::{Cli, Commands};
use config::Config;
use doctor_finder_common::{
    get_autocomplete_suggestions, normalize_doctors, FinderController, MemoryHistory,
};
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// 取得失敗は文字列にして返す（呼び出し側で空リストに倒す）
async fn fetch_for_controller(source: &str, config: &Config) -> std::result::Result<serde_json::Value, String> {
    fetch::fetch_payload(source, config.timeout_seconds)
        .await
        .map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Search { source, filters, json, details } => {
            let source = config.resolve_source(source.as_deref())?;
            let state = filters.to_filter_state();
            let query = doctor_finder_common::encode_filters(&state);

            let mut controller = FinderController::new(MemoryHistory::new(query));
            controller.receive_doctors(fetch_for_controller(&source, &config).await);

            if json {
                println!("{}", serde_json::to_string_pretty(controller.visible())?);
                return Ok(());
            }

            println!("🩺 doctor-finder - 検索\n");
            println!("{}", render::filter_summary(controller.filters()));
            println!("{}\n", render::found_header(controller.visible_count()));

            if controller.visible().is_empty() {
                println!("No doctors found matching your criteria.");
                println!("Try adjusting your filters or search term.");
            }

            for (i, doctor) in controller.visible().iter().enumerate() {
                if details {
                    for line in render::doctor_details(doctor) {
                        println!("{}", line);
                    }
                    println!();
                } else {
                    println!("{}", render::doctor_line(i + 1, doctor));
                }
            }

            println!("\n共有URL: {}", render::share_url(&config.base_path, controller.filters()));
        }

        Commands::Specialties { source } => {
            let source = config.resolve_source(source.as_deref())?;
            let mut controller = FinderController::new(MemoryHistory::default());
            controller.receive_doctors(fetch_for_controller(&source, &config).await);

            println!("診療科: {}件", controller.specialties().len());
            for specialty in controller.specialties() {
                println!("  {}", specialty);
            }
        }

        Commands::Suggest { term, source } => {
            let source = config.resolve_source(source.as_deref())?;
            let doctors = match fetch::fetch_payload(&source, config.timeout_seconds).await {
                Ok(payload) => normalize_doctors(payload),
                Err(e) => {
                    tracing::error!(error = %e, "error fetching doctors");
                    Vec::new()
                }
            };

            let suggestions = get_autocomplete_suggestions(&doctors, &term);
            if suggestions.is_empty() {
                println!("候補なし");
            }
            for doctor in suggestions {
                println!(
                    "{} ({})",
                    doctor.name,
                    doctor.primary_speciality().unwrap_or("-")
                );
            }
        }

        Commands::Browse { source, query } => {
            let source = config.resolve_source(source.as_deref())?;
            let payload = fetch_for_controller(&source, &config).await;
            browse::run_browse(payload, query.as_deref().unwrap_or(""), &config.base_path)?;
        }

        Commands::Config { set_data_url, show } => {
            let mut config = config;

            if let Some(url) = set_data_url {
                config.set_data_url(url)?;
                println!("✔ データソースを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  データソース: {}", config.data_url.as_deref().unwrap_or("未設定"));
                println!("  共有URLのパス: {}", config.base_path);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
