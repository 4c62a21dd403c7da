use chrono::Local;
use clap::Parser;
use photo_calendar::{browse, cli, config, error, loader, render, scanner};
use photo_calendar_common::{legacy, CalendarState, DateRange, LoadStatus, MediaCatalog, YearMonth};
use cli::{Cli, Commands};
use config::Config;
use error::{CalendarError, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { folder, output, recursive } => {
            println!("📸 photo-calendar - カタログ生成\n");

            println!("[1/2] メディアをスキャン中...");
            let report = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {}件のメディアを検出\n", report.dated.len() + report.undated.len());

            if report.dated.is_empty() {
                return Err(CalendarError::NoMediaFound(folder.display().to_string()));
            }
            for media in &report.undated {
                println!("⚠ 撮影日不明のためスキップ: {}", media.file_name);
            }

            println!("[2/2] カタログを保存中...");
            let catalog = report.to_catalog();
            std::fs::write(&output, catalog.to_json_pretty()?)?;
            print_catalog_summary(&catalog, &config.range);
            println!("✔ カタログを保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Import { input, output } => {
            println!("📥 photo-calendar - メタデータ取り込み\n");

            let content = read_file(&input)?;
            let records = legacy::parse_metadata_dump(&content);
            let catalog = legacy::to_catalog(&records);
            let skipped = records.len() - catalog.len();
            if skipped > 0 {
                println!("⚠ 日付なし・重複で{}件をスキップ", skipped);
            }
            if catalog.is_empty() {
                return Err(CalendarError::NoMediaFound(input.display().to_string()));
            }

            std::fs::write(&output, catalog.to_json_pretty()?)?;
            print_catalog_summary(&catalog, &config.range);
            println!("✔ カタログを保存: {}", output.display());
        }

        Commands::Show { catalog, month, media_dir } => {
            let mut state = open_state(&catalog, &config)?;

            if let Some(target) = month {
                if !state.jump_to(target) {
                    return Err(CalendarError::OutOfRange(format!(
                        "{} ({}〜{})",
                        target, config.range.min, config.range.max
                    )));
                }
            }

            if let Some(dir) = media_dir {
                loader::load_all(&mut state, &dir, false).await;
            }

            println!("{}", render::render_month(&state));
            print!("{}", render::render_day_list(&state));
        }

        Commands::Check { catalog, media_dir } => {
            println!("🔎 photo-calendar - 読み込み確認\n");

            let mut state = open_state(&catalog, &config)?;
            let dir = media_dir.unwrap_or_else(|| config.media_dir.clone());
            let progress = loader::load_all(&mut state, &dir, true).await;

            let (images, videos) = state.loader().loaded_by_kind();
            println!("✔ 画像: {}件 / 動画: {}件 を読み込み", images, videos);

            let failed = state.loader().filenames_with_status(LoadStatus::Failed);
            if failed.is_empty() {
                println!("\n✅ 全{}件の読み込みに成功", progress.total);
            } else {
                println!("⚠ {}件の読み込みに失敗:", failed.len());
                for name in failed {
                    println!("  - {}", dir.join(name).display());
                }
            }
        }

        Commands::Browse { catalog, media_dir } => {
            let mut state = open_state(&catalog, &config)?;
            let dir = media_dir.unwrap_or_else(|| config.media_dir.clone());

            println!("読み込み中...");
            let progress = loader::load_all(&mut state, &dir, true).await;
            let (images, videos) = state.loader().loaded_by_kind();
            println!("✔ 画像 {} / 動画 {}（失敗 {}）", images, videos, progress.failed);

            browse::run_interactive_browse(&mut state)?;
        }

        Commands::Config { min, max, media_dir, show } => {
            let mut config = config;
            let changed = min.is_some() || max.is_some() || media_dir.is_some();

            if min.is_some() || max.is_some() {
                let range = DateRange::new(
                    min.unwrap_or(config.range.min),
                    max.unwrap_or(config.range.max),
                )?;
                config.range = range;
            }
            if let Some(dir) = media_dir {
                config.media_dir = dir;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  表示範囲: {} 〜 {}", config.range.min, config.range.max);
                println!("  メディアフォルダ: {}", config.media_dir.display());
                println!("  バナー: {}件", config.banners.len());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// `-v` で debug、それ以外は info（RUST_LOG があればそちらを優先）
fn init_tracing(verbose: bool) {
    let default = if verbose { "photo_calendar=debug,photo_calendar_common=debug" } else { "photo_calendar=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CalendarError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// カタログを読み込み、今月（範囲外なら範囲の先頭）から始める状態を作る
fn open_state(catalog_path: &Path, config: &Config) -> Result<CalendarState<loader::AssetHandle>> {
    let catalog = MediaCatalog::from_json_str(&read_file(catalog_path)?)?;
    tracing::info!(entries = catalog.len(), path = %catalog_path.display(), "catalog loaded");

    let today = YearMonth::from(Local::now().date_naive());
    Ok(CalendarState::new(catalog, config.range, today).with_banners(config.banners.clone()))
}

fn print_catalog_summary(catalog: &MediaCatalog, range: &DateRange) {
    let (images, videos) = catalog.count_by_kind();
    println!("  画像: {}件 / 動画: {}件", images, videos);

    let months = catalog.months_with_media();
    let outside: Vec<String> = months
        .iter()
        .filter(|ym| !range.contains(**ym))
        .map(|ym| ym.to_string())
        .collect();
    if !outside.is_empty() {
        println!("⚠ 表示範囲外の月があります: {}", outside.join(", "));
    }
}
