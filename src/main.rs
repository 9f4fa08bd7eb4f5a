use clap::Parser;
use video_pair_rust::{batch, cli, config, export, logging, matcher, scanner};
use cli::{Cli, Commands};
use config::Config;
use matcher::MatchOptions;
use video_pair_common::MatchStrategy;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let log_level = logging::resolve_log_level(
        cli.log_level.as_deref(),
        config.log_level.as_deref(),
        cli.verbose,
    );
    logging::init_logger(&log_level);

    let options_from = |strategy: Option<MatchStrategy>, threshold: Option<f64>, no_recursive: bool| MatchOptions {
        strategy: strategy.unwrap_or(config.default_strategy),
        threshold: threshold.unwrap_or(config.default_threshold),
        recursive: config.recursive && !no_recursive,
    };

    match cli.command {
        Commands::Match { folder_a, folder_b, strategy, threshold, no_recursive, output } => {
            println!("🎬 video-pair - マッチング\n");

            let options = options_from(strategy, threshold, no_recursive);
            let run = matcher::run_match(&folder_a, &folder_b, &options)?;

            if run.result.total_a() == 0 && run.result.total_b() == 0 {
                anyhow::bail!(video_pair_rust::error::VideoPairError::NoVideosFound(format!(
                    "{} / {}",
                    folder_a.display(),
                    folder_b.display()
                )));
            }

            export::print_run_summary(&run);

            if let Some(output) = output {
                let path = export::write_json(&run, &output, export::MATCH_REPORT_FILE)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Preview { folder_a, folder_b, no_recursive, output } => {
            println!("🔍 video-pair - プレビュー\n");

            let recursive = config.recursive && !no_recursive;
            let preview = matcher::preview_folders(&folder_a, &folder_b, recursive)?;
            export::print_preview(&preview);

            if let Some(output) = output {
                let path = export::write_json(&preview, &output, export::PREVIEW_REPORT_FILE)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Batch { manifest, strategy, threshold, no_recursive, output } => {
            println!("🚀 video-pair - バッチ処理\n");

            let manifest = batch::BatchManifest::load(&manifest)?;
            let options = options_from(strategy, threshold, no_recursive);
            println!("- {}件のジョブを実行中...", manifest.jobs.len());

            let outcomes = batch::run_batch(&manifest, &options, true);
            export::print_batch_summary(&outcomes);

            if let Some(output) = output {
                let path = export::write_json(&outcomes, &output, export::BATCH_REPORT_FILE)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }

            let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
            if failed > 0 {
                println!("\n⚠ {}件のジョブが失敗しました", failed);
            } else {
                println!("\n✅ 完了");
            }
        }

        Commands::Info { folder } => {
            let info = scanner::folder_info(&folder);
            export::print_folder_info(&info);
        }

        Commands::Config { set_threshold, set_strategy, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(threshold) = set_threshold {
                config.set_threshold(threshold)?;
                changed = true;
                println!("✔ デフォルト閾値を設定しました: {}", threshold);
            }

            if let Some(strategy) = set_strategy {
                config.set_strategy(strategy);
                changed = true;
                println!("✔ デフォルト戦略を設定しました: {}", strategy);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  閾値: {}", config.default_threshold);
                println!("  戦略: {}", config.default_strategy);
                println!("  再帰スキャン: {}", if config.recursive { "有効" } else { "無効" });
                println!("  ログレベル: {}", config.log_level.as_deref().unwrap_or("(未設定)"));
            }
        }
    }

    Ok(())
}
