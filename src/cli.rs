use clap::{Parser, Subcommand};
use std::path::PathBuf;
use video_pair_common::MatchStrategy;

#[derive(Parser)]
#[command(name = "video-pair")]
#[command(about = "2つのフォルダの動画をファイル名で照合し、ブラインド比較用のペアを作るツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ログレベル (error/warn/info/debug/trace, module=level も可)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 2つのフォルダの動画をマッチング
    Match {
        /// フォルダA（ベースライン）
        #[arg(required = true)]
        folder_a: PathBuf,

        /// フォルダB（比較対象）
        #[arg(required = true)]
        folder_b: PathBuf,

        /// マッチング戦略 (exact/threshold/optimal)
        #[arg(short, long)]
        strategy: Option<MatchStrategy>,

        /// 類似度の閾値（0.0-1.0）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// サブフォルダをスキャンしない
        #[arg(long)]
        no_recursive: bool,

        /// 出力JSONファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// マッチング結果をプレビュー（先頭5組のみ表示）
    Preview {
        #[arg(required = true)]
        folder_a: PathBuf,

        #[arg(required = true)]
        folder_b: PathBuf,

        /// サブフォルダをスキャンしない
        #[arg(long)]
        no_recursive: bool,

        /// 出力JSONファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// バッチ定義（JSON）の全フォルダペアを並列にマッチング
    Batch {
        /// バッチ定義ファイル
        #[arg(required = true)]
        manifest: PathBuf,

        /// マッチング戦略 (exact/threshold/optimal)
        #[arg(short, long)]
        strategy: Option<MatchStrategy>,

        /// 類似度の閾値（0.0-1.0）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// サブフォルダをスキャンしない
        #[arg(long)]
        no_recursive: bool,

        /// 出力JSONファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ情報を表示
    Info {
        #[arg(required = true)]
        folder: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// デフォルト閾値を設定
        #[arg(long)]
        set_threshold: Option<f64>,

        /// デフォルト戦略を設定
        #[arg(long)]
        set_strategy: Option<MatchStrategy>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_match() {
        let cli = Cli::parse_from([
            "video-pair", "match", "/a", "/b", "--strategy", "optimal", "-t", "0.7", "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Match { folder_a, strategy, threshold, no_recursive, .. } => {
                assert_eq!(folder_a, PathBuf::from("/a"));
                assert_eq!(strategy, Some(MatchStrategy::Optimal));
                assert_eq!(threshold, Some(0.7));
                assert!(!no_recursive);
            }
            _ => panic!("expected match command"),
        }
    }

    #[test]
    fn test_parse_preview_output() {
        let cli = Cli::parse_from(["video-pair", "preview", "/a", "/b", "--no-recursive", "-o", "out"]);
        match cli.command {
            Commands::Preview { no_recursive, output, .. } => {
                assert!(no_recursive);
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            _ => panic!("expected preview command"),
        }
    }

    #[test]
    fn test_parse_invalid_strategy() {
        let parsed = Cli::try_parse_from(["video-pair", "match", "/a", "/b", "-s", "best"]);
        assert!(parsed.is_err());
    }
}
