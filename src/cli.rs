use clap::{Parser, Subcommand};
use medscan_common::ModelType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medscan")]
#[command(about = "Diagnostic Vision and Smartscan Med - 医用画像診断クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をサーバーへ送信して診断結果を表示
    Diagnose {
        /// 画像ファイル
        file: Option<PathBuf>,

        /// 診断モデル (covid/brain_tumor)。省略時は設定の既定値
        #[arg(short, long)]
        model: Option<ModelType>,

        /// モデルを対話式で選択
        #[arg(short, long, conflicts_with = "model")]
        interactive: bool,

        /// サーバーURL（設定・環境変数より優先）
        #[arg(short, long)]
        server: Option<String>,
    },

    /// 画像のプレビュー情報を表示（送信しない）
    Preview {
        /// 画像ファイル
        #[arg(required = true)]
        file: PathBuf,

        /// Data URLも出力
        #[arg(long)]
        data_url: bool,
    },

    /// 利用可能なモデル一覧
    Models,

    /// 設定の表示・変更
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_server: Option<String>,

        /// 既定のモデルを設定
        #[arg(long)]
        set_model: Option<ModelType>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
