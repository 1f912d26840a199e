use clap::Parser;
use medscan_rust::{cli, client, config, diagnose, error, logging, preview, render};
use cli::{Cli, Commands};
use config::Config;
use error::{MedScanError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Diagnose { file, model, interactive, server } => {
            let model = match model {
                Some(model) => model,
                None if interactive => diagnose::prompt_model(config.default_model)?,
                None => config.default_model,
            };
            let server_url = server.unwrap_or_else(|| config.server_url());
            let transport = client::HttpTransport::new(&server_url, config.timeout())?;
            tracing::debug!(endpoint = transport.endpoint(), %model, "diagnose");

            println!("🩺 medscan - {}\n", model.label());

            let (form, outcome) =
                diagnose::run_diagnose(&transport, file.as_deref(), model).await?;
            println!("{}", render::render_view(form.view()));

            if !outcome.is_success() {
                return Err(MedScanError::Diagnosis(form.view().error.clone()));
            }
        }

        Commands::Preview { file, data_url } => {
            let upload = preview::UploadFile::read(&file)?;
            let image = preview::build_preview(&upload)?;

            println!("画像: {}", upload.file_name);
            println!("  形式: {} ({})", image.format, upload.mime_type);
            println!("  サイズ: {}x{}px", image.width, image.height);
            println!("  容量: {} bytes", upload.bytes.len());
            if data_url {
                println!("{}", image.data_url);
            }
        }

        Commands::Models => {
            println!("{}", diagnose::describe_models(config.default_model));
        }

        Commands::Config { set_server, set_model, show } => {
            let mut config = config;
            let changed = set_server.is_some() || set_model.is_some();

            if let Some(url) = set_server {
                config.set_server_url(url)?;
                println!("✔ サーバーURLを設定しました: {}", config.server_url);
            }

            if let Some(model) = set_model {
                config.default_model = model;
                println!("✔ 既定のモデルを設定しました: {}", model.label());
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  サーバー: {}", config.server_url());
                println!("  既定のモデル: {} ({})", config.default_model, config.default_model.label());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
