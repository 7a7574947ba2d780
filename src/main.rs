mod api;
mod extractors;
mod metadata;
mod storage;

#[cfg(test)]
mod test_support;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "metalens",
    version,
    about = "Servicio HTTP que detecta el tipo real de archivos subidos y extrae su metadata"
)]
struct Cli {
    /// Dirección en la que escucha el servidor
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Puerto HTTP
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Directorio raíz para los archivos subidos
    #[arg(long, value_name = "DIR")]
    upload_dir: Option<PathBuf>,

    /// Salida detallada
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let upload_dir = cli
        .upload_dir
        .unwrap_or_else(|| std::env::temp_dir().join("metalens-uploads"));

    let config = api::ServerConfig {
        host: cli.host,
        port: cli.port,
        upload_dir,
    };

    if let Err(message) = api::serve(config).await {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
