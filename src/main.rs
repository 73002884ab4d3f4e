use anyhow::{Context, Result};
use clap::Parser;
use images_compressor::cli::{Args, Commands, ConnectionArgs};
use images_compressor::constants::{INFO_PREFIX, SUCCESS_PREFIX, UPLOAD_PREFIX};
use images_compressor::logger::{init_tracing, set_quiet_mode, set_verbose_mode};
use images_compressor::{error, info, verbose, warn};
use images_compressor::{ApiClient, ApiResponse, ClientConfig, Credentials, OptimizeOptions};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let args = Args::parse();

    set_quiet_mode(args.quiet);
    set_verbose_mode(args.verbose);
    init_tracing(args.verbose);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every response was successful.
fn run(args: Args) -> Result<bool> {
    let client = build_client(&args.connection)?;

    let responses = match args.command {
        Commands::Optimize { images, level, exif } => {
            let options = OptimizeOptions::new(level, exif)?;
            verbose!(
                "level={} exif={}",
                options.level,
                options.exif_strip.bits()
            );

            images
                .iter()
                .map(|image| {
                    info!("{} Optimizing: {:?}", UPLOAD_PREFIX, image);
                    client.optimize(image, &options)
                })
                .collect::<Vec<_>>()
        }
        Commands::Check => {
            info!("{} Checking credentials", INFO_PREFIX);
            vec![client.check()]
        }
        Commands::List { id } => vec![client.get(id)],
        Commands::Delete { id } => vec![client.delete(id)],
    };

    let mut all_ok = true;
    for response in &responses {
        print_response(response)?;
        all_ok &= !response.is_unsuccessful();
    }

    if all_ok {
        info!("{} Done", SUCCESS_PREFIX);
    } else {
        warn!("The service reported a failure");
    }

    Ok(all_ok)
}

fn build_client(connection: &ConnectionArgs) -> Result<ApiClient> {
    let mut config = ClientConfig::default()
        .with_endpoint(connection.endpoint.clone())
        .with_verify_tls(!connection.insecure);
    if let Some(secs) = connection.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    if connection.key.is_empty() {
        verbose!("No API key given; requests will carry an empty key");
    }

    let credentials = Credentials::new(connection.key.clone(), connection.secret.clone());
    ApiClient::with_config(credentials, config).context("Failed to initialise the HTTP client")
}

fn print_response(response: &ApiResponse) -> Result<()> {
    let rendered = serde_json::to_string_pretty(response)?;
    println!("{}", rendered);
    Ok(())
}
