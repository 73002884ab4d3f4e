use crate::constants::{API_ENDPOINT, ENV_API_KEY, ENV_API_SECRET};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "images-compressor",
    about = "Optimize images through the helloacm.com images-compressor API",
    long_about = "images-compressor uploads local images to the helloacm.com images-compressor web API \
                  and prints the JSON the service answers with. It can also check your credentials, \
                  list the images stored for your key and delete them.",
    version,
    after_help = "EXAMPLES:\n  \
    images-compressor --key KEY --secret SECRET optimize photo.jpg -l 80\n  \
    images-compressor optimize a.png b.png -e 26\n  \
    images-compressor check\n  \
    images-compressor list --id 42\n  \
    images-compressor delete"
)]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(short = 'q', long, global = true, help = "Only print responses")]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print request diagnostics")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConnectionArgs {
    #[arg(long, global = true, env = ENV_API_KEY, default_value = "", hide_env_values = true, help = "API key")]
    pub key: String,

    #[arg(long, global = true, env = ENV_API_SECRET, default_value = "", hide_env_values = true, help = "API secret")]
    pub secret: String,

    #[arg(long, global = true, default_value = API_ENDPOINT, help = "API endpoint")]
    pub endpoint: String,

    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds (default: 60)"
    )]
    pub timeout: Option<u64>,

    #[arg(
        long,
        global = true,
        help = "Skip TLS certificate verification",
        long_help = "Accept invalid TLS certificates from the endpoint. Only useful against test servers."
    )]
    pub insecure: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Optimize one or more images",
        long_about = "Upload each image in turn and print the service response. \
                      Images are validated locally before anything is sent."
    )]
    Optimize {
        #[arg(required = true, help = "Image file paths")]
        images: Vec<PathBuf>,

        #[arg(
            short = 'l',
            long,
            value_parser = clap::value_parser!(u8).range(0..=100),
            help = "Optimization level (0-100, default: 90)"
        )]
        level: Option<u8>,

        #[arg(
            short = 'e',
            long,
            help = "Metadata strip bitmask (default: 1)",
            long_help = "Sum of the markers to strip: 1 = all, 2 = comment, 4 = exif, 8 = iptc, 16 = icc."
        )]
        exif: Option<u32>,
    },

    #[command(about = "Check that the API key and secret are accepted")]
    Check,

    #[command(about = "List stored images")]
    List {
        #[arg(long, allow_negative_numbers = true, help = "Image id (default: -1, all images)")]
        id: Option<i64>,
    },

    #[command(about = "Delete stored images")]
    Delete {
        #[arg(long, allow_negative_numbers = true, help = "Image id (default: -1, all images)")]
        id: Option<i64>,
    },
}
