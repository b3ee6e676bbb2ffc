mod cli;

use vidcompress::{config, DirectoryProcessor, RunConfig};
use vidcompress_av::FfmpegTranscoder;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidcompress=debug,vidcompress_av=debug".to_string()
        } else {
            "vidcompress=info,vidcompress_av=info".to_string()
        }
    });

    // stdout is reserved for the per-file diagnostics
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    let run_config = RunConfig {
        dry_run: cli.dry_run,
        skip_remove: cli.skip_remove,
        videos_directory: cli.videos_directory,
    };

    let transcoder = if run_config.dry_run {
        FfmpegTranscoder::default()
    } else {
        let ffmpeg =
            vidcompress_av::get_tool_path("ffmpeg", config.tools.ffmpeg_path.as_deref())
                .context("ffmpeg is required unless running with --dry-run")?;
        tracing::debug!("Using ffmpeg at {:?}", ffmpeg);
        FfmpegTranscoder::new(ffmpeg)
    };

    let processor = DirectoryProcessor::new(run_config, transcoder);
    processor.run().with_context(|| {
        format!(
            "Failed to compress videos in {:?}",
            processor.config().videos_directory
        )
    })?;

    Ok(())
}
