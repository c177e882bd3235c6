/// vproj Terminal Player - Animated wireframe projection
///
/// Plays a cube through a frame parameter table (or a generated turntable).
/// Controls:
///   - Space: Pause / resume
///   - Left/Right: Step frames while paused
///   - +/-: Change focal length
///   - Q/ESC: Quit
use tracing_subscriber::EnvFilter;
use vproj_core::Wireframe;
use vproj_terminal::{config::USAGE, load_frames, Animation, AppError, PlayerConfig, TerminalApp};

fn main() -> Result<(), AppError> {
    // Logs go to stderr so they stay out of the rendered frame
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vproj_terminal=info,vproj_core=warn")),
        )
        .init();

    let config = match PlayerConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let frames = load_frames(&config)?;
    tracing::info!(
        frames = frames.len(),
        focal_length = config.focal_length,
        "starting playback"
    );

    let animation = Animation::new(Wireframe::cube(2.0), frames, config.focal_length)?;
    let mut app = TerminalApp::new(animation, &config)?;
    app.run()?;

    tracing::info!("playback finished");
    Ok(())
}
