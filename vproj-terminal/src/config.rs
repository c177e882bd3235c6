/// Player settings and command line parsing
use std::path::PathBuf;

use crate::AppError;

pub const USAGE: &str =
    "usage: vproj-terminal [FRAMES_FILE] [--focal F] [--frames N] [--fps N] [--distance D]";

/// Playback configuration for the terminal player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    /// Frame parameter table; a turntable animation is generated when absent
    pub frames_file: Option<PathBuf>,
    pub focal_length: f64,
    /// Length of the generated turntable animation
    pub n_frames: usize,
    pub fps: u32,
    /// Distance from the camera for the generated animation
    pub distance: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frames_file: None,
            focal_length: 1.5,
            n_frames: 120,
            fps: 30,
            distance: 4.0,
        }
    }
}

impl PlayerConfig {
    /// Build from arguments, excluding the program name
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--focal" => config.focal_length = parse_value(&arg, args.next())?,
                "--frames" => config.n_frames = parse_value(&arg, args.next())?,
                "--fps" => config.fps = parse_value(&arg, args.next())?,
                "--distance" => config.distance = parse_value(&arg, args.next())?,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Args(format!("unknown option {flag}")));
                }
                path => {
                    if config.frames_file.is_some() {
                        return Err(AppError::Args(format!("unexpected argument {path}")));
                    }
                    config.frames_file = Some(PathBuf::from(path));
                }
            }
        }

        if config.fps == 0 {
            return Err(AppError::Args("--fps must be at least 1".to_string()));
        }
        if config.n_frames == 0 {
            return Err(AppError::Args("--frames must be at least 1".to_string()));
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, AppError> {
    let value = value.ok_or_else(|| AppError::Args(format!("{flag} needs a value")))?;
    value
        .parse()
        .map_err(|_| AppError::Args(format!("invalid value for {flag}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config =
            PlayerConfig::from_args(args(&["anim.txt", "--focal", "2.5", "--fps", "60"])).unwrap();
        assert_eq!(config.frames_file, Some(PathBuf::from("anim.txt")));
        assert_eq!(config.focal_length, 2.5);
        assert_eq!(config.fps, 60);
        assert_eq!(config.n_frames, 120);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(PlayerConfig::from_args(args(&["--focal"])).is_err());
        assert!(PlayerConfig::from_args(args(&["--frames", "many"])).is_err());
        assert!(PlayerConfig::from_args(args(&["--fps", "0"])).is_err());
        assert!(PlayerConfig::from_args(args(&["--zoom", "2"])).is_err());
        assert!(PlayerConfig::from_args(args(&["a.txt", "b.txt"])).is_err());
    }

    #[test]
    fn test_argument_error_message() {
        let err = PlayerConfig::from_args(args(&["--zoom", "2"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option --zoom");
        assert!(matches!(err, AppError::Args(_)));
    }
}
