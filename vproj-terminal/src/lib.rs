/// Terminal player that animates wireframes through the multi-frame projector
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use vproj_core::{
    animation, params, project_frames, FrameParams, ProjectError, ScreenFrames, VertexBuffer,
    Wireframe,
};

pub mod config;
pub mod renderer;

pub use config::PlayerConfig;
pub use renderer::AsciiRenderer;

const FOCAL_STEP: f64 = 0.1;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("{0}")]
    Args(String),
}

impl From<vproj_core::ShapeError> for AppError {
    fn from(e: vproj_core::ShapeError) -> Self {
        Self::Project(e.into())
    }
}

impl From<vproj_core::ParamsError> for AppError {
    fn from(e: vproj_core::ParamsError) -> Self {
        Self::Project(e.into())
    }
}

/// Load the frame table named in the config, or generate a turntable
pub fn load_frames(config: &PlayerConfig) -> Result<Vec<FrameParams>, AppError> {
    match &config.frames_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let frames = params::parse_frame_params(&text)?;
            tracing::info!(path = %path.display(), frames = frames.len(), "loaded frame table");
            Ok(frames)
        }
        None => Ok(animation::turntable(config.n_frames, config.distance)),
    }
}

/// Projects every frame of an animation up front and plays it back
pub struct Animation {
    mesh: Wireframe,
    vertices: VertexBuffer,
    frames: Vec<FrameParams>,
    focal_length: f64,
    projected: ScreenFrames,
}

impl Animation {
    pub fn new(
        mesh: Wireframe,
        frames: Vec<FrameParams>,
        focal_length: f64,
    ) -> Result<Self, AppError> {
        let vertices = VertexBuffer::repeat(&mesh.vertices, frames.len())?;
        let projected = project_frames(&vertices, &frames, focal_length)?;
        Ok(Self {
            mesh,
            vertices,
            frames,
            focal_length,
            projected,
        })
    }

    pub fn mesh(&self) -> &Wireframe {
        &self.mesh
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn frame(&self, index: usize) -> &[nalgebra::Point2<f64>] {
        self.projected
            .frame(index % self.projected.n_frames())
            .unwrap_or(&[])
    }

    /// Re-project all frames with a new focal length
    pub fn set_focal_length(&mut self, focal_length: f64) -> Result<(), AppError> {
        self.projected = project_frames(&self.vertices, &self.frames, focal_length)?;
        self.focal_length = focal_length;
        tracing::debug!(focal_length, "re-projected animation");
        Ok(())
    }
}

/// Main application struct for terminal playback
pub struct TerminalApp {
    animation: Animation,
    renderer: AsciiRenderer,
    frame_time: Duration,
    current: usize,
    paused: bool,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(animation: Animation, config: &PlayerConfig) -> Result<Self, AppError> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            animation,
            // Leave the top row for the status line
            renderer: AsciiRenderer::new(width as usize, height.saturating_sub(1) as usize),
            frame_time: Duration::from_millis(1000 / u64::from(config.fps)),
            current: 0,
            paused: false,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<(), AppError> {
        while self.running {
            let frame_start = Instant::now();

            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            if !self.paused {
                self.step(1);
            }

            self.render()?;

            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }

            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn step(&mut self, forward: isize) {
        let len = self.animation.len() as isize;
        self.current = (self.current as isize + forward).rem_euclid(len) as usize;
    }

    fn handle_input(&mut self) -> Result<(), AppError> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    let f = self.animation.focal_length() + FOCAL_STEP;
                    self.animation.set_focal_length(f)?;
                }
                KeyCode::Char('-') => {
                    let f = (self.animation.focal_length() - FOCAL_STEP).max(FOCAL_STEP);
                    self.animation.set_focal_length(f)?;
                }
                KeyCode::Right if self.paused => self.step(1),
                KeyCode::Left if self.paused => self.step(-1),
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        self.renderer.clear();
        self.renderer
            .render_frame(self.animation.mesh(), self.animation.frame(self.current));

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;
        self.renderer.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "vproj | frame {}/{} | f {:.2} | FPS: {:.1} | Space=Pause +/-=Focal Left/Right=Step Q=Quit",
                self.current + 1,
                self.animation.len(),
                self.animation.focal_length(),
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_projects_every_frame() {
        let frames = animation::turntable(8, 4.0);
        let anim = Animation::new(Wireframe::cube(1.0), frames, 1.5).unwrap();
        assert_eq!(anim.len(), 8);
        assert_eq!(anim.frame(3).len(), 8);
        // Wraps around past the last frame
        assert_eq!(anim.frame(8), anim.frame(0));
    }

    #[test]
    fn test_set_focal_length_reprojects() {
        let frames = vec![FrameParams::new(0.0, 0.0, 0.0, 0.0, 0.0, -4.0)];
        let mut anim = Animation::new(Wireframe::cube(2.0), frames, 1.0).unwrap();
        let before = anim.frame(0)[7];
        anim.set_focal_length(2.0).unwrap();
        let after = anim.frame(0)[7];
        assert!((after.x - 2.0 * before.x).abs() < 1e-12);
        assert_eq!(anim.focal_length(), 2.0);
    }

    #[test]
    fn test_animation_rejects_empty_frames() {
        let result = Animation::new(Wireframe::cube(1.0), Vec::new(), 1.0);
        assert!(matches!(
            result,
            Err(AppError::Project(ProjectError::Shape(_)))
        ));
    }

    #[test]
    fn test_load_frames_defaults_to_turntable() {
        let config = PlayerConfig {
            n_frames: 10,
            ..PlayerConfig::default()
        };
        let frames = load_frames(&config).unwrap();
        assert_eq!(frames.len(), 10);
        assert!(frames.iter().all(|f| f.tz == -config.distance));
    }
}
