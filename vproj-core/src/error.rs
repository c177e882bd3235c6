/// Error types for shaping inputs and parsing frame parameters

/// Input arrays that cannot be shaped into `(frames, vertices, 3)` or `(frames, 6)`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("frame batch is empty")]
    NoFrames,

    #[error("cannot reshape {len} values into {n_frames} frames of xyz points")]
    NotDivisible { len: usize, n_frames: usize },

    #[error("frame {frame} has {found} vertices, expected {expected}")]
    RaggedFrames {
        frame: usize,
        expected: usize,
        found: usize,
    },

    #[error("vertex buffer has {vertex_frames} frames but {param_frames} frame parameters were given")]
    FrameCountMismatch {
        vertex_frames: usize,
        param_frames: usize,
    },

    #[error("frame parameter array of length {len} is not a multiple of 6")]
    ParamsLength { len: usize },
}

/// Failure to read the frame parameter text format
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("line {line}: expected six numbers `r1 r2 r3 tx ty tz`, found {content:?}")]
    Malformed { line: usize, content: String },

    #[error("no frame parameters found")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}
