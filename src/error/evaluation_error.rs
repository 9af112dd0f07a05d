#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a formula or applying
/// it to a sample grid.
///
/// Numerically degenerate results (division by zero, `sqrt(-1)`, overflowing
/// powers) are not errors; the evaluator maps them to `0.0`.
pub enum EvaluationError {
    /// Referenced a name that is neither a constant nor a context variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is not part of the function library.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted argument count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The selected frame does not exist in the grid.
    FrameIndexOutOfRange {
        /// The requested frame index.
        index:       usize,
        /// Number of frames in the grid.
        frame_count: usize,
    },
    /// The requested sample count is zero.
    InvalidSampleCount {
        /// The requested sample count.
        sample_count: usize,
    },
    /// A frame's length does not match the requested sample count.
    FrameLengthMismatch {
        /// Index of the offending frame.
        frame:    usize,
        /// The requested sample count.
        expected: usize,
        /// The frame's actual length.
        found:    usize,
    },
    /// The caller cancelled a multi-frame pass between two frames.
    Cancelled {
        /// Frame that saw the cancellation and was not evaluated. With the
        /// `parallel` feature frames run in any order, so this says nothing
        /// about how many other frames finished.
        frame: usize,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found, } => write!(f,
                                                             "Function '{name}' expects {expected} argument(s), but {found} were given."),
            Self::FrameIndexOutOfRange { index, frame_count } => write!(f,
                                                                        "Frame index {index} is out of range for a grid of {frame_count} frame(s)."),
            Self::InvalidSampleCount { sample_count } => {
                write!(f, "Sample count must be positive, got {sample_count}.")
            },
            Self::FrameLengthMismatch { frame,
                                        expected,
                                        found, } => write!(f,
                                                           "Frame {frame} holds {found} sample(s), expected {expected}."),
            Self::Cancelled { frame } => write!(f, "Cancelled before frame {frame}."),
        }
    }
}

impl std::error::Error for EvaluationError {}
