use crate::{
    engine::{
        compiled::CompiledExpression,
        evaluator::core::{EvalResult, FormulaContext},
    },
    error::EvaluationError,
    util::num::{clamp_sample, unit_position},
};

/// Multi-frame application: every frame is regenerated from its position in
/// the table.
pub mod multi_frame;
/// The reproducible pseudo-random source behind `rand`.
pub mod random;
/// Single-frame application: only the selected frame is rewritten.
pub mod single_frame;

/// Checks the arguments shared by both application modes.
///
/// Only the frames listed by `frames_to_check` must have `sample_count`
/// samples.
fn validate(grid: &[Vec<f32>],
            selected_frame: usize,
            sample_count: usize,
            frames_to_check: impl Iterator<Item = usize>)
            -> EvalResult<()> {
    if selected_frame >= grid.len() {
        return Err(EvaluationError::FrameIndexOutOfRange { index:       selected_frame,
                                                           frame_count: grid.len(), });
    }
    if sample_count == 0 {
        return Err(EvaluationError::InvalidSampleCount { sample_count });
    }
    for frame in frames_to_check {
        let found = grid[frame].len();
        if found != sample_count {
            return Err(EvaluationError::FrameLengthMismatch { frame,
                                                              expected: sample_count,
                                                              found });
        }
    }
    Ok(())
}

/// Per-call inputs that stay fixed for every frame of a pass.
struct FramePass<'a> {
    compiled: &'a CompiledExpression,
    /// The selected frame as it was before the pass.
    selected: &'a [f32],
    /// One `rand` value per sample index.
    randoms:  &'a [f64],
}

impl FramePass<'_> {
    /// Evaluates one frame into a new buffer.
    ///
    /// `source` is the frame's content before the pass and supplies `in`.
    /// Results are clamped to `[-1, 1]`.
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, source: &[f32], y: f64, z: f64) -> EvalResult<Vec<f32>> {
        let sample_count = self.randoms.len();
        let ast = self.compiled.ast();

        (0..sample_count).map(|i| {
                             let w = unit_position(i, sample_count);
                             let context =
                                 FormulaContext::new(2.0f64.mul_add(w, -1.0), w)
                                     .with_frame(y, z)
                                     .with_input(f64::from(source[i]))
                                     .with_selected(f64::from(self.selected[i]))
                                     .with_random(self.randoms[i]);
                             context.eval(ast).map(|v| clamp_sample(v) as f32)
                         })
                         .collect()
    }
}
