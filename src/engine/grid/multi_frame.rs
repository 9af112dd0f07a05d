use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    engine::{
        compiled::CompiledExpression,
        evaluator::core::EvalResult,
        grid::{FramePass, random::random_table, validate},
    },
    error::EvaluationError,
    util::num::unit_position,
};

/// Rewrites every frame of `grid`.
///
/// Frame `t` is evaluated with `y = t / (frame_count - 1)` (or `0.5` for a
/// single frame) and `z = 2y - 1`. `in` reads frame `t` and `sel` reads
/// `selected_frame`, both as they were before the call, so no frame ever sees
/// another frame's new values. The `rand` table is shared by all frames.
///
/// Nothing is written until every frame evaluated successfully.
///
/// # Errors
/// - `selected_frame` is not a frame of `grid`.
/// - `sample_count` is zero.
/// - Any frame does not hold `sample_count` samples.
/// - The formula fails to evaluate (unknown name, wrong arity).
///
/// # Example
/// ```
/// use wavexpr::{apply_multi_frame, compile};
///
/// let compiled = compile("y").unwrap();
/// let mut grid = vec![vec![0.0f32; 2]; 3];
/// apply_multi_frame(&compiled, &mut grid, 0, 2).unwrap();
///
/// assert_eq!(grid, vec![vec![0.0, 0.0], vec![0.5, 0.5], vec![1.0, 1.0]]);
/// ```
#[tracing::instrument(skip(compiled, grid), fields(formula = compiled.source()))]
pub fn apply_multi_frame(compiled: &CompiledExpression,
                         grid: &mut [Vec<f32>],
                         selected_frame: usize,
                         sample_count: usize)
                         -> EvalResult<()> {
    apply_multi_frame_cancellable(compiled,
                                  grid,
                                  selected_frame,
                                  sample_count,
                                  &AtomicBool::new(false))
}

/// [`apply_multi_frame`] with cooperative cancellation.
///
/// `cancel` is checked before each frame is evaluated, never in the middle of
/// a frame. Once it is set the call returns
/// [`EvaluationError::Cancelled`] and the grid is left exactly as it was.
///
/// # Errors
/// Everything [`apply_multi_frame`] reports, plus
/// [`EvaluationError::Cancelled`].
///
/// # Example
/// ```
/// use std::sync::atomic::AtomicBool;
///
/// use wavexpr::{apply_multi_frame_cancellable, compile, error::EvaluationError};
///
/// let compiled = compile("y").unwrap();
/// let mut grid = vec![vec![0.25f32; 4]; 4];
/// let cancel = AtomicBool::new(true);
///
/// let result = apply_multi_frame_cancellable(&compiled, &mut grid, 0, 4, &cancel);
/// assert!(matches!(result, Err(EvaluationError::Cancelled { .. })));
/// assert!(grid.iter().flatten().all(|&s| s == 0.25));
/// ```
pub fn apply_multi_frame_cancellable(compiled: &CompiledExpression,
                                     grid: &mut [Vec<f32>],
                                     selected_frame: usize,
                                     sample_count: usize,
                                     cancel: &AtomicBool)
                                     -> EvalResult<()> {
    validate(grid, selected_frame, sample_count, 0..grid.len())?;

    let randoms = random_table(sample_count);
    let pass = FramePass { compiled,
                           selected: &grid[selected_frame],
                           randoms: &randoms };

    let rendered = render_frames(&pass, grid, cancel)?;

    for (frame, samples) in grid.iter_mut().zip(rendered) {
        *frame = samples;
    }
    tracing::debug!(frame_count = grid.len(), sample_count, "applied formula to all frames");
    Ok(())
}

/// Evaluates one frame of a multi-frame pass.
fn render_frame(pass: &FramePass<'_>,
                grid: &[Vec<f32>],
                t: usize,
                cancel: &AtomicBool)
                -> EvalResult<Vec<f32>> {
    if cancel.load(Ordering::Relaxed) {
        tracing::info!(frame = t, "multi-frame pass cancelled");
        return Err(EvaluationError::Cancelled { frame: t });
    }

    let y = unit_position(t, grid.len());
    pass.render(&grid[t], y, 2.0f64.mul_add(y, -1.0))
}

#[cfg(not(feature = "parallel"))]
fn render_frames(pass: &FramePass<'_>,
                 grid: &[Vec<f32>],
                 cancel: &AtomicBool)
                 -> EvalResult<Vec<Vec<f32>>> {
    (0..grid.len()).map(|t| render_frame(pass, grid, t, cancel))
                   .collect()
}

// Frames only read the untouched grid, so they can be evaluated in any order.
#[cfg(feature = "parallel")]
fn render_frames(pass: &FramePass<'_>,
                 grid: &[Vec<f32>],
                 cancel: &AtomicBool)
                 -> EvalResult<Vec<Vec<f32>>> {
    use rayon::prelude::*;

    (0..grid.len()).into_par_iter()
                   .map(|t| render_frame(pass, grid, t, cancel))
                   .collect()
}
