use crate::engine::{
    compiled::CompiledExpression,
    evaluator::core::EvalResult,
    grid::{FramePass, random::random_table, validate},
};

/// Rewrites only the selected frame of `grid`.
///
/// For sample `i`, `w = i / (sample_count - 1)` (or `0.5` for a single
/// sample), `x = 2w - 1`, `y = z = 0`, and both `in` and `sel` are the
/// selected frame's value at `i` before the call. Every other frame is left
/// untouched.
///
/// The frame is evaluated into a scratch buffer first, so an evaluation error
/// leaves the grid unchanged.
///
/// # Errors
/// - `selected_frame` is not a frame of `grid`.
/// - `sample_count` is zero.
/// - The selected frame does not hold `sample_count` samples.
/// - The formula fails to evaluate (unknown name, wrong arity).
///
/// # Example
/// ```
/// use wavexpr::{apply_single_frame, compile};
///
/// let compiled = compile("x").unwrap();
/// let mut grid = vec![vec![0.0f32; 3]; 2];
/// apply_single_frame(&compiled, &mut grid, 1, 3).unwrap();
///
/// assert_eq!(grid[0], vec![0.0, 0.0, 0.0]);
/// assert_eq!(grid[1], vec![-1.0, 0.0, 1.0]);
/// ```
#[tracing::instrument(skip(compiled, grid), fields(formula = compiled.source()))]
pub fn apply_single_frame(compiled: &CompiledExpression,
                          grid: &mut [Vec<f32>],
                          selected_frame: usize,
                          sample_count: usize)
                          -> EvalResult<()> {
    validate(grid, selected_frame, sample_count, std::iter::once(selected_frame))?;

    let randoms = random_table(sample_count);
    let selected = &grid[selected_frame];
    let pass = FramePass { compiled,
                           selected,
                           randoms: &randoms };
    let rendered = pass.render(selected, 0.0, 0.0)?;

    grid[selected_frame] = rendered;
    tracing::debug!(selected_frame, sample_count, "applied formula to one frame");
    Ok(())
}
