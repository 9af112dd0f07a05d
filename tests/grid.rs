use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use wavexpr::{
    CompiledExpression, FormulaContext, apply_multi_frame, apply_multi_frame_cancellable,
    apply_single_frame, compile,
    engine::grid::random::{Lcg, RANDOM_TABLE_SEED, random_table},
    error::EvaluationError,
    evaluate,
    util::num::{clamp_sample, unit_position},
};

const FRAMES: usize = 8;
const SAMPLES: usize = 256;

fn zeros() -> Vec<Vec<f32>> {
    vec![vec![0.0; SAMPLES]; FRAMES]
}

/// A grid whose samples are all distinct and inside `[-1, 1]`.
#[allow(clippy::cast_precision_loss)]
fn ramp_grid(frames: usize, samples: usize) -> Vec<Vec<f32>> {
    (0..frames).map(|t| {
                   (0..samples).map(|i| {
                                   let v = (t * samples + i) as f32 / (frames * samples) as f32;
                                   v.mul_add(1.8, -0.9)
                               })
                               .collect()
               })
               .collect()
}

fn formula(src: &str) -> CompiledExpression {
    compile(src).unwrap_or_else(|e| panic!("Failed to compile '{src}': {e}"))
}

fn in_range(grid: &[Vec<f32>]) -> bool {
    grid.iter().flatten().all(|s| (-1.0..=1.0).contains(s))
}

fn bits(grid: &[Vec<f32>]) -> Vec<u32> {
    grid.iter().flatten().map(|s| s.to_bits()).collect()
}

/// Applies `compiled` to every frame one sample at a time through [`evaluate`].
#[allow(clippy::cast_possible_truncation)]
fn evaluate_each_sample(compiled: &CompiledExpression,
                        grid: &[Vec<f32>],
                        selected: usize)
                        -> Vec<Vec<f32>> {
    let samples = grid[selected].len();
    let randoms = random_table(samples);

    grid.iter()
        .enumerate()
        .map(|(t, frame)| {
            let y = unit_position(t, grid.len());
            (0..samples).map(|i| {
                            let w = unit_position(i, samples);
                            let context = FormulaContext::new(2.0f64.mul_add(w, -1.0), w)
                                .with_frame(y, 2.0f64.mul_add(y, -1.0))
                                .with_input(f64::from(frame[i]))
                                .with_selected(f64::from(grid[selected][i]))
                                .with_random(randoms[i]);
                            clamp_sample(evaluate(compiled, &context).unwrap()) as f32
                        })
                        .collect()
        })
        .collect()
}

#[test]
fn single_frame_rewrites_only_selected_frame() {
    let mut grid = zeros();
    apply_single_frame(&formula("sin(2*pi*x)"), &mut grid, 3, SAMPLES).unwrap();

    let frame = &grid[3];
    let first = frame[0];
    assert!(frame.iter().any(|&s| (s - first).abs() > 0.5), "frame 3 should not be constant");
    assert!(in_range(&grid));

    for (t, frame) in grid.iter().enumerate() {
        if t != 3 {
            assert!(frame.iter().all(|&s| s == 0.0), "frame {t} should be untouched");
        }
    }
}

#[test]
fn single_frame_sample_positions() {
    let mut grid = vec![vec![0.0f32; 5]];
    apply_single_frame(&formula("w"), &mut grid, 0, 5).unwrap();
    assert_eq!(grid[0], vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    apply_single_frame(&formula("x"), &mut grid, 0, 5).unwrap();
    assert_eq!(grid[0], vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

    let mut single = vec![vec![0.7f32; 1]];
    apply_single_frame(&formula("w + x"), &mut single, 0, 1).unwrap();
    assert_eq!(single[0], vec![0.5]);
}

#[test]
fn single_frame_sees_zero_frame_position() {
    let mut grid = vec![vec![0.3f32; 4]; 3];
    apply_single_frame(&formula("y + z + 0.5"), &mut grid, 1, 4).unwrap();
    assert_eq!(grid[1], vec![0.5; 4]);
}

#[test]
fn single_frame_in_and_sel_read_original_values() {
    let original = ramp_grid(2, 16);

    let mut grid = original.clone();
    apply_single_frame(&formula("in * 0.5 + sel * 0.5"), &mut grid, 1, 16).unwrap();
    assert_eq!(grid, original);

    apply_single_frame(&formula("-sel"), &mut grid, 1, 16).unwrap();
    let negated = original[1].iter().map(|s| -s).collect::<Vec<_>>();
    assert_eq!(grid[1], negated);
    assert_eq!(grid[0], original[0]);
}

#[test]
fn identity_is_a_no_op() {
    let original = ramp_grid(FRAMES, 32);

    let mut grid = original.clone();
    apply_single_frame(&formula("in"), &mut grid, 5, 32).unwrap();
    assert_eq!(grid, original);

    let mut grid = original.clone();
    apply_multi_frame(&formula("in + 0*y"), &mut grid, 2, 32).unwrap();
    assert_eq!(grid, original);
}

#[test]
fn multi_frame_scales_with_frame_position() {
    let mut grid = zeros();
    apply_multi_frame(&formula("sin(2*pi*x)*y"), &mut grid, 0, SAMPLES).unwrap();

    assert!(grid[0].iter().all(|s| s.abs() < 1e-12), "frame 0 has y = 0");
    for (t, frame) in grid.iter().enumerate().skip(1) {
        assert!(frame.iter().any(|s| s.abs() > 0.01), "frame {t} should be non-zero");
    }
    assert!(in_range(&grid));
}

#[test]
fn multi_frame_positions() {
    let mut grid = vec![vec![0.0f32; 3]; 5];
    apply_multi_frame(&formula("y"), &mut grid, 0, 3).unwrap();
    let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
    for (frame, y) in grid.iter().zip(expected) {
        assert_eq!(frame, &vec![y; 3]);
    }

    apply_multi_frame(&formula("z"), &mut grid, 0, 3).unwrap();
    let expected = [-1.0, -0.5, 0.0, 0.5, 1.0];
    for (frame, z) in grid.iter().zip(expected) {
        assert_eq!(frame, &vec![z; 3]);
    }

    let mut single = vec![vec![0.0f32; 2]];
    apply_multi_frame(&formula("y + z"), &mut single, 0, 2).unwrap();
    assert_eq!(single[0], vec![0.5, 0.5]);
}

#[test]
fn multi_frame_reads_a_snapshot() {
    let original = ramp_grid(4, 8);

    // Frame 0 is overwritten first; later frames must still see its old values.
    let mut grid = original.clone();
    apply_multi_frame(&formula("sel * 0.5 + 0 * y"), &mut grid, 0, 8).unwrap();
    let halved = original[0].iter().map(|s| s * 0.5).collect::<Vec<_>>();
    for frame in &grid {
        assert_eq!(frame, &halved);
    }

    // `in` reads each frame's own old values.
    let mut grid = original.clone();
    apply_multi_frame(&formula("-in + 0 * z"), &mut grid, 3, 8).unwrap();
    for (frame, old) in grid.iter().zip(&original) {
        let negated = old.iter().map(|s| -s).collect::<Vec<_>>();
        assert_eq!(frame, &negated);
    }
}

#[test]
fn outputs_are_clamped() {
    let mut grid = zeros();
    apply_single_frame(&formula("x * 10"), &mut grid, 0, SAMPLES).unwrap();
    assert!(in_range(&grid));
    assert_eq!(grid[0][0], -1.0);
    assert_eq!(grid[0][SAMPLES - 1], 1.0);

    let mut grid = zeros();
    apply_multi_frame(&formula("(x + y) * 1e300 * 1e300"), &mut grid, 0, SAMPLES).unwrap();
    assert!(in_range(&grid));
    assert_eq!(grid[FRAMES - 1][SAMPLES - 1], 1.0);
}

#[test]
fn multi_frame_is_deterministic() {
    let compiled = formula("rand * y + sin(2*pi*x) * z");

    let mut first = zeros();
    let mut second = zeros();
    apply_multi_frame(&compiled, &mut first, 2, SAMPLES).unwrap();
    apply_multi_frame(&compiled, &mut second, 2, SAMPLES).unwrap();

    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn multi_frame_matches_per_sample_evaluation() {
    let compiled = formula("sin(2*pi*x) * (1-y) + in * z + sel * rand / 4");
    let original = ramp_grid(FRAMES, 64);

    let mut grid = original.clone();
    apply_multi_frame(&compiled, &mut grid, 3, 64).unwrap();
    assert_eq!(bits(&grid), bits(&evaluate_each_sample(&compiled, &original, 3)));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_pass_is_bit_identical_to_sequential_evaluation() {
    let compiled = formula("tanh(3 * sin(2*pi*x*(1 + 7*y))) + rand * z * in");
    let original = ramp_grid(64, 512);
    let expected = bits(&evaluate_each_sample(&compiled, &original, 10));

    for _ in 0..4 {
        let mut grid = original.clone();
        apply_multi_frame(&compiled, &mut grid, 10, 512).unwrap();
        assert_eq!(bits(&grid), expected);
    }
}

#[test]
fn rand_table_is_shared_by_every_frame() {
    let mut grid = zeros();
    apply_multi_frame(&formula("rand + 0 * y"), &mut grid, 0, SAMPLES).unwrap();

    for frame in &grid[1..] {
        assert_eq!(frame, &grid[0]);
    }
    let first = grid[0][0];
    assert!(grid[0].iter().any(|&s| s != first), "rand should vary across samples");
    assert!(in_range(&grid));

    let mut single = zeros();
    apply_single_frame(&formula("rand"), &mut single, 4, SAMPLES).unwrap();
    assert_eq!(single[4], grid[0]);
}

#[test]
#[allow(clippy::cast_possible_truncation)]
fn rand_table_comes_from_the_seeded_generator() {
    let table = random_table(16);
    let mut rng = Lcg::new(RANDOM_TABLE_SEED);
    for value in &table {
        assert_eq!(value.to_bits(), rng.next_bipolar().to_bits());
        assert!((-1.0..1.0).contains(value));
    }

    let mut grid = vec![vec![0.0f32; 16]];
    apply_single_frame(&formula("rand"), &mut grid, 0, 16).unwrap();
    let expected = table.iter().map(|&v| v as f32).collect::<Vec<_>>();
    assert_eq!(grid[0], expected);

    assert_ne!(Lcg::new(1).next_unit(), Lcg::new(2).next_unit());
}

#[test]
fn invalid_arguments_are_rejected() {
    let compiled = formula("x");
    let mut grid = zeros();

    assert_eq!(apply_single_frame(&compiled, &mut grid, FRAMES, SAMPLES),
               Err(EvaluationError::FrameIndexOutOfRange { index:       FRAMES,
                                                           frame_count: FRAMES, }));
    assert_eq!(apply_multi_frame(&formula("y"), &mut grid, FRAMES + 3, SAMPLES),
               Err(EvaluationError::FrameIndexOutOfRange { index:       FRAMES + 3,
                                                           frame_count: FRAMES, }));
    assert_eq!(apply_single_frame(&compiled, &mut grid, 0, 0),
               Err(EvaluationError::InvalidSampleCount { sample_count: 0 }));
    assert_eq!(apply_single_frame(&compiled, &mut grid, 0, SAMPLES - 1),
               Err(EvaluationError::FrameLengthMismatch { frame:    0,
                                                          expected: SAMPLES - 1,
                                                          found:    SAMPLES, }));

    let mut empty: Vec<Vec<f32>> = Vec::new();
    assert!(matches!(apply_single_frame(&compiled, &mut empty, 0, 4),
                     Err(EvaluationError::FrameIndexOutOfRange { .. })));
}

#[test]
fn ragged_grids() {
    let mut grid = vec![vec![0.0f32; 4], vec![0.0f32; 3], vec![0.0f32; 4]];

    // Single-frame mode only looks at the selected frame.
    apply_single_frame(&formula("0.5"), &mut grid, 2, 4).unwrap();
    assert_eq!(grid[2], vec![0.5; 4]);

    let before = grid.clone();
    assert_eq!(apply_multi_frame(&formula("y"), &mut grid, 0, 4),
               Err(EvaluationError::FrameLengthMismatch { frame:    1,
                                                          expected: 4,
                                                          found:    3, }));
    assert_eq!(grid, before);
}

#[test]
fn evaluation_errors_leave_grid_untouched() {
    let original = ramp_grid(3, 8);

    let mut grid = original.clone();
    assert!(matches!(apply_single_frame(&formula("x + foo"), &mut grid, 1, 8),
                     Err(EvaluationError::UnknownVariable { .. })));
    assert_eq!(grid, original);

    let mut grid = original.clone();
    // Fails only from the last frame on, after earlier frames evaluated fine.
    assert!(matches!(apply_multi_frame(&formula("y < 1 || sin(1, 2)"), &mut grid, 0, 8),
                     Err(EvaluationError::ArgumentCountMismatch { .. })));
    assert_eq!(grid, original);
}

#[test]
fn cancellation_before_any_frame() {
    let original = ramp_grid(4, 8);
    let mut grid = original.clone();
    let cancel = AtomicBool::new(true);

    let result = apply_multi_frame_cancellable(&formula("y"), &mut grid, 0, 8, &cancel);
    assert!(matches!(result, Err(EvaluationError::Cancelled { .. })));
    assert_eq!(grid, original);

    let cancel = AtomicBool::new(false);
    apply_multi_frame_cancellable(&formula("y"), &mut grid, 0, 8, &cancel).unwrap();
    assert_eq!(grid[3], vec![1.0; 8]);
}

#[test]
fn cancellation_during_a_pass() {
    let compiled = formula("sin(2*pi*x*(1 + 15*y)) + rand * z");
    let original = ramp_grid(64, 2048);
    let mut grid = original.clone();
    let cancel = AtomicBool::new(false);

    let result = thread::scope(|scope| {
        scope.spawn(|| cancel.store(true, Ordering::Relaxed));
        apply_multi_frame_cancellable(&compiled, &mut grid, 0, 2048, &cancel)
    });

    // The flag may be seen at any frame, or only after the last one.
    match result {
        Err(EvaluationError::Cancelled { frame }) => {
            assert!(frame < original.len());
            assert_eq!(grid, original);
        },
        Ok(()) => assert_eq!(bits(&grid), bits(&evaluate_each_sample(&compiled, &original, 0))),
        Err(e) => panic!("unexpected error: {e}"),
    }
}
