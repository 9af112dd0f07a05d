/// Seed of the per-sample table that feeds `rand`.
pub const RANDOM_TABLE_SEED: u64 = 42;

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7fff_ffff;
#[allow(clippy::cast_precision_loss)]
const MODULUS: f64 = (MODULUS_MASK + 1) as f64;

/// A linear-congruential generator modulo `2^31`.
///
/// The sequence depends on the seed alone, so the same seed always yields the
/// same values on every platform.
///
/// # Example
/// ```
/// use wavexpr::engine::grid::random::Lcg;
///
/// let mut a = Lcg::new(7);
/// let mut b = Lcg::new(7);
/// for _ in 0..16 {
///     let value = a.next_bipolar();
///     assert!((-1.0..1.0).contains(&value));
///     assert_eq!(value.to_bits(), b.next_bipolar().to_bits());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed & MODULUS_MASK }
    }

    /// Advances the generator and returns a value on `[0, 1)`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state
                         .wrapping_mul(MULTIPLIER)
                         .wrapping_add(INCREMENT)
                         & MODULUS_MASK;
        self.state as f64 / MODULUS
    }

    /// Advances the generator and returns a value on `[-1, 1)`.
    pub fn next_bipolar(&mut self) -> f64 {
        self.next_unit().mul_add(2.0, -1.0)
    }
}

/// Builds the `rand` table for a frame of `len` samples.
///
/// Entry `i` is the value `rand` takes at sample `i` in every frame and on
/// every call; it depends only on the index.
///
/// # Example
/// ```
/// use wavexpr::engine::grid::random::random_table;
///
/// let short = random_table(4);
/// let long = random_table(8);
/// assert_eq!(short[..], long[..4]);
/// ```
#[must_use]
pub fn random_table(len: usize) -> Vec<f64> {
    let mut rng = Lcg::new(RANDOM_TABLE_SEED);
    (0..len).map(|_| rng.next_bipolar()).collect()
}
