use std::fmt::Debug;

use duodice_core::DieFace;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// A source of die faces.
pub trait DieSource: Debug {
    /// Draws one face.
    fn draw(&mut self) -> DieFace;
}

impl<S> DieSource for Box<S>
where
    S: DieSource + ?Sized,
{
    fn draw(&mut self) -> DieFace {
        (**self).draw()
    }
}

/// Uniform random faces from a seeded PRNG.
///
/// The same seed always yields the same sequence of faces.
///
/// # Example
///
/// ```
/// use duodice_game::{DieSource, RandomDieSource};
///
/// let mut a = RandomDieSource::with_seed(42);
/// let mut b = RandomDieSource::with_seed(42);
/// for _ in 0..10 {
///     assert_eq!(a.draw(), b.draw());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomDieSource {
    rng: Pcg64Mcg,
    seed: u64,
}

impl RandomDieSource {
    /// Creates a source with a fresh random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates a source with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        log::info!("die source seeded with {seed}");
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for RandomDieSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for RandomDieSource {
    fn draw(&mut self) -> DieFace {
        DieFace::from_value(self.rng.random_range(1..=6))
    }
}

/// Errors from [`ScriptedDieSource::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptError {
    /// The script contains no faces.
    #[display("die script is empty")]
    Empty,
}

/// Replays a fixed sequence of faces, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedDieSource {
    faces: Vec<DieFace>,
    next: usize,
}

impl ScriptedDieSource {
    /// Creates a source replaying `faces` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Empty`] if `faces` yields nothing.
    pub fn new<I>(faces: I) -> Result<Self, ScriptError>
    where
        I: IntoIterator<Item = DieFace>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { faces, next: 0 })
    }
}

impl DieSource for ScriptedDieSource {
    fn draw(&mut self) -> DieFace {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
