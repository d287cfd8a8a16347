//! Evenly spaced time grid over `[0, horizon)`
//!
//! Point `i` is computed as `i * step` rather than by repeated addition, so
//! rounding does not accumulate along the grid.

/// Time grid `0, dt, 2·dt, …` up to but excluding the horizon
///
/// The number of points `n` starts from `ceil(horizon / step)` and is then
/// corrected against the points actually produced, so that
/// `(n - 1)·step < horizon <= n·step` holds exactly.
///
/// The upper bound is `n·step`, not `last + step`: the rounded sum can fall
/// one ulp short of the product. For `step = 0.03, horizon = 9.99` the last
/// point is `9.959999999999999` and `last + step` is below the horizon,
/// while `333·0.03` reaches it.
///
/// # Example
///
/// ```rust
/// use decay_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::new(0.1, 100.0)?;
/// assert_eq!(grid.len(), 1000);
/// assert_eq!(grid.point(0), 0.0);
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    step: f64,
    horizon: f64,
    len: usize,
}

impl TimeGrid {
    /// Build the grid
    ///
    /// # Errors
    ///
    /// Fails only when no finite grid exists: `step` not strictly positive
    /// or not finite, `horizon` not finite, or more points than a `usize`
    /// can count. A horizon `<= 0` is accepted and yields an empty grid.
    pub fn new(step: f64, horizon: f64) -> Result<Self, String> {
        if !step.is_finite() || step <= 0.0 {
            return Err(format!(
                "Time step must be positive and finite, got {}",
                step
            ));
        }
        if !horizon.is_finite() {
            return Err(format!("Horizon must be finite, got {}", horizon));
        }

        Ok(Self {
            step,
            horizon,
            len: Self::count(step, horizon)?,
        })
    }

    fn count(step: f64, horizon: f64) -> Result<usize, String> {
        if horizon <= 0.0 {
            return Ok(0);
        }

        let ratio = horizon / step;
        if !ratio.is_finite() || ratio >= usize::MAX as f64 {
            return Err(format!(
                "Horizon {} with time step {} needs too many points",
                horizon, step
            ));
        }

        let mut n = ratio.ceil() as usize;

        // last point must stay strictly below the horizon
        while n > 0 && (n - 1) as f64 * step >= horizon {
            n -= 1;
        }
        // and one more step must reach it
        while (n as f64) * step < horizon {
            n = n
                .checked_add(1)
                .ok_or_else(|| format!("Time grid overflows at horizon {}", horizon))?;
        }

        Ok(n)
    }

    /// Step size
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Exclusive upper bound
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a non-positive horizon
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time of point `index`
    pub fn point(&self, index: usize) -> f64 {
        index as f64 * self.step
    }

    /// Iterate over the grid in ascending order
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.point(i))
    }

    /// Collect all points
    pub fn points(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
