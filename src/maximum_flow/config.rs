use crate::error::AlgorithmInvariantError;

/// Safety cap on the main loop of an engine.
///
/// What counts as one iteration depends on the engine: an augmenting path for Ford-Fulkerson
/// and Edmonds-Karp, a phase for Dinic, a push or relabel for push-relabel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationLimit {
    /// Derived from the engine's own worst-case bound on the graph being solved.
    #[default]
    Auto,
    Fixed(usize),
    Unbounded,
}

impl IterationLimit {
    pub(crate) fn resolve<F>(self, auto: F) -> usize
    where
        F: FnOnce() -> usize,
    {
        match self {
            IterationLimit::Auto => auto(),
            IterationLimit::Fixed(limit) => limit,
            IterationLimit::Unbounded => usize::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub iteration_limit: IterationLimit,
    /// Re-check the residual network (and leftover excess) before returning a result.
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { iteration_limit: IterationLimit::Auto, verify: true }
    }
}

impl Config {
    pub fn with_iteration_limit(mut self, iteration_limit: IterationLimit) -> Self {
        self.iteration_limit = iteration_limit;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

pub(crate) struct IterationBudget {
    algorithm: &'static str,
    limit: usize,
    used: usize,
}

impl IterationBudget {
    pub(crate) fn new(algorithm: &'static str, limit: usize) -> Self {
        Self { algorithm, limit, used: 0 }
    }

    pub(crate) fn spend(&mut self) -> Result<(), AlgorithmInvariantError> {
        if self.used >= self.limit {
            return Err(AlgorithmInvariantError::IterationLimitExceeded { algorithm: self.algorithm, limit: self.limit });
        }
        self.used += 1;
        Ok(())
    }

    #[inline]
    pub(crate) fn used(&self) -> usize {
        self.used
    }
}
