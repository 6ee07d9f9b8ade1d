use core::sync::atomic::{AtomicUsize, Ordering};

/// Observer notified as long-running proofs make progress.
///
/// Purely observational: a follower never changes what a proof computes, and every
/// proof runs identically when none is supplied.
pub trait Follower: Send + Sync {
    /// Called once per completed proof construction or verification step.
    fn tick(&self);
}

/// Follower that counts ticks and reports them through `tracing`.
#[derive(Debug)]
pub struct TracingFollower {
    label: &'static str,
    ticks: AtomicUsize,
}

impl TracingFollower {
    /// Creates a follower whose events carry `label`.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            ticks: AtomicUsize::new(0),
        }
    }

    /// Number of ticks seen so far.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Follower for TracingFollower {
    fn tick(&self) {
        let ticks = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(label = self.label, ticks, "proof progress");
    }
}
