//! One-shot completion notifications

use smallvec::SmallVec;

type Callback = Box<dyn FnOnce() + Send>;

/// A single-fire completion channel.
///
/// Observers register callbacks with [`observe`]; [`fire`] drains the
/// channel and invokes each callback exactly once. [`clear`] drops
/// pending callbacks without invoking them, which is what cancellation
/// and supersede paths use.
///
/// [`observe`]: CompletionSignal::observe
/// [`fire`]: CompletionSignal::fire
/// [`clear`]: CompletionSignal::clear
#[derive(Default)]
pub struct CompletionSignal {
    callbacks: SmallVec<[Callback; 2]>,
}

impl CompletionSignal {
    /// Create an empty channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a one-shot callback
    pub fn observe<F: FnOnce() + Send + 'static>(&mut self, callback: F) {
        self.callbacks.push(Box::new(callback));
    }

    /// Invoke and release every pending callback
    pub fn fire(&mut self) {
        for callback in self.callbacks.drain(..) {
            callback();
        }
    }

    /// Drop every pending callback without invoking it
    pub fn clear(&mut self) {
        self.callbacks.clear();
    }

    /// Number of callbacks waiting to fire
    pub fn pending(&self) -> usize {
        self.callbacks.len()
    }
}

impl std::fmt::Debug for CompletionSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSignal")
            .field("pending", &self.callbacks.len())
            .finish()
    }
}
