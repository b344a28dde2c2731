//! Lifecycle-bound task scope.
//!
//! Every screen owns one scope for the span of its Active state. Work
//! spawned on it races the scope's cancellation token, so once the screen
//! is destroyed no spawned unit can deliver a result. Destroying the
//! screen is the only cancellation trigger; there is no per-task cancel.

use std::future::Future;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Task group tied to one screen's Active lifetime.
pub struct TaskScope {
    token: CancellationToken,
    tasks: JoinSet<()>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            tasks: JoinSet::new(),
        }
    }

    /// A clonable back-reference to this scope's cancellation state.
    /// Derived work holds one and checks it before delivering results.
    pub fn token(&self) -> ScopeToken {
        ScopeToken(self.token.clone())
    }

    /// Spawn `fut` onto the scope. The future is dropped at its next await
    /// point once the scope is cancelled, and is aborted outright on
    /// cancel, so neither path lets it produce further side effects.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.clone();
        self.tasks.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = fut => {}
            }
        });
    }

    /// Number of tasks still tracked (finished tasks linger until reaped;
    /// useful in tests, not for flow control).
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel everything scheduled on the scope. Idempotent.
    pub fn cancel(&mut self) {
        if !self.token.is_cancelled() {
            debug!(tasks = self.tasks.len(), "cancelling screen scope");
        }
        self.token.cancel();
        self.tasks.abort_all();
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        // The scope must never outlive its screen, destroy() or not.
        self.token.cancel();
        self.tasks.abort_all();
    }
}

/// Cheap clonable handle onto a scope's cancellation state.
#[derive(Debug, Clone)]
pub struct ScopeToken(CancellationToken);

impl ScopeToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.is_cancelled()
    }

    /// Resolves once the owning scope is cancelled.
    pub async fn cancelled(&self) {
        self.0.cancelled().await;
    }
}
