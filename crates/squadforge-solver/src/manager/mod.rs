//! Background optimization with cancellation.
//!
//! [`OptimizerManager`] runs each request on its own named thread so a
//! long search never blocks the caller. The result arrives through a
//! `tokio` oneshot channel: await it from async code with
//! [`OptimizationHandle::result`] or block on it with
//! [`OptimizationHandle::blocking_result`]. Requests share nothing but the
//! read-only player pool.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use tokio::sync::oneshot;
use tracing::info;

use squadforge_config::{OptimizerConfig, SearchConfig};
use squadforge_core::error::Result;
use squadforge_core::{ConstraintSet, Player, SquadForgeError};

use crate::optimizer::{Optimization, Optimizer};
use crate::termination::{ExternalTermination, OrTermination};

const THREAD_NAME: &str = "squadforge-optimizer";

/// Starts optimizations on worker threads.
#[derive(Debug, Clone, Default)]
pub struct OptimizerManager {
    search: SearchConfig,
}

impl OptimizerManager {
    /// Creates a manager applying `search` limits to every request.
    pub fn new(search: SearchConfig) -> Self {
        Self { search }
    }

    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self::new(config.search.clone())
    }

    /// Starts optimizing `pool` under `constraints` in the background.
    ///
    /// # Errors
    ///
    /// Invalid constraints are rejected here, before any thread starts.
    /// Returns [`SquadForgeError::Internal`] if the worker thread cannot be
    /// spawned.
    pub fn solve(
        &self,
        pool: Arc<[Player]>,
        constraints: ConstraintSet,
    ) -> Result<OptimizationHandle> {
        constraints.validate()?;

        let optimizer = Optimizer::new(constraints).with_search(self.search.clone());
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let termination = OrTermination::new((
            ExternalTermination::new(Arc::clone(&cancel_flag)),
            optimizer.configured_termination(),
        ));
        let (sender, receiver) = oneshot::channel();

        let thread = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let result = optimizer.optimize_with_termination(&pool, &termination);
                if sender.send(result).is_err() {
                    info!(event = "result_dropped");
                }
            })
            .map_err(|e| SquadForgeError::Internal(format!("failed to spawn optimizer: {e}")))?;

        Ok(OptimizationHandle {
            cancel_flag,
            receiver,
            thread,
        })
    }
}

/// Handle to one running optimization.
#[derive(Debug)]
pub struct OptimizationHandle {
    cancel_flag: Arc<AtomicBool>,
    receiver: oneshot::Receiver<Result<Optimization>>,
    thread: JoinHandle<()>,
}

impl OptimizationHandle {
    /// Asks the search to stop. The result becomes
    /// [`SquadForgeError::Cancelled`] unless the search already finished.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    /// True once the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the result from async code.
    pub async fn result(self) -> Result<Optimization> {
        self.receiver.await.map_err(|_| worker_lost())?
    }

    /// Waits for the result from synchronous code.
    ///
    /// Must not be called from inside an async runtime.
    pub fn blocking_result(self) -> Result<Optimization> {
        self.receiver.blocking_recv().map_err(|_| worker_lost())?
    }
}

fn worker_lost() -> SquadForgeError {
    SquadForgeError::Internal("optimizer thread exited without a result".to_string())
}

#[cfg(test)]
mod tests;
