use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownPhase {
    Running = 0,
    Signaled = 1,
    StoppingAnimation = 2,
    CancellingTasks = 3,
    RestoringTerminal = 4,
    Complete = 5,
}

pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU8::new(ShutdownPhase::Running as u8)),
        }
    }

    /// Signal shutdown start
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.phase
                .store(ShutdownPhase::Signaled as u8, Ordering::SeqCst);
            tracing::info!("Shutdown initiated");
        }
    }

    /// Check if shutdown is in progress
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Get current phase
    pub fn phase(&self) -> ShutdownPhase {
        match self.phase.load(Ordering::SeqCst) {
            0 => ShutdownPhase::Running,
            1 => ShutdownPhase::Signaled,
            2 => ShutdownPhase::StoppingAnimation,
            3 => ShutdownPhase::CancellingTasks,
            4 => ShutdownPhase::RestoringTerminal,
            _ => ShutdownPhase::Complete,
        }
    }

    /// Advance to next phase
    pub fn advance(&self, phase: ShutdownPhase) {
        self.phase.store(phase as u8, Ordering::SeqCst);
        tracing::debug!("Shutdown phase: {:?}", phase);
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state from other threads.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_visible_through_handles() {
        let coordinator = ShutdownCoordinator::new();
        let handle = coordinator.handle();
        assert!(!handle.is_shutting_down());
        assert_eq!(coordinator.phase(), ShutdownPhase::Running);

        coordinator.signal();
        assert!(handle.is_shutting_down());
        assert_eq!(coordinator.phase(), ShutdownPhase::Signaled);
    }

    #[test]
    fn advance_moves_phase() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.signal();
        coordinator.advance(ShutdownPhase::RestoringTerminal);
        assert_eq!(coordinator.phase(), ShutdownPhase::RestoringTerminal);
        coordinator.signal();
        assert_eq!(coordinator.phase(), ShutdownPhase::RestoringTerminal);
    }
}
