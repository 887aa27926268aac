use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio_util::sync::CancellationToken;

/// Tracks the remote load a screen is waiting on so it can be abandoned.
/// A cancelled load yields `None` and the screen leaves its state untouched.
#[derive(Clone, Default)]
pub struct LoadGuard {
    in_flight: Arc<Mutex<Option<CancellationToken>>>,
}

impl LoadGuard {
    pub async fn run<F: Future>(&self, load: F) -> Option<F::Output> {
        let token = CancellationToken::new();
        self.replace(Some(token.clone()));
        let output = tokio::select! {
            output = load => Some(output),
            _ = token.cancelled() => None,
        };
        self.replace(None);
        output
    }

    /// Cancels the load in flight, false if nothing was loading.
    pub fn cancel(&self) -> bool {
        match self.replace(None) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    fn replace(&self, token: Option<CancellationToken>) -> Option<CancellationToken> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *in_flight, token)
    }
}
