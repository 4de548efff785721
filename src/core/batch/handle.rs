//! Awaitable handle to a background batch run

use super::cancel::CancelSignal;
use super::types::BatchReport;
use crate::utils::error::{Result, ServiceError};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Resolves to the run's report exactly once
///
/// Dropping the handle detaches the run; it keeps going to completion.
pub struct BatchHandle {
    join: JoinHandle<Result<BatchReport>>,
    cancel: CancelSignal,
}

impl BatchHandle {
    pub(crate) fn new(join: JoinHandle<Result<BatchReport>>, cancel: CancelSignal) -> Self {
        Self { join, cancel }
    }

    /// Ask the run's remaining units to stop before their next I/O step
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

impl Future for BatchHandle {
    type Output = Result<BatchReport>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.join).poll(cx).map(|joined| match joined {
            Ok(result) => result,
            Err(e) => Err(ServiceError::batch(format!("Batch run aborted: {}", e))),
        })
    }
}
