// src/client/dispatcher.rs
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;

use super::AnalysisService;
use crate::analysis::{AnalysisDocument, AnalysisRequest};
use crate::error::Result;
use crate::state::controller::{Dispatch, RequestId};

/// Outcome of a dispatched request, tagged with the id it was issued under.
#[derive(Debug)]
pub struct Completion {
    pub id: RequestId,
    pub request: AnalysisRequest,
    pub result: Result<AnalysisDocument>,
}

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs service calls on a tokio runtime and queues their completions for the
/// UI thread, which drains them once per frame.
pub struct Dispatcher {
    handle: Handle,
    service: Arc<dyn AnalysisService>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    waker: Option<Waker>,
}

impl Dispatcher {
    pub fn new(handle: Handle, service: Arc<dyn AnalysisService>) -> Self {
        let (sender, receiver) = channel();
        Self {
            handle,
            service,
            sender,
            receiver,
            waker: None,
        }
    }

    /// Called after every completion is queued, e.g. to request a repaint.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    /// Service used for dispatches from now on; calls already running finish
    /// against the old one and still report back here.
    pub fn set_service(&mut self, service: Arc<dyn AnalysisService>) {
        self.service = service;
    }

    pub fn dispatch(&self, dispatch: Dispatch) {
        let service = Arc::clone(&self.service);
        let sender = self.sender.clone();
        let waker = self.waker.clone();

        self.handle.spawn(async move {
            let Dispatch { id, request } = dispatch;
            let result = service.analyze(&request).await;
            if let Err(e) = &result {
                tracing::warn!(?id, url = %request.url, error = %e, "Analysis request failed");
            }

            if sender.send(Completion { id, request, result }).is_err() {
                tracing::debug!(?id, "Completion dropped, receiver gone");
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    /// Completions received since the last call, in arrival order.
    pub fn drain(&self) -> Vec<Completion> {
        self.receiver.try_iter().collect()
    }
}
