// src/state/controller.rs
//
// Request lifecycle for the analysis view. The controller never performs I/O:
// operations that need the service return a `Dispatch`, and the caller hands
// the outcome back through `on_response`. Only the most recently issued
// request is authoritative; anything else that comes back is dropped.

use crate::analysis::{
    normalize, AnalysisDocument, AnalysisRequest, NormalizeOptions, NormalizedView, Period,
};
use crate::error::{AnalysisError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// A request the caller must send to the analysis service.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub id: RequestId,
    pub request: AnalysisRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Submit,
    PeriodRefresh,
}

#[derive(Debug, Clone)]
struct InFlight {
    id: RequestId,
    request: AnalysisRequest,
    kind: RequestKind,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub request_url: String,
    pub selected_period: Period,
    pub document: Option<AnalysisDocument>,
    pub error: Option<String>,
    /// A submitted analysis is in flight; the whole page waits on it.
    pub loading: bool,
    /// A period refresh is in flight; only period-dependent panels wait.
    pub refreshing: bool,
    pub last_successful_url: Option<String>,
}

#[derive(Debug)]
pub struct RequestController {
    state: ViewState,
    phase: Phase,
    options: NormalizeOptions,
    view: NormalizedView,
    next_id: u64,
    in_flight: Option<InFlight>,
    saved_scroll: Option<f32>,
    pending_scroll: Option<f32>,
}

impl RequestController {
    pub fn new(period: Period, options: NormalizeOptions) -> Self {
        let view = normalize(None, &options);
        Self {
            state: ViewState {
                selected_period: period,
                ..ViewState::default()
            },
            phase: Phase::Idle,
            options,
            view,
            next_id: 0,
            in_flight: None,
            saved_scroll: None,
            pending_scroll: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &NormalizedView {
        &self.view
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn document(&self) -> Option<&AnalysisDocument> {
        self.state.document.as_ref()
    }

    pub fn in_flight(&self) -> Option<(RequestId, &AnalysisRequest, RequestKind)> {
        self.in_flight.as_ref().map(|f| (f.id, &f.request, f.kind))
    }

    /// Validates `url` and, when it is usable, starts a fresh analysis with
    /// the selected period. `scroll_offset` is restored once it resolves.
    pub fn submit(&mut self, url: &str, scroll_offset: f32) -> Option<Dispatch> {
        self.state.request_url = url.to_string();
        self.state.document = None;
        self.state.refreshing = false;

        if url.trim().is_empty() {
            tracing::info!("Rejected empty analysis URL");
            self.supersede();
            self.state.loading = false;
            self.state.error = Some(AnalysisError::Validation.user_message());
            self.phase = Phase::Idle;
            self.refresh_view();
            return None;
        }

        self.state.error = None;
        self.state.loading = true;
        self.phase = Phase::Loading;
        self.saved_scroll = Some(scroll_offset);
        self.refresh_view();

        let request = AnalysisRequest::new(url, self.state.selected_period);
        Some(self.issue(request, RequestKind::Submit))
    }

    /// Switches the trend period. Re-requests the analysis on display, if
    /// any; otherwise only the selection changes.
    pub fn on_period_change(&mut self, period: Period, scroll_offset: f32) -> Option<Dispatch> {
        if period == self.state.selected_period {
            return None;
        }
        self.state.selected_period = period;

        // A submit still in flight was sent with the old period: resend it.
        if let Some(InFlight { request, kind: RequestKind::Submit, .. }) = &self.in_flight {
            let request = AnalysisRequest::new(request.url.clone(), period);
            tracing::info!(period = %period, "Period changed while loading, resubmitting");
            self.saved_scroll.get_or_insert(scroll_offset);
            return Some(self.issue(request, RequestKind::Submit));
        }

        if self.state.document.is_none() {
            return None;
        }
        let url = self.state.last_successful_url.clone()?;
        tracing::info!(period = %period, "Period changed, refreshing analysis");
        self.state.refreshing = true;
        self.saved_scroll = Some(scroll_offset);
        Some(self.issue(AnalysisRequest::new(url, period), RequestKind::PeriodRefresh))
    }

    /// Applies the outcome of request `id`. Returns false when `id` is not the
    /// latest issued request, in which case nothing changes.
    pub fn on_response(&mut self, id: RequestId, result: Result<AnalysisDocument>) -> bool {
        let in_flight = match self.in_flight.take() {
            Some(current) if current.id == id => current,
            other => {
                tracing::debug!(?id, latest = ?other.as_ref().map(|f| f.id), "Ignoring stale response");
                self.in_flight = other;
                return false;
            }
        };

        match result {
            Ok(document) => {
                tracing::info!(url = %in_flight.request.url, period = %in_flight.request.period, "Analysis loaded");
                self.state.document = Some(document);
                self.state.error = None;
                self.state.last_successful_url = Some(in_flight.request.url);
                self.phase = Phase::Success;
            }
            Err(err) => {
                tracing::warn!(url = %in_flight.request.url, error = %err, "Analysis failed");
                self.state.document = None;
                self.state.error = Some(err.user_message());
                self.phase = Phase::Failure;
            }
        }

        self.state.loading = false;
        self.state.refreshing = false;
        self.pending_scroll = self.saved_scroll.take();
        self.refresh_view();
        true
    }

    /// Back to the landing page. Outstanding requests are superseded.
    pub fn reset(&mut self) {
        self.supersede();
        self.state.document = None;
        self.state.error = None;
        self.state.loading = false;
        self.state.refreshing = false;
        self.state.last_successful_url = None;
        self.saved_scroll = None;
        self.pending_scroll = None;
        self.phase = Phase::Idle;
        self.refresh_view();
    }

    pub fn set_options(&mut self, options: NormalizeOptions) {
        if options != self.options {
            self.options = options;
            self.refresh_view();
        }
    }

    /// Scroll offset to apply on the next render, once per response.
    pub fn take_scroll_restore(&mut self) -> Option<f32> {
        self.pending_scroll.take()
    }

    fn issue(&mut self, request: AnalysisRequest, kind: RequestKind) -> Dispatch {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.in_flight = Some(InFlight { id, request: request.clone(), kind });
        tracing::debug!(?id, ?kind, url = %request.url, period = %request.period, "Issuing analysis request");
        Dispatch { id, request }
    }

    fn supersede(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(id = ?previous.id, "Superseding outstanding request");
        }
        self.saved_scroll = None;
    }

    fn refresh_view(&mut self) {
        debug_assert!(!(self.state.loading && self.state.error.is_some()));
        self.view = normalize(self.state.document.as_ref(), &self.options);
    }
}
