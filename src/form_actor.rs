use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, info_span, instrument, warn, Instrument};
use crate::clients::FormClient;
use crate::domain::{EmptyInputPolicy, Identifier};
use crate::fetcher::UserFetcher;
use crate::form::{Effect, FormEvent, FormSnapshot, FormState, PendingFetch, RequestToken};
use crate::messages::{FormRequest, FormResult, InputOutcome, Response};

/// Owns the form state and serializes every change to it.
///
/// Fetches run as separate tasks and report back through the actor's own
/// channel, so edits and submissions are processed while a fetch is in flight.
pub struct FormActor {
    receiver: mpsc::Receiver<FormRequest>,
    // Weak so that the actor stops once every client is gone.
    events: mpsc::WeakSender<FormRequest>,
    state: FormState,
    fetcher: Arc<dyn UserFetcher>,
    waiters: Vec<Response<FormSnapshot>>,
}

impl FormActor {
    pub fn new(
        buffer_size: usize,
        policy: EmptyInputPolicy,
        fetcher: Arc<dyn UserFetcher>,
    ) -> (Self, FormClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            events: sender.downgrade(),
            state: FormState::new(policy),
            fetcher,
            waiters: Vec::new(),
        };
        (actor, FormClient::new(sender))
    }

    #[instrument(name = "form_actor", skip(self))]
    pub async fn run(mut self) {
        info!("FormActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::ChangeInput { raw, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_change_input(raw)));
                }
                FormRequest::Submit { respond_to } => {
                    let _ = respond_to.send(self.handle_submit());
                }
                FormRequest::Load { identifier, respond_to } => {
                    let _ = respond_to.send(self.handle_load(identifier));
                }
                FormRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                FormRequest::Settled { respond_to } => {
                    if let Some(pending) = self.state.pending() {
                        debug!(token = pending.token, "Waiting for fetch to settle");
                        self.waiters.push(respond_to);
                    } else {
                        let _ = respond_to.send(Ok(self.state.snapshot()));
                    }
                }
                FormRequest::FetchResolved { token, result } => {
                    self.handle_fetch_resolved(FormEvent::FetchResolved { token, result }, token);
                }
            }
        }
        info!("FormActor stopped");
    }

    #[instrument(skip(self))]
    fn handle_change_input(&mut self, raw: String) -> InputOutcome {
        let effect = self.state.handle(FormEvent::InputChanged(raw));
        let field = self.state.snapshot().field;
        if effect == Effect::Rejected {
            debug!(field = %field, "Input rejected");
            InputOutcome::Rejected(field)
        } else {
            debug!(field = %field, "Input accepted");
            InputOutcome::Accepted(field)
        }
    }

    #[instrument(skip(self))]
    fn handle_submit(&mut self) -> FormResult<RequestToken> {
        match self.state.submit() {
            Ok(fetch) => Ok(self.spawn_fetch(fetch)),
            Err(e) => {
                warn!(error = %e, "Submission refused");
                Err(e)
            }
        }
    }

    #[instrument(fields(identifier = %identifier), skip(self, identifier))]
    fn handle_load(&mut self, identifier: Identifier) -> FormResult<RequestToken> {
        let fetch = self.state.load(identifier);
        Ok(self.spawn_fetch(fetch))
    }

    #[instrument(skip(self, event))]
    fn handle_fetch_resolved(&mut self, event: FormEvent, token: RequestToken) {
        match self.state.handle(event) {
            Effect::Discarded { token } => debug!(token, "Discarding superseded response"),
            _ => info!(display = ?self.state.display(), "Display updated"),
        }
        if !self.state.is_loading() {
            let snapshot = self.state.snapshot();
            for waiter in self.waiters.drain(..) {
                let _ = waiter.send(Ok(snapshot.clone()));
            }
        }
    }

    fn spawn_fetch(&self, fetch: PendingFetch) -> RequestToken {
        let PendingFetch { token, identifier } = fetch;
        info!(token, identifier = %identifier, "Issuing fetch");
        let fetcher = Arc::clone(&self.fetcher);
        let events = self.events.clone();
        let span = info_span!("fetch", token, identifier = %identifier);

        tokio::spawn(
            async move {
                let result = fetcher.fetch_user(identifier).await;
                if let Err(e) = &result {
                    warn!(error = %e, "Fetch failed");
                }
                match events.upgrade() {
                    Some(sender) => {
                        let _ = sender.send(FormRequest::FetchResolved { token, result }).await;
                    }
                    None => debug!("Form closed before fetch resolved"),
                }
            }
            .instrument(span),
        );
        token
    }
}
