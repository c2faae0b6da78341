//! Effect runtime around the core
//!
//! The core lives on the event loop and is only touched from there. HTTP
//! effects run on spawned tasks; their results come back over a channel and
//! are resolved into the core in completion order. Nothing is cancelled, so
//! overlapping selections race and the last answer to arrive wins.

use anyhow::{Context, Result, anyhow};
use crux_core::{Core, Request};
use crux_http::protocol::{HttpRequest, HttpResult};
use log::{debug, warn};
use std::collections::HashMap;
use students_ui_core::{App, Effect, Event, ViewModel};
use tokio::sync::mpsc;

use crate::http_client::ApiClient;

type Completion = (u64, HttpResult);

pub struct Session {
    core: Core<App>,
    client: ApiClient,
    pending: HashMap<u64, Request<HttpRequest>>,
    next_id: u64,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    render_requested: bool,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            core: Core::new(),
            client,
            pending: HashMap::new(),
            next_id: 0,
            tx,
            rx,
            render_requested: false,
        }
    }

    /// Feed an event to the core and start the effects it asks for
    pub fn dispatch(&mut self, event: Event) {
        debug!("dispatching {event:?}");
        let effects = self.core.process_event(event);
        self.handle_effects(effects);
    }

    pub fn view(&self) -> ViewModel {
        self.core.view()
    }

    /// Number of HTTP requests still waiting for an answer
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Whether the core asked for a render since the last call
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    /// Wait for the next HTTP request to finish and resolve it into the core
    pub async fn complete_next(&mut self) -> Result<()> {
        let (id, result) = self
            .rx
            .recv()
            .await
            .context("failed to receive HTTP completion: channel closed")?;

        let mut request = self
            .pending
            .remove(&id)
            .with_context(|| format!("failed to find pending request {id}"))?;

        if let HttpResult::Err(e) = &result {
            warn!("request {id} failed: {e:?}");
        }

        let effects = self
            .core
            .resolve(&mut request, result)
            .map_err(|e| anyhow!("failed to resolve request {id}: {e:?}"))?;
        self.handle_effects(effects);

        Ok(())
    }

    /// Resolve requests until none is left in flight
    pub async fn settle(&mut self) -> Result<()> {
        while self.has_pending() {
            self.complete_next().await?;
        }
        Ok(())
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(_) => self.render_requested = true,
                Effect::Http(request) => self.spawn_http(request),
            }
        }
    }

    fn spawn_http(&mut self, request: Request<HttpRequest>) {
        let id = self.next_id;
        self.next_id += 1;

        let operation = request.operation.clone();
        debug!("request {id}: {} {}", operation.method, operation.url);
        self.pending.insert(id, request);

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.execute(operation).await;
            // The session may be gone already, nobody is waiting then
            let _ = tx.send((id, result));
        });
    }
}
