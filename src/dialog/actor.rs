//! # Dialog Actor
//!
//! The event loop of one dialog instance. Requests (open, edit, save, close, view)
//! are processed one at a time against the owned [`DialogState`], so no lock is
//! needed. A validated save does not block the loop: the write runs in its own task
//! and reports back on an internal channel. Meanwhile the actor keeps answering
//! requests, and a second save is refused because the state is loading.

use super::client::DialogClient;
use super::error::DialogError;
use super::persistence;
use super::state::{DialogState, PendingSave, SaveOutcome};
use super::view::DialogView;
use crate::model::{Product, ProductField, UserId};
use crate::store::{DocumentPath, DocumentStore, StoreError};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn, Instrument};

/// Type alias for the one-shot response channel used by the dialog actor.
pub type Response<T> = oneshot::Sender<Result<T, DialogError>>;

/// Requests understood by [`DialogActor`].
#[derive(Debug)]
pub enum DialogRequest {
    Open {
        product: Option<Product>,
        respond_to: Response<DialogView>,
    },
    Edit {
        field: ProductField,
        value: String,
        respond_to: Response<()>,
    },
    Save {
        user: Option<UserId>,
        respond_to: Response<SaveOutcome>,
    },
    Close {
        respond_to: Response<()>,
    },
    View {
        respond_to: Response<DialogView>,
    },
}

/// Completion of a spawned write, routed back into the actor loop.
struct WriteFinished {
    path: DocumentPath,
    result: Result<(), StoreError>,
    respond_to: Response<SaveOutcome>,
}

pub struct DialogActor {
    receiver: mpsc::Receiver<DialogRequest>,
    completions: mpsc::UnboundedReceiver<WriteFinished>,
    completion_sender: mpsc::UnboundedSender<WriteFinished>,
    state: DialogState,
}

impl DialogActor {
    /// Creates a closed dialog actor and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel.
    pub fn new(buffer_size: usize) -> (Self, DialogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            state: DialogState::new(),
        };
        (actor, DialogClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// The store is handed over here rather than at construction, so the dialog can
    /// be wired to whichever store the system (or a test) starts.
    ///
    /// A write still in flight at shutdown is awaited, not cancelled.
    pub async fn run(mut self, store: Arc<dyn DocumentStore>) {
        info!("Dialog actor started");

        loop {
            tokio::select! {
                Some(done) = self.completions.recv() => self.finish_write(done),
                msg = self.receiver.recv() => match msg {
                    Some(request) => self.handle(request, &store),
                    None => break,
                },
            }
        }

        if self.state.is_loading() {
            info!("Waiting for in-flight write");
            if let Some(done) = self.completions.recv().await {
                self.finish_write(done);
            }
        }

        info!(phase = ?self.state.phase(), "Dialog actor shutdown");
    }

    fn handle(&mut self, request: DialogRequest, store: &Arc<dyn DocumentStore>) {
        match request {
            DialogRequest::Open { product, respond_to } => {
                debug!(?product, "Open");
                let reseeded = self.state.open(product);
                info!(reseeded, "Opened");
                let _ = respond_to.send(Ok(DialogView::from(&self.state)));
            }
            DialogRequest::Edit {
                field,
                value,
                respond_to,
            } => {
                debug!(?field, %value, "Edit");
                let _ = respond_to.send(self.state.edit(field, value));
            }
            DialogRequest::Save { user, respond_to } => {
                debug!(?user, "Save");
                match self.state.begin_save(user.as_ref()) {
                    Ok(pending) => self.spawn_write(pending, store, respond_to),
                    Err(DialogError::Invalid(reason)) => {
                        warn!(%reason, "Save rejected");
                        let _ = respond_to.send(Ok(SaveOutcome::ValidationFailed(reason)));
                    }
                    Err(e) => {
                        debug!(error = %e, "Save refused");
                        let _ = respond_to.send(Err(e));
                    }
                }
            }
            DialogRequest::Close { respond_to } => {
                debug!(loading = self.state.is_loading(), "Close");
                self.state.close();
                let _ = respond_to.send(Ok(()));
            }
            DialogRequest::View { respond_to } => {
                let _ = respond_to.send(Ok(DialogView::from(&self.state)));
            }
        }
    }

    fn spawn_write(
        &self,
        pending: PendingSave,
        store: &Arc<dyn DocumentStore>,
        respond_to: Response<SaveOutcome>,
    ) {
        let plan = persistence::plan(pending, store.as_ref());
        info!(path = %plan.path, kind = ?plan.kind, "Writing product");

        let span = tracing::info_span!("product_write", path = %plan.path);
        let path = plan.path.clone();
        let store = Arc::clone(store);
        let write = tokio::spawn(
            async move { persistence::execute(store.as_ref(), &plan).await }.instrument(span),
        );

        // A panicking store must still hand the loading flag back.
        let completions = self.completion_sender.clone();
        tokio::spawn(async move {
            let result = match write.await {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, %path, "Product write task failed");
                    Err(StoreError::Other(e.to_string()))
                }
            };
            let _ = completions.send(WriteFinished {
                path,
                result,
                respond_to,
            });
        });
    }

    fn finish_write(&mut self, done: WriteFinished) {
        let outcome = self.state.finish_save(done.path, done.result);
        info!(?outcome, phase = ?self.state.phase(), "Save finished");
        let _ = done.respond_to.send(Ok(outcome));
    }
}
