//! # In-Memory Store Actor
//!
//! A stand-in for the hosted document database. [`StoreActor`] owns every document
//! and processes requests sequentially, so its map needs no lock. [`StoreClient`] is
//! the cheap-to-clone handle that sends requests over the channel and implements
//! [`DocumentStore`].

use super::{DocumentPath, DocumentStore, StoreError};
use crate::model::{Product, ProductDocument, ProductId, UserId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by [`StoreActor`].
#[derive(Debug)]
pub enum StoreRequest {
    Upsert {
        path: DocumentPath,
        document: ProductDocument,
        respond_to: Response<()>,
    },
    Get {
        path: DocumentPath,
        respond_to: Response<Option<ProductDocument>>,
    },
    List {
        user: UserId,
        respond_to: Response<Vec<Product>>,
    },
}

/// The actor owning the documents.
///
/// Documents are kept sorted by path, which groups each user's collection together
/// and orders it by product id.
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    documents: BTreeMap<DocumentPath, ProductDocument>,
}

/// Creates a new store actor and its client.
///
/// # Arguments
///
/// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
///   calls to the client wait until there is space.
pub fn new(buffer_size: usize) -> (StoreActor, StoreClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = StoreActor {
        receiver,
        documents: BTreeMap::new(),
    };
    (actor, StoreClient::new(sender))
}

impl StoreActor {
    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Upsert {
                    path,
                    document,
                    respond_to,
                } => {
                    debug!(%path, ?document, "Upsert");
                    let replaced = self.documents.insert(path.clone(), document).is_some();
                    info!(%path, replaced, size = self.documents.len(), "Written");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Get { path, respond_to } => {
                    let document = self.documents.get(&path).cloned();
                    debug!(%path, found = document.is_some(), "Get");
                    let _ = respond_to.send(Ok(document));
                }
                StoreRequest::List { user, respond_to } => {
                    let start = DocumentPath::new(user.clone(), ProductId(String::new()));
                    let products: Vec<Product> = self
                        .documents
                        .range(start..)
                        .take_while(|(path, _)| path.user == user)
                        .map(|(path, document)| {
                            Product::from_document(path.product.clone(), document.clone())
                        })
                        .collect();
                    debug!(%user, count = products.len(), "List");
                    let _ = respond_to.send(Ok(products));
                }
            }
        }

        info!(size = self.documents.len(), "Store actor shutdown");
    }
}

/// Client for the in-memory store actor.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Reads a single document.
    #[instrument(skip(self))]
    pub async fn get(&self, path: &DocumentPath) -> Result<Option<ProductDocument>, StoreError> {
        debug!("Sending request");
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Get { path, respond_to })
            .await
    }

    /// Lists every product owned by `user`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list(&self, user: &UserId) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        let user = user.clone();
        self.request(|respond_to| StoreRequest::List { user, respond_to })
            .await
    }
}

#[async_trait]
impl DocumentStore for StoreClient {
    #[instrument(skip(self, document))]
    async fn upsert(
        &self,
        path: &DocumentPath,
        document: ProductDocument,
    ) -> Result<(), StoreError> {
        debug!("Sending request");
        let path = path.clone();
        self.request(|respond_to| StoreRequest::Upsert {
            path,
            document,
            respond_to,
        })
        .await
    }
}
