//! # Dialog Client
//!
//! Provides a high-level API for driving a [`DialogActor`](crate::dialog::DialogActor).
//! Each call is one user event: open, a keystroke in a field, a click on save or close.
use super::actor::{DialogRequest, Response};
use super::error::DialogError;
use super::state::SaveOutcome;
use super::view::DialogView;
use crate::model::{Product, ProductField, UserId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the dialog actor. Cheap to clone.
#[derive(Clone)]
pub struct DialogClient {
    sender: mpsc::Sender<DialogRequest>,
}

impl DialogClient {
    pub fn new(sender: mpsc::Sender<DialogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> DialogRequest,
    ) -> Result<T, DialogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DialogError::ActorClosed)?;
        response.await.map_err(|_| DialogError::ActorDropped)?
    }

    /// Opens the dialog on `product`, or on a blank form when `None`.
    #[instrument(skip(self))]
    pub async fn open(&self, product: Option<Product>) -> Result<DialogView, DialogError> {
        debug!("Sending request");
        self.request(|respond_to| DialogRequest::Open {
            product,
            respond_to,
        })
        .await
    }

    /// Replaces the raw text of `field`.
    #[instrument(skip(self))]
    pub async fn edit(&self, field: ProductField, value: &str) -> Result<(), DialogError> {
        debug!("Sending request");
        let value = value.to_string();
        self.request(|respond_to| DialogRequest::Edit {
            field,
            value,
            respond_to,
        })
        .await
    }

    /// Like [`edit`](Self::edit), addressing the field by its input name.
    #[instrument(skip(self))]
    pub async fn edit_named(&self, field: &str, value: &str) -> Result<(), DialogError> {
        debug!("Parsing field name");
        let field = field.parse::<ProductField>()?;
        self.edit(field, value).await
    }

    /// Validates and writes the form as `user`.
    ///
    /// Resolves once the write has finished. Returns
    /// [`DialogError::SaveInProgress`] without writing if another save is in flight.
    #[instrument(skip(self))]
    pub async fn save(&self, user: Option<UserId>) -> Result<SaveOutcome, DialogError> {
        debug!("Sending request");
        self.request(|respond_to| DialogRequest::Save { user, respond_to })
            .await
    }

    /// Closes the dialog, discarding unsaved edits.
    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<(), DialogError> {
        debug!("Sending request");
        self.request(|respond_to| DialogRequest::Close { respond_to })
            .await
    }

    /// Snapshot of what the dialog currently shows.
    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<DialogView, DialogError> {
        debug!("Sending request");
        self.request(|respond_to| DialogRequest::View { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParseFieldError;

    #[tokio::test]
    async fn test_save_forwards_user() {
        let (sender, mut receiver) = mpsc::channel(10);
        let client = DialogClient::new(sender);

        let save_task = tokio::spawn(async move { client.save(Some(UserId::from("u1"))).await });

        let Some(DialogRequest::Save { user, respond_to }) = receiver.recv().await else {
            panic!("Expected Save request");
        };
        assert_eq!(user, Some(UserId::from("u1")));
        respond_to
            .send(Ok(SaveOutcome::StoreFailed("offline".to_string())))
            .unwrap();

        let result = save_task.await.unwrap();
        assert_eq!(result, Ok(SaveOutcome::StoreFailed("offline".to_string())));
    }

    #[tokio::test]
    async fn test_edit_named_rejects_unknown_field() {
        let (sender, mut receiver) = mpsc::channel(10);
        let client = DialogClient::new(sender);

        let result = client.edit_named("total", "5").await;
        assert_eq!(
            result,
            Err(DialogError::UnknownField(ParseFieldError("total".to_string())))
        );

        drop(client);
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_responder() {
        let (sender, mut receiver) = mpsc::channel(10);
        let client = DialogClient::new(sender);

        let close_task = tokio::spawn(async move { client.close().await });
        drop(receiver.recv().await);

        assert_eq!(close_task.await.unwrap(), Err(DialogError::ActorDropped));
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (sender, receiver) = mpsc::channel(1);
        let client = DialogClient::new(sender);
        drop(receiver);

        assert_eq!(client.view().await, Err(DialogError::ActorClosed));
    }
}
