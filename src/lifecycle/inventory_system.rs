use crate::config::Config;
use crate::dialog::{self, DialogClient};
use crate::store::{self, DocumentStore, StoreClient};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime behind one product dialog backed by the in-memory store.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
///
/// system.dialog_client.open(None).await?;
/// // ... edits ...
/// let outcome = system.dialog_client.save(Some(user.clone())).await?;
/// let products = system.store_client.list(&user).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for driving the dialog.
    pub dialog_client: DialogClient,

    /// Client for reading back what the dialog wrote.
    pub store_client: StoreClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Starts the system with default channel capacities.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Starts the store actor, then the dialog actor with the store client injected.
    pub fn with_config(config: &Config) -> Self {
        let (store_actor, store_client) = store::memory::new(config.store_buffer);
        let (dialog_actor, dialog_client) = dialog::new(config.dialog_buffer);

        let store_handle = tokio::spawn(store_actor.run());
        let dialog_store: Arc<dyn DocumentStore> = Arc::new(store_client.clone());
        let dialog_handle = tokio::spawn(dialog_actor.run(dialog_store));

        info!(?config, "Inventory system started");
        Self {
            dialog_client,
            store_client,
            handles: vec![dialog_handle, store_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// The dialog actor goes first: it finishes any in-flight write and then drops
    /// its store client, which lets the store actor exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.dialog_client);
        drop(self.store_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
