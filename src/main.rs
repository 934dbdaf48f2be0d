//! # Product Dialog Demo
//!
//! Walks one dialog through the flows a user would take:
//! 1.  Adding a product, first without filling the form, then without logging in.
//! 2.  Saving it and refreshing the product list.
//! 3.  Editing the saved product. A typed `0` is text, so it passes validation.

use product_dialog::config::Config;
use product_dialog::dialog::SaveOutcome;
use product_dialog::lifecycle::{setup_tracing, InventorySystem};
use product_dialog::model::{ProductField, UserId};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting product dialog demo");

    let system = InventorySystem::with_config(&config);
    let dialog = system.dialog_client.clone();
    let user = UserId::from("alice");

    let span = tracing::info_span!("add_product");
    async {
        dialog.open(None).await?;

        let outcome = dialog.save(Some(user.clone())).await?;
        info!(?outcome, "Saved an empty form");

        dialog.edit(ProductField::Name, "Widget").await?;
        dialog.edit(ProductField::Qty, "3").await?;
        dialog.edit(ProductField::Price, "2.5").await?;
        print!("{}", dialog.view().await?);

        let outcome = dialog.save(None).await?;
        info!(?outcome, "Saved without a user");

        match dialog.save(Some(user.clone())).await? {
            SaveOutcome::Saved(path) => info!(%path, "Product added"),
            other => warn!(outcome = ?other, "Product not added"),
        }
        Ok::<_, product_dialog::dialog::DialogError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let products = system
        .store_client
        .list(&user)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = products.len(), "Refreshed product list");

    if let Some(product) = products.into_iter().next() {
        let span = tracing::info_span!("edit_product");
        async {
            print!("{}", dialog.open(Some(product)).await?);

            dialog.edit(ProductField::Price, "0").await?;
            dialog.edit_named("qty", "10").await?;
            print!("{}", dialog.view().await?);

            let outcome = dialog.save(Some(user.clone())).await?;
            info!(?outcome, "Product updated");

            let view = dialog.view().await?;
            print!("{}", view);
            Ok::<_, product_dialog::dialog::DialogError>(())
        }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    }

    drop(dialog);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
