use std::sync::Arc;
use tracing::{error, info};
use crate::clients::FormClient;
use crate::fetcher::{HttpUserFetcher, UserFetcher};
use crate::form_actor::FormActor;
use super::config::AppConfig;
use super::error::SystemError;

/// Starts the form actor, wires it to a fetcher and handles shutdown.
pub struct FormSystem {
    pub form_client: FormClient,
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Starts the form against the configured HTTP service and issues the
    /// start-up fetch.
    pub async fn start(config: &AppConfig) -> Result<Self, SystemError> {
        let fetcher = HttpUserFetcher::new(config.service_url()?, config.request_timeout())?;
        Self::with_fetcher(config, Arc::new(fetcher)).await
    }

    /// Like [`FormSystem::start`] with a caller-supplied fetcher.
    pub async fn with_fetcher(config: &AppConfig, fetcher: Arc<dyn UserFetcher>) -> Result<Self, SystemError> {
        info!(initial_id = %config.initial_id, "Starting form system");
        let (actor, form_client) = FormActor::new(config.channel_capacity, config.empty_input, fetcher);
        let handle = tokio::spawn(actor.run());

        form_client.load(config.initial_id).await?;
        Ok(Self { form_client, handle })
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down form system...");
        // The actor stops once its last client is dropped.
        drop(self.form_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::Join(format!("{:?}", e)));
        }

        info!("Form system shutdown complete.");
        Ok(())
    }
}
