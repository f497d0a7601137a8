use crate::application::services::PieService;
use crate::{
    config::Config,
    error::AppError,
    model::requests::{EndpointCategory, PieRequest, RequestDescriptor},
    presentation::pie::{Pie, PieSummary},
    transport::http_client::T212HttpClient,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the pie service
pub struct PieServiceImpl<T: T212HttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: T212HttpClient> PieServiceImpl<T> {
    /// Creates a new instance of the pie service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: T212HttpClient + 'static> PieService for PieServiceImpl<T> {
    async fn get_pies(&self) -> Result<Vec<PieSummary>, AppError> {
        info!("Getting pies");

        let descriptor =
            RequestDescriptor::list_or_entry(EndpointCategory::Pies, "equity/pies", None);
        let result: Vec<PieSummary> = self.client.execute(&descriptor).await?;

        debug!("{} pies found", result.len());
        Ok(result)
    }

    async fn get_pie(&self, pie_id: i64) -> Result<Pie, AppError> {
        info!("Getting pie: {}", pie_id);

        let descriptor = RequestDescriptor::list_or_entry(
            EndpointCategory::Pies,
            "equity/pies",
            Some(&pie_id.to_string()),
        );
        let result: Pie = self.client.execute(&descriptor).await?;

        debug!("Pie {} has {} instruments", pie_id, result.instruments.len());
        Ok(result)
    }

    async fn create_pie(&self, pie: &PieRequest) -> Result<Pie, AppError> {
        let descriptor = pie.create_descriptor()?;
        info!("Creating pie: {}", pie.name);

        let result: Pie = self.client.execute(&descriptor).await?;

        info!("Pie created: id {}", result.settings.id);
        Ok(result)
    }

    async fn update_pie(&self, pie_id: i64, pie: &PieRequest) -> Result<Pie, AppError> {
        let descriptor = pie.update_descriptor(pie_id)?;
        info!("Updating pie: {}", pie_id);

        let result: Pie = self.client.execute(&descriptor).await?;

        debug!("Pie {} updated", pie_id);
        Ok(result)
    }

    async fn delete_pie(&self, pie_id: i64) -> Result<(), AppError> {
        info!("Deleting pie: {}", pie_id);

        let descriptor =
            RequestDescriptor::delete(EndpointCategory::Pies, format!("equity/pies/{pie_id}"));
        self.client.execute_empty(&descriptor).await?;

        debug!("Pie {} deleted", pie_id);
        Ok(())
    }
}
