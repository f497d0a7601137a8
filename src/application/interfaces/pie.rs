use crate::error::AppError;
use crate::model::requests::PieRequest;
use crate::presentation::pie::{Pie, PieSummary};

use async_trait::async_trait;

#[async_trait]
/// Service for managing investment pies with the Trading212 API
///
/// Mutations share the gateway's retry policy and its duplicate-side-effect
/// caveat: see [`OrderService`](crate::application::interfaces::order::OrderService).
pub trait PieService: Send + Sync {
    /// Gets all pies
    async fn get_pies(&self) -> Result<Vec<PieSummary>, AppError>;

    /// Gets one pie with its instruments and settings
    async fn get_pie(&self, pie_id: i64) -> Result<Pie, AppError>;

    /// Validates and creates a new pie
    async fn create_pie(&self, pie: &PieRequest) -> Result<Pie, AppError>;

    /// Validates and updates an existing pie
    async fn update_pie(&self, pie_id: i64, pie: &PieRequest) -> Result<Pie, AppError>;

    /// Deletes a pie; its positions are released, not sold
    async fn delete_pie(&self, pie_id: i64) -> Result<(), AppError>;
}
