use shared::{
    domain::{Color, ColorId, SavedColor},
    error::ApiError,
};
use tracing::info;

use crate::store::ColorStore;

#[derive(Clone, Default)]
pub struct ApiContext {
    pub store: ColorStore,
}

pub async fn list_colors(ctx: &ApiContext) -> Vec<SavedColor> {
    ctx.store.list().await
}

pub async fn create_color(ctx: &ApiContext, color: Color) -> SavedColor {
    let saved = ctx.store.create(color).await;
    info!(id = %saved.id, color = %saved.color.css(), "color created");
    saved
}

pub async fn delete_color(ctx: &ApiContext, id: ColorId) -> Result<SavedColor, ApiError> {
    let removed = ctx.store.delete(id).await?;
    info!(%id, "color deleted");
    Ok(removed)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
