use std::sync::Arc;

use shared::{
    domain::{Color, ColorId, SavedColor},
    error::{ApiException, ErrorCode},
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreInner {
    colors: Vec<SavedColor>,
    last_id: i64,
}

/// Saved colors in insertion order, kept in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct ColorStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ColorStore {
    pub async fn list(&self) -> Vec<SavedColor> {
        self.inner.read().await.colors.clone()
    }

    pub async fn create(&self, color: Color) -> SavedColor {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let saved = SavedColor::new(ColorId(inner.last_id), color);
        inner.colors.push(saved.clone());
        saved
    }

    pub async fn delete(&self, id: ColorId) -> Result<SavedColor, ApiException> {
        let mut inner = self.inner.write().await;
        let index = inner
            .colors
            .iter()
            .position(|saved| saved.id == id)
            .ok_or_else(|| ApiException::new(ErrorCode::NotFound, format!("color {id} not found")))?;
        Ok(inner.colors.remove(index))
    }
}
