//! Graph renderer trait definitions for polymorphic graph types.

use crate::GraphConfig;
use async_trait::async_trait;
use ecomviz_common::Result;

/// Trait for graph renderers that can generate visualizations.
#[async_trait]
pub trait GraphRenderer: Send + Sync {
    /// The type of data this renderer expects.
    type Data: ?Sized + Sync;

    /// Renders a graph as an SVG document. The data is only read.
    async fn render(&self, data: &Self::Data, config: &GraphConfig) -> Result<Vec<u8>>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
