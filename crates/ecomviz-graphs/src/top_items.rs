//! Ranked horizontal bar chart for the top cities and top payment types

use crate::{GraphConfig, GraphRenderer, GraphUtils, TopItem, MAX_LABEL_CHARS};
use async_trait::async_trait;
use ecomviz_common::{truncate_string, Result};
use plotters::prelude::*;
use tracing::{debug, instrument};

/// Horizontal bar chart of the largest counts, biggest bar on top.
///
/// The first bar is drawn in the highlight colour and the others in the
/// neutral colour. An empty table renders axes and caption only.
#[derive(Debug, Clone)]
pub struct TopItemsGraph {
    /// Maximum number of bars
    pub limit: usize,
    name: &'static str,
    description: &'static str,
}

impl TopItemsGraph {
    /// Create for the top cities by number of customers
    pub fn for_cities(limit: usize) -> Self {
        Self {
            limit,
            name: "top_cities",
            description: "Cities with the most customers",
        }
    }

    /// Create for the most used payment types
    pub fn for_payment_types(limit: usize) -> Self {
        Self {
            limit,
            name: "top_payment_types",
            description: "Payment types by number of payments",
        }
    }

    /// Axis labels indexed by y segment, bottom segment first.
    fn segment_labels(shown: &[&TopItem], slots: u32) -> Vec<String> {
        (0..slots)
            .map(|slot| {
                let rank = (slots - 1 - slot) as usize;
                shown
                    .get(rank)
                    .map(|item| truncate_string(&item.name, MAX_LABEL_CHARS))
                    .unwrap_or_default()
            })
            .collect()
    }

    #[instrument(skip(self, items, config), fields(graph = self.name, items = items.len()))]
    fn draw(&self, items: &[TopItem], config: &GraphConfig) -> Result<String> {
        let highlight = GraphUtils::color(&config.style.highlight_color)?;
        let neutral = GraphUtils::color(&config.style.neutral_color)?;
        let background = GraphUtils::color(&config.style.background_color)?;

        let shown: Vec<&TopItem> = items.iter().take(self.limit).collect();
        // at least two segments so the axis never collapses
        let slots = u32::try_from(shown.len().max(2)).unwrap_or(u32::MAX);
        let x_max = GraphUtils::axis_upper_bound(shown.iter().map(|item| item.count).max().unwrap_or(0));
        let labels = Self::segment_labels(&shown, slots);
        let slot_of = |rank: usize| slots - 1 - rank as u32;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            root.fill(&background)?;

            let mut builder = ChartBuilder::on(&root);
            builder
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(170);
            if let Some(title) = config.title.as_deref() {
                builder.caption(title, ("sans-serif", 22.0));
            }
            let mut chart =
                builder.build_cartesian_2d(0u64..x_max, (0u32..slots - 1).into_segmented())?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .x_desc(config.x_label.as_str())
                .y_desc(config.y_label.as_str())
                .y_labels(slots as usize)
                .y_label_formatter(&|value: &SegmentValue<u32>| match value {
                    SegmentValue::CenterOf(slot) | SegmentValue::Exact(slot) => {
                        labels.get(*slot as usize).cloned().unwrap_or_default()
                    }
                    SegmentValue::Last => String::new(),
                })
                .label_style(("sans-serif", 14.0))
                .draw()?;

            if let Some(top) = shown.first() {
                chart.draw_series(
                    Histogram::horizontal(&chart)
                        .style(highlight.filled())
                        .margin(8)
                        .data(std::iter::once((slot_of(0), top.count))),
                )?;
            }

            if shown.len() > 1 {
                chart.draw_series(
                    Histogram::horizontal(&chart)
                        .style(neutral.filled())
                        .margin(8)
                        .data(
                            shown
                                .iter()
                                .enumerate()
                                .skip(1)
                                .map(|(rank, item)| (slot_of(rank), item.count)),
                        ),
                )?;
            }

            root.present()?;
        }

        debug!("Rendered {} bars", shown.len());
        Ok(svg)
    }
}

#[async_trait]
impl GraphRenderer for TopItemsGraph {
    type Data = [TopItem];

    async fn render(&self, data: &[TopItem], config: &GraphConfig) -> Result<Vec<u8>> {
        self.draw(data, config).map(String::into_bytes)
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }
}
