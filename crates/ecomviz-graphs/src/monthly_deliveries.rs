//! Monthly delivered orders line chart, one line per year

use crate::{group_by_year, GraphConfig, GraphRenderer, GraphUtils, MonthlyDeliveryCount};
use async_trait::async_trait;
use ecomviz_common::{month_abbr, Result};
use plotters::prelude::*;
use tracing::{debug, instrument};

/// Monthly deliveries line chart renderer.
///
/// The x-axis always spans January to December with all twelve ticks
/// labelled; each year present in the data becomes its own series, drawn
/// with a marker on every point and listed in the legend as `Year <n>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyDeliveriesGraph;

impl MonthlyDeliveriesGraph {
    /// Create a new monthly deliveries graph
    pub const fn new() -> Self {
        Self
    }

    #[instrument(skip(self, rows, config), fields(rows = rows.len()))]
    fn draw(&self, rows: &[MonthlyDeliveryCount], config: &GraphConfig) -> Result<String> {
        let background = GraphUtils::color(&config.style.background_color)?;
        let grouped = group_by_year(rows);
        let y_max = GraphUtils::axis_upper_bound(
            rows.iter().map(|row| row.delivered_count).max().unwrap_or(0),
        );

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (config.width, config.height)).into_drawing_area();
            root.fill(&background)?;

            let mut builder = ChartBuilder::on(&root);
            builder
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(80);
            if let Some(title) = config.title.as_deref() {
                builder.caption(title, ("sans-serif", 22.0));
            }
            let mut chart = builder.build_cartesian_2d(1u32..12u32, 0u64..y_max)?;

            chart
                .configure_mesh()
                .x_labels(12)
                .x_label_formatter(&|month: &u32| month_abbr(*month).unwrap_or_default().to_string())
                .x_desc(config.x_label.as_str())
                .y_desc(config.y_label.as_str())
                .label_style(("sans-serif", 14.0))
                .draw()?;

            for (index, (year, months)) in grouped.iter().enumerate() {
                let color = GraphUtils::series_color(index);

                chart
                    .draw_series(LineSeries::new(months.iter().copied(), color.stroke_width(2)))?
                    .label(format!("Year {year}"))
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });

                chart.draw_series(
                    months
                        .iter()
                        .map(|&(month, count)| Circle::new((month, count), 4, color.filled())),
                )?;
            }

            if !grouped.is_empty() {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;
            }

            root.present()?;
        }

        debug!("Rendered {} yearly series", grouped.len());
        Ok(svg)
    }
}

#[async_trait]
impl GraphRenderer for MonthlyDeliveriesGraph {
    type Data = [MonthlyDeliveryCount];

    async fn render(&self, data: &[MonthlyDeliveryCount], config: &GraphConfig) -> Result<Vec<u8>> {
        self.draw(data, config).map(String::into_bytes)
    }

    fn name(&self) -> &'static str {
        "monthly_deliveries"
    }

    fn description(&self) -> &'static str {
        "Delivered orders per month, one line per year"
    }
}
