//! Graph manager composing aggregation and rendering of the dashboard charts.

use crate::{
    CityAggregator, CityCount, DataAggregator, GraphConfig, GraphRenderer, MonthlyDeliveriesGraph,
    MonthlyDeliveryAggregator, MonthlyDeliveryCount, PaymentTypeAggregator, PaymentTypeCount,
    TopItem, TopItemsGraph,
};
use ecomviz_common::{InputSnapshot, Result};
use ecomviz_config::ChartsConfig;
use tracing::{debug, info, instrument};

/// The three summary tables of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summaries {
    /// Customers per city, most customers first.
    pub cities: Vec<CityCount>,
    /// Payments per payment type, most used first.
    pub payment_types: Vec<PaymentTypeCount>,
    /// Distinct delivered orders per month, chronological.
    pub monthly_deliveries: Vec<MonthlyDeliveryCount>,
}

/// One rendered chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    /// Renderer that produced the chart.
    pub name: &'static str,
    /// SVG document.
    pub svg: Vec<u8>,
}

/// The three rendered charts, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    /// Top cities bar chart.
    pub cities: RenderedChart,
    /// Top payment types bar chart.
    pub payment_types: RenderedChart,
    /// Monthly delivered orders line chart.
    pub monthly_deliveries: RenderedChart,
}

/// Aggregates the input tables and renders the dashboard charts.
#[derive(Debug, Clone)]
pub struct GraphManager {
    charts: ChartsConfig,
}

impl GraphManager {
    /// Creates a new graph manager.
    pub fn new(charts: ChartsConfig) -> Self {
        Self { charts }
    }

    /// Runs the three aggregators over the snapshot.
    #[instrument(skip_all)]
    pub fn aggregate(&self, snapshot: &InputSnapshot) -> Result<Summaries> {
        let summaries = Summaries {
            cities: CityAggregator.aggregate(&snapshot.customers)?,
            payment_types: PaymentTypeAggregator.aggregate(&snapshot.payments)?,
            monthly_deliveries: MonthlyDeliveryAggregator.aggregate(&snapshot.orders)?,
        };

        info!(
            cities = summaries.cities.len(),
            payment_types = summaries.payment_types.len(),
            months = summaries.monthly_deliveries.len(),
            "Aggregation complete"
        );
        Ok(summaries)
    }

    /// Renders the three charts. Any failure aborts the whole render.
    #[instrument(skip_all)]
    pub async fn render(&self, summaries: &Summaries) -> Result<RenderedCharts> {
        let top_n = self.charts.top_n;

        let cities: Vec<TopItem> = summaries.cities.iter().take(top_n).map(TopItem::from).collect();
        let cities = render_chart(
            &TopItemsGraph::for_cities(top_n),
            cities.as_slice(),
            &GraphConfig::cities(&self.charts),
        )
        .await?;

        let payment_types: Vec<TopItem> = summaries
            .payment_types
            .iter()
            .take(top_n)
            .map(TopItem::from)
            .collect();
        let payment_types = render_chart(
            &TopItemsGraph::for_payment_types(top_n),
            payment_types.as_slice(),
            &GraphConfig::payment_types(&self.charts),
        )
        .await?;

        let monthly_deliveries = render_chart(
            &MonthlyDeliveriesGraph::new(),
            summaries.monthly_deliveries.as_slice(),
            &GraphConfig::monthly_deliveries(&self.charts),
        )
        .await?;

        info!("Rendered all charts");
        Ok(RenderedCharts {
            cities,
            payment_types,
            monthly_deliveries,
        })
    }

    /// Aggregates and renders in one go.
    pub async fn generate_all(&self, snapshot: &InputSnapshot) -> Result<RenderedCharts> {
        let summaries = self.aggregate(snapshot)?;
        self.render(&summaries).await
    }
}

async fn render_chart<G: GraphRenderer>(
    graph: &G,
    data: &G::Data,
    config: &GraphConfig,
) -> Result<RenderedChart> {
    debug!(chart = graph.name(), description = graph.description(), "Rendering chart");
    Ok(RenderedChart {
        name: graph.name(),
        svg: graph.render(data, config).await?,
    })
}

impl Default for GraphManager {
    fn default() -> Self {
        Self::new(ChartsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecomviz_common::test_utils::{customers_in, order, payment};

    fn snapshot() -> InputSnapshot {
        InputSnapshot {
            customers: customers_in(&["A", "A", "B", "C", "A", "B"]),
            orders: vec![
                order("1", "delivered", "2017-01-05 10:00:00"),
                order("1", "delivered", "2017-01-20 10:00:00"),
                order("2", "shipped", "2017-01-10 10:00:00"),
            ],
            payments: vec![payment("1", "credit_card"), payment("2", "boleto")],
        }
    }

    #[test]
    fn test_aggregate_runs_each_aggregator() {
        let summaries = GraphManager::default().aggregate(&snapshot()).unwrap();
        assert_eq!(summaries.cities[0], CityCount { city: "A".to_string(), count: 3 });
        assert_eq!(summaries.payment_types.len(), 2);
        assert_eq!(
            summaries.monthly_deliveries,
            vec![MonthlyDeliveryCount { year: 2017, month: 1, delivered_count: 1 }]
        );
    }

    #[test]
    fn test_monthly_summary_ignores_other_tables() {
        let mut other = snapshot();
        other.customers.clear();
        other.payments.clear();

        let manager = GraphManager::default();
        assert_eq!(
            manager.aggregate(&other).unwrap().monthly_deliveries,
            manager.aggregate(&snapshot()).unwrap().monthly_deliveries
        );
    }

    #[tokio::test]
    async fn test_generate_all_names_charts() {
        let charts = GraphManager::default().generate_all(&snapshot()).await.unwrap();
        assert_eq!(charts.cities.name, "top_cities");
        assert_eq!(charts.payment_types.name, "top_payment_types");
        assert_eq!(charts.monthly_deliveries.name, "monthly_deliveries");
        assert!(!charts.monthly_deliveries.svg.is_empty());
    }

    #[tokio::test]
    async fn test_generate_all_on_empty_snapshot() {
        let charts = GraphManager::default()
            .generate_all(&InputSnapshot::default())
            .await
            .unwrap();
        assert!(!charts.cities.svg.is_empty());
    }

    #[tokio::test]
    async fn test_bad_timestamp_aborts_generation() {
        let mut input = snapshot();
        input.orders.push(order("3", "delivered", "not a date"));
        let err = GraphManager::default().generate_all(&input).await.unwrap_err();
        assert!(err.is_input_schema());
    }
}
