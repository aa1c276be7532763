//! Dashboard run: load the extracts, aggregate, render and publish the page.

use crate::{DashboardResult, DisplaySurface, HtmlPage};
use ecomviz_config::Config;
use ecomviz_graphs::{DataLoader, GraphManager, RenderedCharts};
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Subsection titles, in page order.
pub const SECTION_TITLES: [&str; 3] = [
    "Cities by Number of Customers",
    "Top Payment Types Used",
    "Total Orders by Month (2016-2018)",
];

/// One dashboard run over a fixed configuration.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: Config,
}

impl Dashboard {
    /// Creates a dashboard for the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Places the header and the three charts on `surface`.
    pub fn compose<S: DisplaySurface>(
        &self,
        surface: &mut S,
        charts: &RenderedCharts,
    ) -> DashboardResult<()> {
        surface.header(&self.config.output.title);

        let [cities, payment_types, monthly] = SECTION_TITLES;
        surface.subheader(cities);
        surface.chart(&charts.cities.svg)?;
        surface.subheader(payment_types);
        surface.chart(&charts.payment_types.svg)?;
        surface.subheader(monthly);
        surface.chart(&charts.monthly_deliveries.svg)?;
        Ok(())
    }

    /// Builds the HTML page without writing it.
    #[instrument(skip(self))]
    pub async fn build_page(&self) -> DashboardResult<String> {
        let snapshot = DataLoader::new(self.config.inputs.clone()).load().await?;
        let charts = GraphManager::new(self.config.charts.clone())
            .generate_all(&snapshot)
            .await?;

        let mut page = HtmlPage::new(&self.config.output.title);
        self.compose(&mut page, &charts)?;
        Ok(page.finish())
    }

    /// Runs the whole pipeline and writes the page. Nothing is written unless
    /// every step succeeded. Returns the path of the written page.
    pub async fn run(&self) -> DashboardResult<PathBuf> {
        let page = match self.build_page().await {
            Ok(page) => page,
            Err(e) => {
                error!("Dashboard generation failed: {}", e);
                return Err(e);
            }
        };

        let path = self.config.output.path.clone();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, page).await?;

        info!(path = %path.display(), "Dashboard written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecomviz_graphs::RenderedChart;

    /// Records every call made on the surface.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl DisplaySurface for RecordingSurface {
        fn header(&mut self, text: &str) {
            self.calls.push(format!("header:{text}"));
        }

        fn subheader(&mut self, text: &str) {
            self.calls.push(format!("subheader:{text}"));
        }

        fn chart(&mut self, svg: &[u8]) -> DashboardResult<()> {
            self.calls
                .push(format!("chart:{}", String::from_utf8_lossy(svg)));
            Ok(())
        }
    }

    fn chart(name: &'static str) -> RenderedChart {
        RenderedChart {
            name,
            svg: name.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_compose_order() {
        let charts = RenderedCharts {
            cities: chart("top_cities"),
            payment_types: chart("top_payment_types"),
            monthly_deliveries: chart("monthly_deliveries"),
        };
        let mut surface = RecordingSurface::default();

        Dashboard::new(Config::default())
            .compose(&mut surface, &charts)
            .unwrap();

        assert_eq!(
            surface.calls,
            vec![
                "header:E-Commerce Public Analysis",
                "subheader:Cities by Number of Customers",
                "chart:top_cities",
                "subheader:Top Payment Types Used",
                "chart:top_payment_types",
                "subheader:Total Orders by Month (2016-2018)",
                "chart:monthly_deliveries",
            ]
        );
    }
}
