//! Aggregation of the input tables into the summary tables drawn by the charts

use crate::{CityCount, MonthlyDeliveryCount, PaymentTypeCount};
use chrono::Datelike;
use ecomviz_common::{
    parse_purchase_timestamp, CustomerRecord, EcomError, OrderRecord, PaymentRecord, Result,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument};

/// Trait for aggregating input records into a summary table
pub trait DataAggregator<T> {
    /// Record type consumed by this aggregator
    type Record;

    /// Aggregate `records` into summary rows. The input is only read.
    fn aggregate(&self, records: &[Self::Record]) -> Result<Vec<T>>;
}

/// Counts occurrences of each non-empty key, largest count first.
///
/// Keys with equal counts keep the order in which they were first seen.
fn count_by_key<'a, I>(keys: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, u64)> = Vec::new();

    for key in keys.into_iter().flatten().filter(|key| !key.is_empty()) {
        match positions.get(key) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(key, count)| (key.to_string(), count))
        .collect()
}

/// Counts customers per city
#[derive(Debug, Default, Clone, Copy)]
pub struct CityAggregator;

impl DataAggregator<CityCount> for CityAggregator {
    type Record = CustomerRecord;

    #[instrument(skip(self, records), fields(rows = records.len()))]
    fn aggregate(&self, records: &[CustomerRecord]) -> Result<Vec<CityCount>> {
        let result: Vec<CityCount> = count_by_key(records.iter().map(|r| r.customer_city.as_deref()))
            .into_iter()
            .map(|(city, count)| CityCount { city, count })
            .collect();

        debug!("Aggregated {} distinct cities", result.len());
        Ok(result)
    }
}

/// Counts payment records per payment type
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentTypeAggregator;

impl DataAggregator<PaymentTypeCount> for PaymentTypeAggregator {
    type Record = PaymentRecord;

    #[instrument(skip(self, records), fields(rows = records.len()))]
    fn aggregate(&self, records: &[PaymentRecord]) -> Result<Vec<PaymentTypeCount>> {
        let result: Vec<PaymentTypeCount> =
            count_by_key(records.iter().map(|r| r.payment_type.as_deref()))
                .into_iter()
                .map(|(payment_type, count)| PaymentTypeCount {
                    payment_type,
                    count,
                })
                .collect();

        debug!("Aggregated {} distinct payment types", result.len());
        Ok(result)
    }
}

/// Counts distinct delivered orders per purchase month
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthlyDeliveryAggregator;

impl DataAggregator<MonthlyDeliveryCount> for MonthlyDeliveryAggregator {
    type Record = OrderRecord;

    /// Only delivered orders are considered, and only their timestamps are
    /// parsed. A delivered order with a missing or unreadable timestamp fails
    /// the whole aggregation.
    #[instrument(skip(self, records), fields(rows = records.len()))]
    fn aggregate(&self, records: &[OrderRecord]) -> Result<Vec<MonthlyDeliveryCount>> {
        let mut buckets: BTreeMap<(i32, u32), HashSet<&str>> = BTreeMap::new();
        let mut delivered = 0usize;

        for order in records.iter().filter(|order| order.is_delivered()) {
            delivered += 1;
            let raw = order.order_purchase_timestamp.as_deref().unwrap_or_default();
            let purchased = parse_purchase_timestamp(raw).ok_or_else(|| {
                EcomError::input_schema(format!(
                    "order '{}' has an invalid purchase timestamp '{}'",
                    order.order_id.as_deref().unwrap_or_default(),
                    raw
                ))
            })?;

            let Some(order_id) = order.order_id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };

            buckets
                .entry((purchased.year(), purchased.month()))
                .or_default()
                .insert(order_id);
        }

        let result: Vec<MonthlyDeliveryCount> = buckets
            .into_iter()
            .map(|((year, month), orders)| MonthlyDeliveryCount {
                year,
                month,
                delivered_count: orders.len() as u64,
            })
            .collect();

        debug!(
            "Aggregated {} delivered rows into {} monthly buckets",
            delivered,
            result.len()
        );
        Ok(result)
    }
}

/// Distinct years present in a monthly summary, ascending.
pub fn years(rows: &[MonthlyDeliveryCount]) -> Vec<i32> {
    rows.iter()
        .map(|row| row.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Group a monthly summary by year, each year's `(month, count)` pairs sorted by month.
pub fn group_by_year(rows: &[MonthlyDeliveryCount]) -> BTreeMap<i32, Vec<(u32, u64)>> {
    let mut grouped: BTreeMap<i32, Vec<(u32, u64)>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.year)
            .or_default()
            .push((row.month, row.delivered_count));
    }

    for months in grouped.values_mut() {
        months.sort_by_key(|&(month, _)| month);
    }

    grouped
}
