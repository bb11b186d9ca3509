//! KPI query responses.
//!
//! Metric queries return a tabular result: rows grouped by zero or more
//! dimensions, each cell carrying its value as a string alongside the
//! value's declared type.

use courier_model::shape;

shape! {
    /// One cell of a KPI result row.
    pub struct ResultRowValue {
        /// Name of the metric or grouping dimension.
        "Key" key: string,
        /// Declared type of the value, e.g. `Double` or `String`.
        "Type" value_type: string,
        /// The value itself, rendered as a string.
        "Value" value: string,
    }
}

shape! {
    /// One row of a KPI result.
    pub struct ResultRow {
        /// The grouping dimensions this row aggregates over.
        "GroupedBys" grouped_bys: record_list ResultRowValue,
        /// The metric values for this row.
        "Values" values: record_list ResultRowValue,
    }
}

shape! {
    /// The tabular payload of a KPI query.
    pub struct BaseKpiResult {
        "Rows" rows: record_list ResultRow,
    }
}

shape! {
    /// Result of a KPI query scoped to one campaign and date range.
    pub struct CampaignDateRangeKpiResponse {
        "ApplicationId" application_id: string,
        "CampaignId" campaign_id: string,
        /// End of the queried range, RFC 3339.
        "EndTime" end_time: timestamp,
        /// Name of the queried metric, e.g. `unique-deliveries`.
        "KpiName" kpi_name: string,
        "KpiResult" kpi_result: record BaseKpiResult,
        /// Continuation token for the next page of rows.
        "NextToken" next_token: string,
        /// Start of the queried range, RFC 3339.
        "StartTime" start_time: timestamp,
    }
}
