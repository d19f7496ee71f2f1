//! Dashboard overview: hardcoded stats and metric bars. There is no scan
//! history store yet, so the values are the authored placeholders the UI
//! has always shown.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBar {
    pub label: &'static str,
    pub value: u8,
    pub max_value: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub metrics: Vec<MetricBar>,
}

pub fn overview() -> DashboardOverview {
    DashboardOverview {
        stats: vec![
            StatCard {
                title: "Total Scans",
                value: "12",
                subtitle: "This month",
            },
            StatCard {
                title: "Health Score",
                value: "85%",
                subtitle: "Excellent",
            },
            StatCard {
                title: "Last Scan",
                value: "2d",
                subtitle: "ago",
            },
            StatCard {
                title: "Alerts",
                value: "0",
                subtitle: "Active",
            },
        ],
        metrics: vec![
            MetricBar {
                label: "Visual Acuity",
                value: 85,
                max_value: 100,
            },
            MetricBar {
                label: "Color Vision",
                value: 92,
                max_value: 100,
            },
            MetricBar {
                label: "Eye Movement",
                value: 78,
                max_value: 100,
            },
            MetricBar {
                label: "Overall Health",
                value: 85,
                max_value: 100,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_stay_in_range() {
        let overview = overview();
        assert_eq!(overview.stats.len(), 4);
        assert_eq!(overview.metrics.len(), 4);
        for metric in &overview.metrics {
            assert!(metric.value <= metric.max_value);
        }
    }
}
