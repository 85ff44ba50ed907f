use serde::Serialize;

use crate::energy_network::{ComputationResult, PriorityClass};

/// A single headline figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// One bar of the priority chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriorityBar {
    pub class: PriorityClass,
    pub power_w: f64,
}

/// Display-ready view of a computation: four metrics, a summary line and
/// one bar per priority class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub metrics: Vec<Metric>,
    pub summary: String,
    pub priority_chart: Vec<PriorityBar>,
    pub unallocated_power_w: f64,
}

impl NetworkReport {
    pub fn from_result(result: &ComputationResult) -> Self {
        let metrics = vec![
            Metric {
                label: "Total voltage",
                value: result.total_voltage_v,
                unit: "V",
            },
            Metric {
                label: "Total current",
                value: result.total_current_ma,
                unit: "mA",
            },
            Metric {
                label: "Net power",
                value: result.net_power_w,
                unit: "W",
            },
            Metric {
                label: "Storage energy",
                value: result.battery_energy_wh,
                unit: "Wh",
            },
        ];

        let priority_chart = result
            .power_by_priority
            .iter()
            .map(|(class, power_w)| PriorityBar { class, power_w })
            .collect();

        Self {
            metrics,
            summary: summary_line(result),
            priority_chart,
            unallocated_power_w: result.unallocated_power_w(),
        }
    }
}

fn summary_line(result: &ComputationResult) -> String {
    format!(
        "Estimated charge time: {}; runtime at reference load: {}",
        hours_label(result.charge_time_hours),
        hours_label(result.runtime_hours)
    )
}

// 0.0 means the estimate could not be computed
fn hours_label(hours: f64) -> String {
    if hours > 0.0 {
        format!("{:.2} h", hours)
    } else {
        "n/a".to_string()
    }
}
