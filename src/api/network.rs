use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, response::ApiResponse, AppState},
    energy_network::{
        ComputationResult, ModelError, NetworkInputs, SliderRange, HARVEST_EFFICIENCY_SLIDER,
        PRIORITY_SLIDER, STORAGE_EFFICIENCY_SLIDER,
    },
    reference::{ReferenceMeasurement, REFERENCE_MEASUREMENTS},
    report::NetworkReport,
};

/// Request to compute the network output.
///
/// Every field is optional; omitted fields take the configured scenario
/// default, the same way UI controls start at their defaults.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ComputeRequest {
    #[validate(range(min = 0.0))]
    pub cell_voltage_v: Option<f64>,
    #[serde(rename = "cell_current_mA")]
    #[validate(range(min = 0.0))]
    pub cell_current_ma: Option<f64>,
    #[validate(range(min = 0i64, max = 4_294_967_295i64))]
    pub series_count: Option<i64>,
    #[validate(range(min = 0i64, max = 4_294_967_295i64))]
    pub parallel_count: Option<i64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub harvest_efficiency_pct: Option<f64>,
    #[validate(range(min = 0.0))]
    pub battery_voltage_v: Option<f64>,
    #[serde(rename = "battery_capacity_mAh")]
    #[validate(range(min = 0.0))]
    pub battery_capacity_mah: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub storage_efficiency_pct: Option<f64>,
    #[validate(range(min = 0.0))]
    pub load_power_w: Option<f64>,
    #[validate(range(max = 100))]
    pub priority_safety: Option<u32>,
    #[validate(range(max = 100))]
    pub priority_service: Option<u32>,
    #[validate(range(max = 100))]
    pub priority_comfort: Option<u32>,
}

impl ComputeRequest {
    /// Overlay the supplied fields on `defaults`
    pub fn apply(&self, defaults: &NetworkInputs) -> Result<NetworkInputs, ModelError> {
        let mut inputs = *defaults;

        if let Some(v) = self.cell_voltage_v {
            inputs.cell.voltage_v = v;
        }
        if let Some(v) = self.cell_current_ma {
            inputs.cell.current_ma = v;
        }
        if let Some(n) = self.series_count {
            inputs.topology.series_count = count("topology.series_count", n)?;
        }
        if let Some(n) = self.parallel_count {
            inputs.topology.parallel_count = count("topology.parallel_count", n)?;
        }
        if let Some(v) = self.harvest_efficiency_pct {
            inputs.harvest.harvest_efficiency_pct = v;
        }
        if let Some(v) = self.battery_voltage_v {
            inputs.storage.battery_voltage_v = v;
        }
        if let Some(v) = self.battery_capacity_mah {
            inputs.storage.battery_capacity_mah = v;
        }
        if let Some(v) = self.storage_efficiency_pct {
            inputs.storage.storage_efficiency_pct = v;
        }
        if let Some(v) = self.load_power_w {
            inputs.load.load_power_w = v;
        }
        if let Some(w) = self.priority_safety {
            inputs.weights.safety = w;
        }
        if let Some(w) = self.priority_service {
            inputs.weights.service = w;
        }
        if let Some(w) = self.priority_comfort {
            inputs.weights.comfort = w;
        }

        Ok(inputs)
    }
}

fn count(field: &'static str, value: i64) -> Result<u32, ModelError> {
    u32::try_from(value).map_err(|_| {
        ModelError::invalid(field, format!("must be a non-negative cell count (got {})", value))
    })
}

/// Computation response
#[derive(Debug, Serialize)]
pub struct ComputeResponse {
    pub inputs: NetworkInputs,
    pub result: ComputationResult,
    pub report: NetworkReport,
}

/// Ranges of the adjustable controls
#[derive(Debug, Serialize)]
pub struct InputRanges {
    pub harvest_efficiency_pct: SliderRange,
    pub storage_efficiency_pct: SliderRange,
    pub priority: SliderRange,
}

/// Defaults response
#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub scenario: NetworkInputs,
    pub ranges: InputRanges,
}

/// POST /api/v1/compute - Compute network output, storage estimates and priority split
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ApiResponse<ComputeResponse>>, ApiError> {
    request.validate()?;
    let inputs = request.apply(&state.cfg.scenario)?;

    let result = state.model.compute(&inputs)?;
    let report = NetworkReport::from_result(&result);

    tracing::info!(
        net_power_w = result.net_power_w,
        battery_energy_wh = result.battery_energy_wh,
        "Computed energy network"
    );

    Ok(Json(ApiResponse::success(ComputeResponse {
        inputs,
        result,
        report,
    })))
}

/// GET /api/v1/defaults - Get the default scenario and control ranges
pub async fn get_defaults(State(state): State<AppState>) -> Json<ApiResponse<DefaultsResponse>> {
    Json(ApiResponse::success(DefaultsResponse {
        scenario: state.cfg.scenario,
        ranges: InputRanges {
            harvest_efficiency_pct: HARVEST_EFFICIENCY_SLIDER,
            storage_efficiency_pct: STORAGE_EFFICIENCY_SLIDER,
            priority: PRIORITY_SLIDER,
        },
    }))
}

/// GET /api/v1/measurements - Get the reference measurement table
pub async fn get_measurements() -> Json<ApiResponse<[ReferenceMeasurement; 3]>> {
    Json(ApiResponse::success(REFERENCE_MEASUREMENTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let defaults = NetworkInputs::default();
        let inputs = ComputeRequest::default().apply(&defaults).unwrap();
        assert_eq!(inputs, defaults);
    }

    #[test]
    fn test_request_overrides_fields() {
        let request: ComputeRequest = serde_json::from_str(
            r#"{"series_count": 4, "cell_current_mA": 1.0, "priority_comfort": 0}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let inputs = request.apply(&NetworkInputs::default()).unwrap();
        assert_eq!(inputs.topology.series_count, 4);
        assert_eq!(inputs.topology.parallel_count, 2);
        assert_eq!(inputs.cell.current_ma, 1.0);
        assert_eq!(inputs.weights.comfort, 0);
    }

    #[test]
    fn test_negative_count_rejected() {
        let request = ComputeRequest {
            parallel_count: Some(-1),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let err = request.apply(&NetworkInputs::default()).unwrap_err();
        assert_eq!(err.field(), "topology.parallel_count");
    }

    #[test]
    fn test_count_bounds() {
        let largest: ComputeRequest =
            serde_json::from_str(r#"{"series_count": 4294967295}"#).unwrap();
        assert!(largest.validate().is_ok());
        let inputs = largest.apply(&NetworkInputs::default()).unwrap();
        assert_eq!(inputs.topology.series_count, u32::MAX);

        let oversized: ComputeRequest =
            serde_json::from_str(r#"{"series_count": 4294967296}"#).unwrap();
        assert!(oversized.validate().is_err());
        let err = oversized.apply(&NetworkInputs::default()).unwrap_err();
        assert_eq!(err.field(), "topology.series_count");
    }

    #[test]
    fn test_out_of_range_efficiency_rejected() {
        let request = ComputeRequest {
            harvest_efficiency_pct: Some(120.0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed = serde_json::from_str::<ComputeRequest>(r#"{"cell_voltage": 0.4}"#);
        assert!(parsed.is_err());
    }
}
