use serde::Serialize;

use crate::energy_network::CellSpec;

/// A bench measurement from a single planted pot or network
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceMeasurement {
    pub plant: &'static str,
    pub soil: &'static str,
    pub voltage_v: f64,
    #[serde(rename = "current_mA")]
    pub current_ma: f64,
}

impl ReferenceMeasurement {
    /// Treat the measurement as a single cell
    pub fn as_cell(&self) -> CellSpec {
        CellSpec::new(self.voltage_v, self.current_ma)
    }
}

/// Illustrative measurements shown alongside the model.
///
/// Static data only; nothing here is computed.
pub const REFERENCE_MEASUREMENTS: [ReferenceMeasurement; 3] = [
    ReferenceMeasurement {
        plant: "spinach",
        soil: "sandy",
        voltage_v: 0.4,
        current_ma: 0.6,
    },
    ReferenceMeasurement {
        plant: "beans",
        soil: "organic",
        voltage_v: 0.8,
        current_ma: 1.2,
    },
    ReferenceMeasurement {
        plant: "plant network",
        soil: "organic + organic irrigation",
        voltage_v: 1.6,
        current_ma: 2.4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy_network::{EnergyNetworkModel, NetworkInputs, TopologyConfig};

    #[test]
    fn test_rows_are_valid_cells() {
        for row in REFERENCE_MEASUREMENTS.iter() {
            assert!(row.as_cell().validate().is_ok(), "{} row invalid", row.plant);
        }
    }

    #[test]
    fn test_network_row_matches_four_by_four_spinach() {
        let mut inputs = NetworkInputs::default();
        inputs.cell = REFERENCE_MEASUREMENTS[0].as_cell();
        inputs.topology = TopologyConfig::new(4, 4);

        let result = EnergyNetworkModel::new().compute(&inputs).unwrap();
        let network = REFERENCE_MEASUREMENTS[2];
        assert!((result.total_voltage_v - network.voltage_v).abs() < 1e-9);
        assert!((result.total_current_ma - network.current_ma).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(REFERENCE_MEASUREMENTS).unwrap();
        assert_eq!(json.as_array().map(|rows| rows.len()), Some(3));
        assert_eq!(json[1]["plant"], "beans");
        assert_eq!(json[1]["current_mA"], 1.2);
    }
}
