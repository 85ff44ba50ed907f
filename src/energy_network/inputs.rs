use serde::{Deserialize, Serialize};

use super::ModelError;

/// Electrical characteristics of a single plant-electrode cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSpec {
    /// Open-circuit voltage per cell (V)
    pub voltage_v: f64,

    /// Current per cell (mA)
    #[serde(rename = "current_mA", alias = "current_ma")]
    pub current_ma: f64,
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            voltage_v: 0.4,
            current_ma: 0.6,
        }
    }
}

impl CellSpec {
    pub fn new(voltage_v: f64, current_ma: f64) -> Self {
        Self {
            voltage_v,
            current_ma,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_negative("cell.voltage_v", self.voltage_v)?;
        require_non_negative("cell.current_mA", self.current_ma)?;
        Ok(())
    }
}

/// How cells are wired together.
///
/// Series cells add voltage, parallel strings add current. A zero count is
/// valid and simply yields zero output on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    pub series_count: u32,
    pub parallel_count: u32,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            series_count: 2,
            parallel_count: 2,
        }
    }
}

impl TopologyConfig {
    pub fn new(series_count: u32, parallel_count: u32) -> Self {
        Self {
            series_count,
            parallel_count,
        }
    }

    /// Total number of cells in the network
    pub fn cell_count(&self) -> u64 {
        u64::from(self.series_count) * u64::from(self.parallel_count)
    }
}

/// Regulator (harvesting circuit) losses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Share of raw power that survives regulation (0-100 %)
    pub harvest_efficiency_pct: f64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            harvest_efficiency_pct: 85.0,
        }
    }
}

impl HarvestConfig {
    pub fn new(harvest_efficiency_pct: f64) -> Self {
        Self {
            harvest_efficiency_pct,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_percent("harvest.harvest_efficiency_pct", self.harvest_efficiency_pct)
    }

    pub fn factor(&self) -> f64 {
        self.harvest_efficiency_pct / 100.0
    }
}

/// Buffer battery (or capacitor bank) specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub battery_voltage_v: f64,

    #[serde(rename = "battery_capacity_mAh", alias = "battery_capacity_mah")]
    pub battery_capacity_mah: f64,

    /// Round-trip charge/discharge efficiency (0-100 %)
    pub storage_efficiency_pct: f64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            battery_voltage_v: 3.7,
            battery_capacity_mah: 200.0,
            storage_efficiency_pct: 90.0,
        }
    }
}

impl StorageConfig {
    pub fn new(battery_voltage_v: f64, battery_capacity_mah: f64, storage_efficiency_pct: f64) -> Self {
        Self {
            battery_voltage_v,
            battery_capacity_mah,
            storage_efficiency_pct,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_negative("storage.battery_voltage_v", self.battery_voltage_v)?;
        require_non_negative("storage.battery_capacity_mAh", self.battery_capacity_mah)?;
        require_percent("storage.storage_efficiency_pct", self.storage_efficiency_pct)?;
        Ok(())
    }

    /// Usable stored energy (Wh) after storage losses
    pub fn energy_wh(&self) -> f64 {
        (self.battery_capacity_mah / 1000.0)
            * self.battery_voltage_v
            * (self.storage_efficiency_pct / 100.0)
    }
}

/// The single reference load used for runtime estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadSpec {
    /// Continuous draw (W)
    pub load_power_w: f64,
}

impl Default for LoadSpec {
    fn default() -> Self {
        Self { load_power_w: 0.1 }
    }
}

impl LoadSpec {
    pub fn new(load_power_w: f64) -> Self {
        Self { load_power_w }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_negative("load.load_power_w", self.load_power_w)
    }
}

/// Relative importance of each load class (0-100 each).
///
/// Weights are proportions, not watts: (50, 30, 20) and (5, 3, 2) split
/// power identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    pub safety: u32,
    pub service: u32,
    pub comfort: u32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            safety: 50,
            service: 30,
            comfort: 20,
        }
    }
}

impl PriorityWeights {
    pub const MAX_WEIGHT: u32 = 100;

    pub fn new(safety: u32, service: u32, comfort: u32) -> Self {
        Self {
            safety,
            service,
            comfort,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [
            ("weights.safety", self.safety),
            ("weights.service", self.service),
            ("weights.comfort", self.comfort),
        ] {
            if value > Self::MAX_WEIGHT {
                return Err(ModelError::invalid(
                    field,
                    format!("must be between 0 and {} (got {})", Self::MAX_WEIGHT, value),
                ));
            }
        }
        Ok(())
    }

    pub fn sum(&self) -> u32 {
        self.safety
            .saturating_add(self.service)
            .saturating_add(self.comfort)
    }

    pub fn is_all_zero(&self) -> bool {
        self.sum() == 0
    }

    /// Divisor used for normalisation; never zero
    pub fn divisor(&self) -> u32 {
        self.sum().max(1)
    }
}

/// Full input set for one computation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInputs {
    pub cell: CellSpec,
    pub topology: TopologyConfig,
    pub harvest: HarvestConfig,
    pub storage: StorageConfig,
    pub load: LoadSpec,
    pub weights: PriorityWeights,
}

impl NetworkInputs {
    pub fn new(
        cell: CellSpec,
        topology: TopologyConfig,
        harvest: HarvestConfig,
        storage: StorageConfig,
        load: LoadSpec,
        weights: PriorityWeights,
    ) -> Self {
        Self {
            cell,
            topology,
            harvest,
            storage,
            load,
            weights,
        }
    }

    /// Reject any negative, non-finite or out-of-range field
    pub fn validate(&self) -> Result<(), ModelError> {
        self.cell.validate()?;
        self.harvest.validate()?;
        self.storage.validate()?;
        self.load.validate()?;
        self.weights.validate()?;
        Ok(())
    }
}

/// Range and starting value of a UI input control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

pub const HARVEST_EFFICIENCY_SLIDER: SliderRange = SliderRange { min: 50.0, max: 100.0 };
pub const STORAGE_EFFICIENCY_SLIDER: SliderRange = SliderRange { min: 50.0, max: 100.0 };
pub const PRIORITY_SLIDER: SliderRange = SliderRange { min: 0.0, max: 100.0 };

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::invalid(field, format!("must be finite (got {})", value)));
    }
    if value < 0.0 {
        return Err(ModelError::invalid(field, format!("cannot be negative (got {})", value)));
    }
    Ok(())
}

fn require_percent(field: &'static str, value: f64) -> Result<(), ModelError> {
    require_non_negative(field, value)?;
    if value > 100.0 {
        return Err(ModelError::invalid(
            field,
            format!("must be between 0 and 100 (got {})", value),
        ));
    }
    Ok(())
}
