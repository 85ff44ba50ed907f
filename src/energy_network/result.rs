use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Load class competing for harvested power
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PriorityClass {
    Safety,
    Service,
    Comfort,
}

/// Net power allocated to each load class (W)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerByPriority {
    pub safety: f64,
    pub service: f64,
    pub comfort: f64,
}

impl PowerByPriority {
    pub fn get(&self, class: PriorityClass) -> f64 {
        match class {
            PriorityClass::Safety => self.safety,
            PriorityClass::Service => self.service,
            PriorityClass::Comfort => self.comfort,
        }
    }

    pub fn total(&self) -> f64 {
        self.safety + self.service + self.comfort
    }

    /// Shares in display order: safety, service, comfort
    pub fn iter(&self) -> impl Iterator<Item = (PriorityClass, f64)> + '_ {
        PriorityClass::iter().map(move |class| (class, self.get(class)))
    }
}

/// Output of a single network computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    pub total_voltage_v: f64,

    #[serde(rename = "total_current_mA")]
    pub total_current_ma: f64,

    pub total_current_a: f64,

    /// Electrical power before regulation losses
    pub raw_power_w: f64,

    /// Usable power after harvest efficiency
    pub net_power_w: f64,

    pub battery_energy_wh: f64,

    /// Hours to fill storage from net power; 0.0 when net power is zero
    pub charge_time_hours: f64,

    /// Hours storage sustains the reference load; 0.0 when the load is zero
    pub runtime_hours: f64,

    pub power_by_priority: PowerByPriority,

    /// All weights were zero, so nothing was allocated
    pub priority_guard_active: bool,
}

impl ComputationResult {
    /// Net power not assigned to any load class
    pub fn unallocated_power_w(&self) -> f64 {
        (self.net_power_w - self.power_by_priority.total()).max(0.0)
    }

    /// True when every numeric field is finite
    pub fn is_finite(&self) -> bool {
        [
            self.total_voltage_v,
            self.total_current_ma,
            self.total_current_a,
            self.raw_power_w,
            self.net_power_w,
            self.battery_energy_wh,
            self.charge_time_hours,
            self.runtime_hours,
            self.power_by_priority.safety,
            self.power_by_priority.service,
            self.power_by_priority.comfort,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl fmt::Display for ComputationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network {{ V: {:.3}V, I: {:.3}mA, Raw: {:.6}W, Net: {:.6}W, Storage: {:.3}Wh, Charge: {:.2}h, Runtime: {:.2}h }}",
            self.total_voltage_v,
            self.total_current_ma,
            self.raw_power_w,
            self.net_power_w,
            self.battery_energy_wh,
            self.charge_time_hours,
            self.runtime_hours,
        )
    }
}
