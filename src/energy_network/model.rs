use tracing::{debug, warn};

use super::{
    CellSpec, ComputationResult, HarvestConfig, LoadSpec, ModelError, NetworkInputs, PowerByPriority,
    PriorityWeights, StorageConfig, TopologyConfig,
};

/// Energy Network Model
///
/// Turns cell parameters, wiring, losses and load priorities into the
/// network's electrical output, storable energy, charge/runtime estimates
/// and a proportional split of net power across load classes.
///
/// The model holds no state. Every call is independent and the same inputs
/// always produce the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyNetworkModel;

impl EnergyNetworkModel {
    pub fn new() -> Self {
        Self
    }

    /// Compute the network output for the given inputs
    ///
    /// Algorithm steps:
    /// 1. Series count multiplies cell voltage
    /// 2. Parallel count multiplies cell current
    /// 3. Raw power = V * I
    /// 4. Net power = raw power after harvest losses
    /// 5. Storable energy after storage losses
    /// 6. Charge time from net power (0.0 if there is no net power)
    /// 7. Runtime of the reference load (0.0 if the load draws nothing)
    /// 8. Split net power by priority weight
    pub fn compute(&self, inputs: &NetworkInputs) -> Result<ComputationResult, ModelError> {
        inputs.validate()?;

        // Steps 1-3: network output
        let total_voltage_v = inputs.cell.voltage_v * f64::from(inputs.topology.series_count);
        let total_current_ma = inputs.cell.current_ma * f64::from(inputs.topology.parallel_count);
        let total_current_a = total_current_ma / 1000.0;
        let raw_power_w = total_voltage_v * total_current_a;

        // Step 4: regulator losses
        let net_power_w = raw_power_w * inputs.harvest.factor();

        // Step 5: storable energy
        let battery_energy_wh = inputs.storage.energy_wh();

        // Finite inputs can still overflow f64 when multiplied together
        let products = [
            total_voltage_v,
            total_current_ma,
            raw_power_w,
            net_power_w,
            battery_energy_wh,
        ];
        if products.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::invalid(
                "inputs",
                "values too large: result overflows",
            ));
        }

        // Steps 6-7: charge and runtime estimates
        let charge_time_hours = hours_or_zero(battery_energy_wh, net_power_w);
        let runtime_hours = hours_or_zero(battery_energy_wh, inputs.load.load_power_w);

        // Step 8: priority split
        let power_by_priority = split_by_priority(net_power_w, &inputs.weights);
        let priority_guard_active = inputs.weights.is_all_zero();

        if priority_guard_active && net_power_w > 0.0 {
            warn!(
                net_power_w,
                "all priority weights are zero; net power left unallocated"
            );
        }

        debug!(
            series = inputs.topology.series_count,
            parallel = inputs.topology.parallel_count,
            cells = inputs.topology.cell_count(),
            total_voltage_v,
            total_current_ma,
            net_power_w,
            battery_energy_wh,
            "energy network computed"
        );

        Ok(ComputationResult {
            total_voltage_v,
            total_current_ma,
            total_current_a,
            raw_power_w,
            net_power_w,
            battery_energy_wh,
            charge_time_hours,
            runtime_hours,
            power_by_priority,
            priority_guard_active,
        })
    }
}

/// Compute the network output from its individual input records
pub fn compute(
    cell: CellSpec,
    topology: TopologyConfig,
    harvest: HarvestConfig,
    storage: StorageConfig,
    load: LoadSpec,
    weights: PriorityWeights,
) -> Result<ComputationResult, ModelError> {
    EnergyNetworkModel.compute(&NetworkInputs::new(cell, topology, harvest, storage, load, weights))
}

/// energy / power, reported as 0.0 when there is no power to divide by or
/// the power is so small that the quotient is not representable
fn hours_or_zero(energy_wh: f64, power_w: f64) -> f64 {
    if power_w <= 0.0 {
        return 0.0;
    }
    let hours = energy_wh / power_w;
    if hours.is_finite() {
        hours
    } else {
        0.0
    }
}

/// Proportional split of `net_power_w`.
///
/// With all weights at zero the divisor is clamped to 1, so every share is
/// zero and the split sums to 0 rather than `net_power_w`.
fn split_by_priority(net_power_w: f64, weights: &PriorityWeights) -> PowerByPriority {
    let divisor = f64::from(weights.divisor());
    let share = |weight: u32| net_power_w * (f64::from(weight) / divisor);

    PowerByPriority {
        safety: share(weights.safety),
        service: share(weights.service),
        comfort: share(weights.comfort),
    }
}
