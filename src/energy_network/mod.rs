/// Energy Network Model
///
/// Static, single-shot calculation of what a network of plant microbial fuel
/// cells delivers: series/parallel output, regulator and storage losses,
/// charge and runtime estimates, and a priority-weighted power split.

pub mod error;
pub mod inputs;
pub mod model;
pub mod result;

pub use error::ModelError;
pub use inputs::{
    CellSpec, HarvestConfig, LoadSpec, NetworkInputs, PriorityWeights, SliderRange, StorageConfig,
    TopologyConfig, HARVEST_EFFICIENCY_SLIDER, PRIORITY_SLIDER, STORAGE_EFFICIENCY_SLIDER,
};
pub use model::{compute, EnergyNetworkModel};
pub use result::{ComputationResult, PowerByPriority, PriorityClass};
