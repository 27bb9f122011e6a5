//! PID 튜닝(Ziegler-Nichols 한계 감도법)과 폐루프 시뮬레이션 모듈 모음.

pub mod simulation;
pub mod store;
pub mod tuning;

pub use simulation::{
    simulate, simulate_with, PlantParameters, SimulationSample, SimulationSettings,
};
pub use store::{ConfigStore, StoreError};
pub use tuning::{compute_gains, ControllerGains, TuningError, TuningInputs, TuningRule};
