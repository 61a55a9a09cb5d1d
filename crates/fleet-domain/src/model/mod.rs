//! Domain model types

pub mod evaluation;
pub mod tariffs;
pub mod trip_request;
pub mod vehicle_profile;
pub mod weights;

pub use evaluation::{BestPicks, CargoFit, EvaluationResult, Rejection, TripMetrics, VehicleRow};
pub use tariffs::EnergyTariffs;
pub use trip_request::{MarginWindow, TripRequest};
pub use vehicle_profile::{Catalog, VehicleProfile};
pub use weights::{Criterion, CriterionWeights};
