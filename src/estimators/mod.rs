pub mod approaches;
pub mod information;
pub mod mutual_information;
pub mod traits;
pub mod utils;

pub use traits::{GlobalValue, LocalValues, MutualInformationEstimator, OptionalLocalValues};
