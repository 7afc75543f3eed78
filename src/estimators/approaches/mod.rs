pub mod discrete;
pub mod ksg;

pub use discrete::binning::{BinConverter, JointRandomVariables};
pub use ksg::KsgMutualInformation;
