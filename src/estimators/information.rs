use std::fmt;
use std::str::FromStr;

use ndarray::ArrayView1;
use tracing::debug;

use crate::data::SensorimotorPath;
use crate::error::{InfoError, Result};
use crate::estimators::approaches::discrete::binning::BinConverter;
use crate::estimators::approaches::discrete::uncertainty::uncertainty;
use crate::estimators::utils::ln_base;

/// Information metrics computed from the sensor and actuator traces of a single system.
///
/// Only what a real robot can access is used: its own observations and actions, never
/// the world state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoType {
    /// Klyubin et al., channel capacity from actions to future sensations.
    Empowerment,
    InformationToGo,
    /// Polani et al.
    LookaheadRelevantInformation,
    /// Friston, a bound on surprise.
    FreeEnergy,
    /// Summed uncertainty of every binned sensor and actuator component.
    SensorimotorEntropy,
    ExcessEntropy,
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InfoType::Empowerment => "empowerment",
            InfoType::InformationToGo => "information_to_go",
            InfoType::LookaheadRelevantInformation => "lookahead_relevant_information",
            InfoType::FreeEnergy => "free_energy",
            InfoType::SensorimotorEntropy => "sensorimotor_entropy",
            InfoType::ExcessEntropy => "excess_entropy",
        };
        write!(f, "{name}")
    }
}

impl FromStr for InfoType {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "empowerment" => Ok(InfoType::Empowerment),
            "information_to_go" => Ok(InfoType::InformationToGo),
            "lookahead_relevant_information" => Ok(InfoType::LookaheadRelevantInformation),
            "free_energy" => Ok(InfoType::FreeEnergy),
            "sensorimotor_entropy" => Ok(InfoType::SensorimotorEntropy),
            "excess_entropy" => Ok(InfoType::ExcessEntropy),
            other => Err(InfoError::UnsupportedConfiguration(format!(
                "unknown information type '{other}'"
            ))),
        }
    }
}

/// Dispatches an [`InfoType`] over a borrowed sensorimotor path.
///
/// Values are in nats by default. `with_base(10.0)` reproduces base-10 figures
/// (multiply nats by 1/ln 10); `with_base(2.0)` gives bits.
#[derive(Debug, Clone)]
pub struct Information<'a> {
    info_type: InfoType,
    path: &'a SensorimotorPath,
    converter: BinConverter,
    ln_base: f64,
}

impl<'a> Information<'a> {
    pub fn new(path: &'a SensorimotorPath, info_type: InfoType) -> Self {
        Self {
            info_type,
            path,
            converter: BinConverter::default(),
            ln_base: 1.0,
        }
    }

    /// Discretization used to turn continuous traces into distributions.
    pub fn with_converter(mut self, converter: BinConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Set logarithm base (default e). Fails unless the base is positive, finite and != 1.
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.ln_base = ln_base(base)?;
        Ok(self)
    }

    pub fn with_info_type(mut self, info_type: InfoType) -> Self {
        self.info_type = info_type;
        self
    }

    pub fn info_type(&self) -> InfoType {
        self.info_type
    }

    pub fn converter(&self) -> &BinConverter {
        &self.converter
    }

    /// Uncertainty of a normalized probability vector in the configured base.
    pub fn uncertainty(&self, p: ArrayView1<'_, f64>) -> f64 {
        uncertainty(p) / self.ln_base
    }

    pub fn calculate(&self) -> Result<f64> {
        match self.info_type {
            InfoType::SensorimotorEntropy => self.sensorimotor_entropy(),
            other => Err(InfoError::NotImplemented(format!("information type '{other}'"))),
        }
    }

    fn sensorimotor_entropy(&self) -> Result<f64> {
        let rv = self.converter.convert(self.path)?;
        let h_sensor: f64 = rv.sensor.rows().into_iter().map(|row| self.uncertainty(row)).sum();
        let h_motor: f64 = rv.motor.rows().into_iter().map(|row| self.uncertainty(row)).sum();
        debug!(h_sensor, h_motor, bins = self.converter.nof_bins(), "sensorimotor entropy");
        Ok(h_sensor + h_motor)
    }
}
