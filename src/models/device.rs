use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::ModelError;

/// A printer found by a device scan.
///
/// The advertised name doubles as the model name. The string form is
/// `name,address`, e.g. `GB01,AA:BB:CC:DD:EE:FF`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceId {
    pub name: String,
    pub address: String,
}

impl DeviceId {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Parses `name,address`, splitting on the first comma.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let (name, address) = s
            .split_once(',')
            .ok_or_else(|| ModelError::InvalidDevice(s.to_string()))?;
        let (name, address) = (name.trim(), address.trim());
        if name.is_empty() || address.is_empty() {
            return Err(ModelError::InvalidDevice(s.to_string()));
        }
        Ok(Self::new(name, address))
    }
}

impl FromStr for DeviceId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device() {
        let device = DeviceId::parse("GB01,AA:BB:CC:DD:EE:FF").unwrap();
        assert_eq!(device.name, "GB01");
        assert_eq!(device.address, "AA:BB:CC:DD:EE:FF");
        assert_eq!(device.to_string(), "GB01,AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let device: DeviceId = " MX05 , 11:22:33:44:55:66 ".parse().unwrap();
        assert_eq!(device, DeviceId::new("MX05", "11:22:33:44:55:66"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["GB01", ",AA:BB", "GB01,", "", " , "] {
            assert_eq!(
                DeviceId::parse(input),
                Err(ModelError::InvalidDevice(input.to_string())),
                "input {:?} should be rejected",
                input
            );
        }
    }
}
