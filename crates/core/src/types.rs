//! Shared value types of the app directory model

use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// An open-ended JSON object.
///
/// Backed by a sorted map, so equality ignores insertion order and
/// serialization always emits keys lexicographically.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Geographic region an app is deployed to.
///
/// Values read from disk keep their exact spelling: a code that is not one
/// of the known regions, or a known code in another case (`"us-va"`), is
/// carried as [`Location::Other`] and written back unchanged. Only
/// [`FromStr`], used for command-line input, matches known codes
/// case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Location {
    #[default]
    Unset,
    UsVirginia,
    UsOregon,
    Frankfurt,
    Ireland,
    Sydney,
    Mumbai,
    Singapore,
    Other(String),
}

impl Location {
    pub const ALL: [Location; 7] = [
        Self::UsVirginia,
        Self::UsOregon,
        Self::Frankfurt,
        Self::Ireland,
        Self::Sydney,
        Self::Mumbai,
        Self::Singapore,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::UsVirginia => "US-VA",
            Self::UsOregon => "US-OR",
            Self::Frankfurt => "DE-FF",
            Self::Ireland => "IE",
            Self::Sydney => "AU",
            Self::Mumbai => "IN-MB",
            Self::Singapore => "SG",
            Self::Other(code) => code,
        }
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let known = Self::ALL
            .into_iter()
            .find(|location| location.as_str().eq_ignore_ascii_case(s));
        Ok(known.unwrap_or_else(|| Self::from(s.to_string())))
    }
}

impl From<String> for Location {
    fn from(code: String) -> Self {
        if code.is_empty() {
            return Self::Unset;
        }
        Self::ALL
            .into_iter()
            .find(|location| location.as_str() == code)
            .unwrap_or(Self::Other(code))
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        match location {
            Location::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// Whether an app is served from one region or many
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeploymentModel {
    #[default]
    Unset,
    Global,
    Local,
}

impl DeploymentModel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Global => "GLOBAL",
            Self::Local => "LOCAL",
        }
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl Display for DeploymentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "" => Ok(Self::Unset),
            "GLOBAL" => Ok(Self::Global),
            "LOCAL" => Ok(Self::Local),
            _ => Err(Error::configuration(format!(
                "unknown deployment model: {s}"
            ))),
        }
    }
}

impl TryFrom<String> for DeploymentModel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DeploymentModel> for String {
    fn from(model: DeploymentModel) -> Self {
        model.as_str().to_string()
    }
}

/// On-disk schema generation of an app directory.
///
/// Unknown generations are carried through untouched so newer directories
/// can still be loaded and written back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ConfigVersion {
    #[default]
    Unset,
    V20180301,
    V20200603,
    V20210101,
    Other(u32),
}

impl ConfigVersion {
    pub const LATEST: ConfigVersion = ConfigVersion::V20210101;

    pub const fn as_u32(&self) -> u32 {
        match self {
            Self::Unset => 0,
            Self::V20180301 => 20180301,
            Self::V20200603 => 20200603,
            Self::V20210101 => 20210101,
            Self::Other(v) => *v,
        }
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<u32> for ConfigVersion {
    fn from(v: u32) -> Self {
        match v {
            0 => Self::Unset,
            20180301 => Self::V20180301,
            20200603 => Self::V20200603,
            20210101 => Self::V20210101,
            other => Self::Other(other),
        }
    }
}

impl From<ConfigVersion> for u32 {
    fn from(v: ConfigVersion) -> Self {
        v.as_u32()
    }
}

impl Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for ConfigVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self::from)
            .map_err(|_| Error::configuration(format!("invalid config version: {s}")))
    }
}
