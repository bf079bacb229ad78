use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Role of a cluster in a ksctl setup.
///
/// Anything other than `host` or `member` is kept verbatim in `Unknown`
/// so that it is written back unchanged and only rejected when a cluster
/// is resolved for use.
#[derive(Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Debug)]
#[serde(from = "String", into = "String")]
pub enum ClusterType {
    Host,
    Member,
    Unknown(String),
}

impl ClusterType {
    pub fn is_known(&self) -> bool {
        !matches!(self, ClusterType::Unknown(_))
    }

    pub fn the_other_type(&self) -> ClusterType {
        match self {
            ClusterType::Host => ClusterType::Member,
            ClusterType::Member => ClusterType::Host,
            ClusterType::Unknown(value) => ClusterType::Unknown(value.clone()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClusterType::Host => "host",
            ClusterType::Member => "member",
            ClusterType::Unknown(value) => value,
        }
    }
}

impl From<&str> for ClusterType {
    fn from(value: &str) -> Self {
        match value {
            "host" => ClusterType::Host,
            "member" => ClusterType::Member,
            other => ClusterType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ClusterType {
    fn from(value: String) -> Self {
        ClusterType::from(value.as_str())
    }
}

impl From<ClusterType> for String {
    fn from(value: ClusterType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ClusterType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClusterType::from(s))
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
