use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The capability a permission query is about.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionName {
    Geolocation,
}

impl PermissionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionName::Geolocation => "geolocation",
        }
    }
}

impl fmt::Display for PermissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access-control value the browser holds for a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Access was already allowed.
    Granted,
    /// The user will be asked when the capability is used.
    Prompt,
    /// Access was refused.
    Denied,
}

impl PermissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionState::Granted => "granted",
            PermissionState::Prompt => "prompt",
            PermissionState::Denied => "denied",
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(PermissionState::Granted),
            "prompt" => Ok(PermissionState::Prompt),
            "denied" => Ok(PermissionState::Denied),
            other => Err(Error::UnknownPermissionState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browser_states() {
        assert_eq!("granted".parse::<PermissionState>().unwrap(), PermissionState::Granted);
        assert_eq!("prompt".parse::<PermissionState>().unwrap(), PermissionState::Prompt);
        assert_eq!("denied".parse::<PermissionState>().unwrap(), PermissionState::Denied);
    }

    #[test]
    fn rejects_unknown_state() {
        let err = "Granted".parse::<PermissionState>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized permission state `Granted`");
    }

    #[test]
    fn descriptor_name_matches_browser() {
        assert_eq!(PermissionName::Geolocation.to_string(), "geolocation");
    }
}
