use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A named group of routes that can be switched on per chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Controller {
    /// `/accounts/{accountId}/asset-balances` and `/accounts/{accountId}/asset-approvals`
    AccountsAssets,
    /// `/accounts/{accountId}/pool-asset-balances` and `/accounts/{accountId}/pool-asset-approvals`
    AccountsPoolAssets,
    /// `/pallets/assets/{assetId}/asset-info`
    PalletsAssets,
}

impl Controller {
    pub const ALL: [Controller; 3] = [
        Controller::AccountsAssets,
        Controller::AccountsPoolAssets,
        Controller::PalletsAssets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Controller::AccountsAssets => "AccountsAssets",
            Controller::AccountsPoolAssets => "AccountsPoolAssets",
            Controller::PalletsAssets => "PalletsAssets",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown controller '{0}'")]
pub struct UnknownController(pub String);

impl FromStr for Controller {
    type Err = UnknownController;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Controller::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownController(s.to_string()))
    }
}
