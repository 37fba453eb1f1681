use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Bond,
}

impl Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssetClass::Stock => "Stock",
                AssetClass::Bond => "Bond",
            }
        )
    }
}

impl FromStr for AssetClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" | "stocks" | "equity" => Ok(AssetClass::Stock),
            "bond" | "bonds" => Ok(AssetClass::Bond),
            _ => Err(anyhow::anyhow!("Invalid asset class: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset_class() {
        assert_eq!("stock".parse::<AssetClass>().unwrap(), AssetClass::Stock);
        assert_eq!("Stocks".parse::<AssetClass>().unwrap(), AssetClass::Stock);
        assert_eq!("BOND".parse::<AssetClass>().unwrap(), AssetClass::Bond);
        assert!("crypto".parse::<AssetClass>().is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(AssetClass::Stock.to_string(), "Stock");
        assert_eq!(AssetClass::Bond.to_string(), "Bond");
    }

    #[test]
    fn test_serde_lowercase() {
        let class: AssetClass = serde_yaml::from_str("stock").unwrap();
        assert_eq!(class, AssetClass::Stock);
        assert_eq!(serde_yaml::to_string(&AssetClass::Bond).unwrap().trim(), "bond");
    }
}
