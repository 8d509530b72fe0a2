// src/domain/article/taxonomy.rs
use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Top-level category of financial vehicle an article covers. Closed set,
/// extended only by adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundType {
    PrivateEquity,
    HedgeFunds,
    RealEstate,
    VentureCapital,
    Infrastructure,
    PrivateCredit,
    GpStakes,
    Secondaries,
}

impl FundType {
    /// Declaration order; fund-type page enumeration relies on it.
    pub const ALL: [FundType; 8] = [
        FundType::PrivateEquity,
        FundType::HedgeFunds,
        FundType::RealEstate,
        FundType::VentureCapital,
        FundType::Infrastructure,
        FundType::PrivateCredit,
        FundType::GpStakes,
        FundType::Secondaries,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FundType::PrivateEquity => "private-equity",
            FundType::HedgeFunds => "hedge-funds",
            FundType::RealEstate => "real-estate",
            FundType::VentureCapital => "venture-capital",
            FundType::Infrastructure => "infrastructure",
            FundType::PrivateCredit => "private-credit",
            FundType::GpStakes => "gp-stakes",
            FundType::Secondaries => "secondaries",
        }
    }
}

impl fmt::Display for FundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private-equity" => Ok(FundType::PrivateEquity),
            "hedge-funds" => Ok(FundType::HedgeFunds),
            "real-estate" => Ok(FundType::RealEstate),
            "venture-capital" => Ok(FundType::VentureCapital),
            "infrastructure" => Ok(FundType::Infrastructure),
            "private-credit" => Ok(FundType::PrivateCredit),
            "gp-stakes" => Ok(FundType::GpStakes),
            "secondaries" => Ok(FundType::Secondaries),
            other => Err(DomainError::Validation(format!(
                "unknown fund type '{other}'"
            ))),
        }
    }
}

/// Topical dimension within a fund type. Orthogonal to [`FundType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pillar {
    Cfo,
    FundAdministration,
    Insurance,
    Banking,
    Tax,
    Audit,
    Fundraising,
    InvestorRelations,
    PropertyManagement,
}

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Cfo => "cfo",
            Pillar::FundAdministration => "fund-administration",
            Pillar::Insurance => "insurance",
            Pillar::Banking => "banking",
            Pillar::Tax => "tax",
            Pillar::Audit => "audit",
            Pillar::Fundraising => "fundraising",
            Pillar::InvestorRelations => "investor-relations",
            Pillar::PropertyManagement => "property-management",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cfo" => Ok(Pillar::Cfo),
            "fund-administration" => Ok(Pillar::FundAdministration),
            "insurance" => Ok(Pillar::Insurance),
            "banking" => Ok(Pillar::Banking),
            "tax" => Ok(Pillar::Tax),
            "audit" => Ok(Pillar::Audit),
            "fundraising" => Ok(Pillar::Fundraising),
            "investor-relations" => Ok(Pillar::InvestorRelations),
            "property-management" => Ok(Pillar::PropertyManagement),
            other => Err(DomainError::Validation(format!("unknown pillar '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_type_round_trips_through_str() {
        for fund_type in FundType::ALL {
            assert_eq!(fund_type.as_str().parse::<FundType>().unwrap(), fund_type);
        }
    }

    #[test]
    fn unknown_fund_type_fails_to_parse() {
        assert!("crypto-funds".parse::<FundType>().is_err());
    }

    #[test]
    fn unknown_pillar_fails_to_parse() {
        assert!("marketing".parse::<Pillar>().is_err());
    }
}
