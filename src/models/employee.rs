//! Employee and contract models.
//!
//! An employee is identified by name. The contract determines the weekly
//! hour baseline used by the totals calculator (paid leave) and by the
//! analyzer (contract deviations).
//!
//! # Serialized Form
//! Roster files use the keys `nom`, `email` and `contrat`, with contract
//! values `33h`, `35h`, `39h`, `ALTERNANT`, `ÉTUDIANT` and `PATRON`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    /// 33 hours per week.
    #[serde(rename = "33h")]
    Hours33,
    /// 35 hours per week.
    #[serde(rename = "35h")]
    Hours35,
    /// 39 hours per week.
    #[serde(rename = "39h")]
    Hours39,
    /// Work-study contract, 35 hour baseline.
    #[serde(rename = "ALTERNANT")]
    Alternant,
    /// Student contract. Baseline 35 for paid leave, never checked for deviation.
    #[serde(rename = "ÉTUDIANT", alias = "ETUDIANT")]
    Student,
    /// Store owner. No baseline, never checked for deviation.
    #[serde(rename = "PATRON")]
    Owner,
}

impl ContractType {
    /// All contract types, in roster display order.
    pub const ALL: [ContractType; 6] = [
        ContractType::Hours33,
        ContractType::Hours35,
        ContractType::Hours39,
        ContractType::Alternant,
        ContractType::Student,
        ContractType::Owner,
    ];

    /// Weekly hour baseline.
    pub fn baseline_hours(self) -> f64 {
        match self {
            ContractType::Hours33 => 33.0,
            ContractType::Hours35 => 35.0,
            ContractType::Hours39 => 39.0,
            ContractType::Alternant => 35.0,
            ContractType::Student => 35.0,
            ContractType::Owner => 0.0,
        }
    }

    /// Whether the analyzer compares this contract's total against its baseline.
    pub fn reports_deviation(self) -> bool {
        !matches!(self, ContractType::Student | ContractType::Owner)
    }

    /// Label used in roster files and reports.
    pub fn label(self) -> &'static str {
        match self {
            ContractType::Hours33 => "33h",
            ContractType::Hours35 => "35h",
            ContractType::Hours39 => "39h",
            ContractType::Alternant => "ALTERNANT",
            ContractType::Student => "ÉTUDIANT",
            ContractType::Owner => "PATRON",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A staff member on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique display name (row label in the grid).
    #[serde(rename = "nom")]
    pub name: String,
    /// Address the weekly planning is mailed to.
    #[serde(default)]
    pub email: String,
    /// Contract, if one has been assigned.
    #[serde(rename = "contrat", default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractType>,
}

impl Employee {
    /// Creates an employee without e-mail or contract.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            contract: None,
        }
    }

    /// Sets the e-mail address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the contract.
    pub fn with_contract(mut self, contract: ContractType) -> Self {
        self.contract = Some(contract);
        self
    }

    /// Weekly baseline, 0 when no contract is assigned.
    pub fn baseline_hours(&self) -> f64 {
        self.contract.map_or(0.0, ContractType::baseline_hours)
    }
}
