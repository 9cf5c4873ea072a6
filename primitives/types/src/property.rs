//! Argument types for property-related RPC methods.
//!
//! The daemon takes ecosystems, token types, and DEx actions as bare
//! integers; the enums keep wrappers from passing, say, a token type where an
//! ecosystem is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ecosystem a new property is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Ecosystem {
    /// Production ecosystem (code `1`).
    #[default]
    #[serde(rename = "main")]
    Main,
    /// Test ecosystem (code `2`).
    #[serde(rename = "test")]
    Test,
}

impl Ecosystem {
    /// Numeric code sent over the wire.
    pub fn code(&self) -> u8 {
        match self {
            Ecosystem::Main => 1,
            Ecosystem::Test => 2,
        }
    }

    /// Get the string representation of the ecosystem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Main => "main",
            Ecosystem::Test => "test",
        }
    }
}

impl FromStr for Ecosystem {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "main" | "1" => Ok(Ecosystem::Main),
            "test" | "2" => Ok(Ecosystem::Test),
            _ => Err(format!("Unknown ecosystem: {}", s)),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Divisibility of a property's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TokenType {
    /// Whole units only (code `1`).
    #[serde(rename = "indivisible")]
    Indivisible,
    /// Eight decimal places (code `2`).
    #[default]
    #[serde(rename = "divisible")]
    Divisible,
}

impl TokenType {
    /// Numeric code sent over the wire.
    pub fn code(&self) -> u16 {
        match self {
            TokenType::Indivisible => 1,
            TokenType::Divisible => 2,
        }
    }

    /// Get the string representation of the token type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Indivisible => "indivisible",
            TokenType::Divisible => "divisible",
        }
    }
}

impl FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "indivisible" | "1" => Ok(TokenType::Indivisible),
            "divisible" | "2" => Ok(TokenType::Divisible),
            _ => Err(format!("Unknown token type: {}", s)),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// What `omni_senddexsell` does with the seller's offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DexAction {
    /// Place a new offer (code `1`).
    #[serde(rename = "new")]
    New,
    /// Update the existing offer (code `2`).
    #[serde(rename = "update")]
    Update,
    /// Cancel the existing offer (code `3`).
    #[serde(rename = "cancel")]
    Cancel,
}

impl DexAction {
    /// Numeric code sent over the wire.
    pub fn code(&self) -> u8 {
        match self {
            DexAction::New => 1,
            DexAction::Update => 2,
            DexAction::Cancel => 3,
        }
    }

    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            DexAction::New => "new",
            DexAction::Update => "update",
            DexAction::Cancel => "cancel",
        }
    }
}

impl FromStr for DexAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" | "1" => Ok(DexAction::New),
            "update" | "2" => Ok(DexAction::Update),
            "cancel" | "3" => Ok(DexAction::Cancel),
            _ => Err(format!("Unknown DEx action: {}", s)),
        }
    }
}

impl fmt::Display for DexAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Descriptive fields shared by every property-issuing transaction.
///
/// Field order matches the daemon's positional order after the sender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    /// Ecosystem to create the property in.
    pub ecosystem: Ecosystem,
    /// Divisibility of the new tokens.
    pub token_type: TokenType,
    /// Property being replaced; `0` for a brand-new property.
    pub previous_id: u32,
    /// Category, may be empty.
    pub category: String,
    /// Subcategory, may be empty.
    pub subcategory: String,
    /// Property name.
    pub name: String,
    /// Informational URL, may be empty.
    pub url: String,
    /// Free-form description, may be empty.
    pub data: String,
}

/// Terms of a crowdsale (`omni_sendissuancecrowdsale`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdsaleTerms {
    /// Property accepted as payment.
    pub property_id_desired: u32,
    /// Tokens created per unit of the desired property, as a decimal string.
    pub tokens_per_unit: String,
    /// Deadline as a Unix timestamp.
    pub deadline: i64,
    /// Early-bird bonus percentage per week.
    pub early_bonus: u8,
    /// Percentage of tokens granted to the issuer.
    pub issuer_percentage: u8,
}
