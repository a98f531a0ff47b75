use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Taxpayer category. Each category is taxed at a single flat rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxpayerCategory {
    Individual,
    Entrepreneur,
    Company,
}

impl TaxpayerCategory {
    pub const ALL: [TaxpayerCategory; 3] = [Self::Individual, Self::Entrepreneur, Self::Company];

    /// Flat rate before any benefit discount.
    pub const fn base_rate(self) -> Decimal {
        match self {
            Self::Individual => Decimal::from_parts(13, 0, 0, false, 2),
            Self::Entrepreneur => Decimal::from_parts(6, 0, 0, false, 2),
            Self::Company => Decimal::from_parts(20, 0, 0, false, 2),
        }
    }

    /// Numeric selector used by the console menu and fixture files.
    pub const fn code(self) -> u8 {
        match self {
            Self::Individual => 1,
            Self::Entrepreneur => 2,
            Self::Company => 3,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Individual),
            2 => Some(Self::Entrepreneur),
            3 => Some(Self::Company),
            _ => None,
        }
    }

    /// Accepts either the selector code or the category name, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "individual" => Some(Self::Individual),
            "entrepreneur" => Some(Self::Entrepreneur),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Entrepreneur => "Individual entrepreneur",
            Self::Company => "Company",
        }
    }
}

impl fmt::Display for TaxpayerCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
