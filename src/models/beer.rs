use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Maximum stock capacity a beer can be created with.
pub const MAX_CAPACITY: i64 = 500;

/// Largest quantity accepted in a single create or increment/decrement.
pub const MAX_QUANTITY_PER_REQUEST: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeerStyle {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    Ale,
    Ipa,
    Stout,
}

impl BeerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "lager",
            BeerStyle::Malzbier => "malzbier",
            BeerStyle::Witbier => "witbier",
            BeerStyle::Weiss => "weiss",
            BeerStyle::Ale => "ale",
            BeerStyle::Ipa => "ipa",
            BeerStyle::Stout => "stout",
        }
    }
}

impl std::str::FromStr for BeerStyle {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lager" => Ok(BeerStyle::Lager),
            "malzbier" => Ok(BeerStyle::Malzbier),
            "witbier" => Ok(BeerStyle::Witbier),
            "weiss" => Ok(BeerStyle::Weiss),
            "ale" => Ok(BeerStyle::Ale),
            "ipa" => Ok(BeerStyle::Ipa),
            "stout" => Ok(BeerStyle::Stout),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beer {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    /// Current stock count. Always within `0..=max`.
    pub quantity: i64,
    /// Stock capacity, fixed at creation.
    pub max: i64,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateBeer {
    pub name: String,
    pub brand: String,
    pub style: BeerStyle,
    #[serde(default)]
    pub quantity: i64,
    pub max: i64,
}

impl CreateBeer {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Beer name must not be empty".into()));
        }
        if self.name.len() > 200 {
            return Err(AppError::BadRequest("Beer name is too long (max 200 chars)".into()));
        }
        if self.brand.trim().is_empty() {
            return Err(AppError::BadRequest("Brand must not be empty".into()));
        }
        if self.brand.len() > 200 {
            return Err(AppError::BadRequest("Brand is too long (max 200 chars)".into()));
        }
        if self.max <= 0 || self.max > MAX_CAPACITY {
            return Err(AppError::BadRequest(format!(
                "Max capacity must be between 1 and {}",
                MAX_CAPACITY
            )));
        }
        if self.quantity < 0 || self.quantity > MAX_QUANTITY_PER_REQUEST {
            return Err(AppError::BadRequest(format!(
                "Initial quantity must be between 0 and {}",
                MAX_QUANTITY_PER_REQUEST
            )));
        }
        if self.quantity > self.max {
            return Err(AppError::BadRequest(
                "Initial quantity must not exceed max capacity".into(),
            ));
        }
        Ok(())
    }
}

/// Body of the increment/decrement PATCH endpoints.
#[derive(Debug, Deserialize)]
pub struct QuantityChange {
    pub quantity: i64,
}

impl QuantityChange {
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= 0 || self.quantity > MAX_QUANTITY_PER_REQUEST {
            return Err(AppError::BadRequest(format!(
                "Quantity must be between 1 and {}",
                MAX_QUANTITY_PER_REQUEST
            )));
        }
        Ok(())
    }
}
