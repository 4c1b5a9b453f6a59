//! Nutrition lookup for recognized foods.
//!
//! The HTTP layer only talks to [`NutritionLookup`]; the USDA `FoodData`
//! Central client is the production implementation.

pub mod usda_client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::NutritionError;

pub use usda_client::UsdaNutritionClient;

/// One nutrient amount, per 100g unless the source says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub unit: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// The name that was looked up
    pub food: String,
    /// `FoodData` Central ID of the matched entry
    pub fdc_id: u64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    pub nutrients: Vec<Nutrient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size_unit: Option<String>,
}

#[async_trait]
pub trait NutritionLookup: Send + Sync {
    async fn lookup(&self, food: &str) -> Result<NutritionFacts, NutritionError>;
}
