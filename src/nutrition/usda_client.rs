//! USDA `FoodData` Central search client.
//!
//! Looks a food name up with `GET /foods/search` and keeps the best hit.
//! API reference: <https://fdc.nal.usda.gov/api-guide.html>

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{Nutrient, NutritionFacts, NutritionLookup};
use crate::config::NutritionSettings;
use crate::error::NutritionError;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    description: String,
    data_type: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<SearchNutrient>,
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNutrient {
    nutrient_name: Option<String>,
    unit_name: Option<String>,
    value: Option<f64>,
}

pub struct UsdaNutritionClient {
    settings: NutritionSettings,
    http_client: reqwest::Client,
}

impl UsdaNutritionClient {
    pub fn new(settings: NutritionSettings) -> Result<Self, NutritionError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            settings,
            http_client,
        })
    }
}

#[async_trait]
impl NutritionLookup for UsdaNutritionClient {
    async fn lookup(&self, food: &str) -> Result<NutritionFacts, NutritionError> {
        let food = food.trim();
        if food.is_empty() {
            return Err(NutritionError::InvalidQuery);
        }
        if self.settings.api_key.is_empty() {
            return Err(NutritionError::MissingApiKey);
        }

        let url = format!(
            "{}/foods/search",
            self.settings.base_url.trim_end_matches('/')
        );
        debug!("Querying nutrition service for {}", food);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", food),
                ("pageSize", "1"),
                ("api_key", self.settings.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Nutrition service returned {} for {}", status, food);
            return Err(NutritionError::Status(status.as_u16(), body));
        }

        let body = response.text().await?;
        parse_search_response(food, &body)
    }
}

/// Maps the first search hit to [`NutritionFacts`].
fn parse_search_response(food: &str, body: &str) -> Result<NutritionFacts, NutritionError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| NutritionError::Parse(e.to_string()))?;

    let hit = response
        .foods
        .into_iter()
        .next()
        .ok_or_else(|| NutritionError::NotFound(food.to_string()))?;

    let nutrients = hit
        .food_nutrients
        .into_iter()
        .filter_map(|n| {
            Some(Nutrient {
                name: n.nutrient_name?,
                unit: n.unit_name.unwrap_or_default(),
                amount: n.value.unwrap_or(0.0),
            })
        })
        .collect();

    Ok(NutritionFacts {
        food: food.to_string(),
        fdc_id: hit.fdc_id,
        description: hit.description,
        data_type: hit.data_type,
        nutrients,
        serving_size: hit.serving_size,
        serving_size_unit: hit.serving_size_unit,
    })
}
