use serde::Serialize;

use crate::services::catalog::BikeModel;

// Response de modelo reservable
#[derive(Debug, Serialize)]
pub struct BikeModelResponse {
    pub name: String,
    pub variants: Vec<String>,
}

impl From<&BikeModel> for BikeModelResponse {
    fn from(model: &BikeModel) -> Self {
        Self {
            name: model.name.to_string(),
            variants: model.variants.iter().map(|v| v.to_string()).collect(),
        }
    }
}
