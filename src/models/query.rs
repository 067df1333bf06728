use thiserror::Error;

use crate::models::geo::{BoundingBox, GeoPoint};

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Invalid bounds, expected four decimals as swLat,swLng,neLat,neLng")]
    InvalidBounds,

    #[error("Invalid bounds, the southwest corner must not exceed the northeast corner")]
    InvertedBounds,
}

/// Per-request filter derived from the /trucks query string. A `None`
/// category places no restriction on the results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TruckFilter {
    pub bounds: Option<BoundingBox>,
    pub food_keywords: Option<Vec<String>>,
    pub requested_name: Option<String>,
}

impl TruckFilter {
    pub fn from_params(
        bounds: Option<&str>,
        food: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            bounds: bounds.map(parse_bounds).transpose()?,
            food_keywords: food.map(parse_food_keywords).filter(|k| !k.is_empty()),
            requested_name: name.map(str::to_string),
        })
    }
}

fn parse_bounds(raw: &str) -> Result<BoundingBox, FilterError> {
    let coordinates = raw
        .split(',')
        .map(|part| part.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| FilterError::InvalidBounds)?;

    let &[sw_lat, sw_lng, ne_lat, ne_lng] = coordinates.as_slice() else {
        return Err(FilterError::InvalidBounds);
    };
    if !coordinates.iter().all(|c| c.is_finite()) {
        return Err(FilterError::InvalidBounds);
    }
    if sw_lat > ne_lat || sw_lng > ne_lng {
        return Err(FilterError::InvertedBounds);
    }

    Ok(BoundingBox {
        southwest: GeoPoint { lat: sw_lat, lng: sw_lng },
        northeast: GeoPoint { lat: ne_lat, lng: ne_lng },
    })
}

fn parse_food_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
