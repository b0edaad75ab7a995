//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the conversion endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ConvertParams {
    /// Amount in the source currency; must be strictly positive
    #[param(example = "100.00")]
    pub amount: Decimal,
}

/// A successful one-shot conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Amount in the source currency, as requested
    #[schema(example = "100.00")]
    pub amount: Decimal,
    /// Exchange rate applied
    #[schema(example = "600.00")]
    pub rate: Decimal,
    /// `amount * rate`, computed in exact decimal arithmetic
    #[schema(example = "60000")]
    pub converted_value: Decimal,
    /// Human-readable outcome message
    #[schema(example = "Conversion successful")]
    pub message: String,
    /// Stable machine-readable code
    #[schema(example = "OK")]
    pub code: String,
}

/// Uniform failure payload returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    #[schema(example = "Exchange rate unavailable for /convert. Try again later.")]
    pub message: String,
    /// Stable machine-readable code
    #[schema(example = "RATE_UNAVAILABLE")]
    pub code: String,
    /// HTTP status of the response, echoed in the body
    #[schema(example = 503)]
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conversion_response_serialises_camel_case() {
        let response = ConversionResponse {
            amount: dec!(100.00),
            rate: dec!(600.00),
            converted_value: dec!(60000),
            message: "Conversion successful".into(),
            code: "OK".into(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["convertedValue"], "60000");
        assert_eq!(json["rate"], "600.00");
        assert_eq!(json["code"], "OK");
    }

    #[test]
    fn test_convert_params_parses_decimal_string() {
        let params: ConvertParams = serde_json::from_value(serde_json::json!({
            "amount": "42.50"
        }))
        .unwrap();
        assert_eq!(params.amount, dec!(42.50));
    }
}
