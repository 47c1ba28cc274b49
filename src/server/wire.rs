// Wire envelope types
//
// The client-facing shape differs from the internal payload: TEXT payloads go
// out as "faq" responses carrying just the message and link, everything else
// rides under "product" with the full payload attached.

use serde::{Deserialize, Serialize};

use crate::payload::{PayloadKind, ResponsePayload};

/// Body of `POST /query`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryRequest {
    pub message: String,
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// Top-level response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryEnvelope {
    pub result: QueryResult,
}

/// Echo of the request plus the shaped response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub message: String,
    pub response: ResponseShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// Discriminated response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseShape {
    Faq {
        data: String,
        link: Option<String>,
    },
    Product {
        data: ResponsePayload,
    },
}

impl ResponseShape {
    pub fn from_payload(payload: ResponsePayload) -> Self {
        match payload.kind {
            PayloadKind::Text => ResponseShape::Faq {
                data: payload.message,
                link: payload.link,
            },
            PayloadKind::Order | PayloadKind::Price | PayloadKind::Product => {
                ResponseShape::Product { data: payload }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload_maps_to_faq_shape() {
        let shape = ResponseShape::from_payload(ResponsePayload::faq_answer("answer text"));
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "faq");
        assert_eq!(json["data"], "answer text");
        assert_eq!(json["link"], "");
    }

    #[test]
    fn test_order_payload_maps_to_product_shape() {
        let payload = ResponsePayload {
            kind: PayloadKind::Order,
            message: "order found".into(),
            link: Some("https://x/pages/product-view?orderId=42".into()),
            image: None,
            has_answer: None,
        };
        let json = serde_json::to_value(ResponseShape::from_payload(payload)).unwrap();
        assert_eq!(json["type"], "product");
        assert_eq!(json["data"]["type"], "ORDER");
        assert_eq!(json["data"]["message"], "order found");
    }

    #[test]
    fn test_request_customer_id_defaults_to_none() {
        let request: QueryRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(request.customer_id.is_none());
    }
}
