//! Hadith endpoint payloads

use serde::{Deserialize, Serialize};

/// `{"data": ...}` envelope shared with the content API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Query string accepted by the hadith endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleParams {
    pub locale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hadith::Hadith;

    #[test]
    fn test_data_response_serialization() {
        let response = DataResponse::new(vec![Hadith::new(7, "Sahih Muslim", "12")]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"][0]["id"], 7);
        assert_eq!(json["data"][0]["hadithNumber"], "12");
    }
}
