//! OPUS API response types.

use serde::{Deserialize, Serialize};

/// Body of an OPUS image metadata response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpusImagesResponse {
    pub data: Vec<OpusImage>,
}

/// One image entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpusImage {
    /// Base URL of the image directory, including the trailing slash.
    pub path: String,
    /// Image file name relative to `path`.
    pub img: String,
}

impl OpusImage {
    pub fn url(&self) -> String {
        format!("{}{}", self.path, self.img)
    }
}

/// Successful metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    /// HTTP status the API answered with.
    pub status: u16,
    pub image_urls: Vec<String>,
}

impl From<(u16, OpusImagesResponse)> for MetadataResponse {
    fn from((status, body): (u16, OpusImagesResponse)) -> Self {
        Self {
            status,
            image_urls: body.data.iter().map(OpusImage::url).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_and_join_urls() {
        let json = r#"{
            "data": [
                {"opusid": "co-iss-n1", "path": "https://pds/holdings/", "img": "N1_small.jpg"},
                {"opusid": "co-iss-n2", "path": "https://pds/holdings/", "img": "N2_small.jpg"}
            ]
        }"#;
        let body: OpusImagesResponse = serde_json::from_str(json).unwrap();
        let response = MetadataResponse::from((200, body));
        assert_eq!(
            response.image_urls,
            vec![
                "https://pds/holdings/N1_small.jpg",
                "https://pds/holdings/N2_small.jpg"
            ]
        );
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let result: Result<OpusImagesResponse, _> = serde_json::from_str(r#"{"count": 0}"#);
        assert!(result.is_err());
    }
}
