use serde::Deserialize;
use serde::Serialize;

// other platform fields (headers, requestContext, ...) are ignored
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct InvocationRequest {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechResponse {
    pub message: String,
    pub file_url: String,
}

#[cfg(test)]
mod tests {
    use framework::json::from_json;
    use framework::json::to_json;

    use super::*;

    #[test]
    fn request_ignores_platform_fields() {
        let request: InvocationRequest =
            from_json(r#"{"body":"{\"text\":\"hi\"}","headers":{"host":"x"},"isBase64Encoded":false}"#).unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"text":"hi"}"#));
    }

    #[test]
    fn request_without_body() {
        let request: InvocationRequest = from_json("{}").unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn speech_request_text_is_optional() {
        assert!(from_json::<SpeechRequest>("{}").unwrap().text.is_none());
        assert!(from_json::<SpeechRequest>(r#"{"text":null}"#).unwrap().text.is_none());
        assert!(from_json::<SpeechRequest>(r#""just a string""#).is_err());
    }

    #[test]
    fn response_uses_status_code_key() {
        let json = to_json(&InvocationResponse {
            status_code: 200,
            body: "{}".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"statusCode":200,"body":"{}"}"#);
    }
}
