// ABOUTME: Unwraps the markup string from a saved WordPress GraphQL response body.
// ABOUTME: Accepts page or post queries and surfaces GraphQL error messages when content is absent.

use serde::Deserialize;

use crate::error::ExtractError;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    page: Option<ContentNode>,
    post: Option<ContentNode>,
}

#[derive(Debug, Deserialize)]
struct ContentNode {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Returns `data.page.content`, or `data.post.content` when no page was queried.
pub fn page_content_from_response(body: &str) -> Result<String, ExtractError> {
    let response: GraphQlResponse =
        serde_json::from_str(body).map_err(ExtractError::Response)?;

    let content = response.data.and_then(|data| {
        data.page
            .and_then(|node| node.content)
            .or_else(|| data.post.and_then(|node| node.content))
    });

    match content {
        Some(content) => Ok(content),
        None => {
            let reason = match response.errors.first() {
                Some(err) => err.message.clone(),
                None => "data.page.content is null".to_string(),
            };
            Err(ExtractError::missing_content(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content() {
        let body = r#"{"data":{"page":{"id":"cG9zdDoy","content":"<p>Hi</p>"}}}"#;
        assert_eq!(page_content_from_response(body).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn test_post_content() {
        let body = r#"{"data":{"post":{"slug":"hello","content":"<p>Post</p>","date":"2024-05-01"}}}"#;
        assert_eq!(page_content_from_response(body).unwrap(), "<p>Post</p>");
    }

    #[test]
    fn test_graphql_error_message_is_surfaced() {
        let body = r#"{"data":{"page":null},"errors":[{"message":"Internal server error"}]}"#;
        let err = page_content_from_response(body).unwrap_err();
        assert!(err.is_missing_content());
        assert!(err.to_string().contains("Internal server error"));
    }

    #[test]
    fn test_null_content() {
        let body = r#"{"data":{"page":{"content":null}}}"#;
        let err = page_content_from_response(body).unwrap_err();
        assert!(err.is_missing_content());
    }

    #[test]
    fn test_malformed_body_is_response_error() {
        assert!(page_content_from_response("<html>").unwrap_err().is_response());
    }
}
