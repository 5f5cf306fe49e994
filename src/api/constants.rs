//! API constants and route table for the questionnaire backend

/// Fallback questionnaire used when no identifier is supplied
pub const DEFAULT_QUESTIONNAIRE_ID: &str = "68f77abbd2dceb8327c04199";

/// Request timeout applied by the transport (5 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Connection timeout applied by the transport
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

pub const USER_AGENT: &str = "questionnaire-cli/1.0";

/// Relative routes, joined onto the configured base URL
pub mod routes {
    pub const LOGIN_URL: &str = "login/url";
    pub const LOGIN: &str = "login";
    pub const ADD_ANSWER: &str = "answers/add";

    pub fn questionnaire_by_id(id: &str) -> String {
        format!("questionnaire/{}", urlencoding::encode(id))
    }

    pub fn lock_questionnaire(id: &str) -> String {
        format!("questionnaire/{}/lock", urlencoding::encode(id))
    }

    pub fn request_unlock(id: &str) -> String {
        format!("answers/request-unlock/{}", urlencoding::encode(id))
    }
}

/// Join a relative route onto a base URL with exactly one separating slash
pub fn endpoint(base_url: &str, route: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        route.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        assert_eq!(
            endpoint("https://api.example.com/", "/answers/add"),
            "https://api.example.com/answers/add"
        );
        assert_eq!(
            endpoint("https://api.example.com/v1", "login/url"),
            "https://api.example.com/v1/login/url"
        );
    }

    #[test]
    fn test_id_routes() {
        assert_eq!(routes::questionnaire_by_id("Q1"), "questionnaire/Q1");
        assert_eq!(routes::lock_questionnaire("Q1"), "questionnaire/Q1/lock");
        assert_eq!(routes::request_unlock("Q1"), "answers/request-unlock/Q1");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(routes::questionnaire_by_id("a/b c"), "questionnaire/a%2Fb%20c");
    }
}
