//! HTTP API Client
//!
//! Functions for communicating with the activities REST service.

use gloo_net::http::{Request, Response};

use activity_board::{decode_activities, Activity, MutationBody, MutationKind, MutationOutcome};

/// Default API base URL: same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_BASE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn mutation_path(kind: MutationKind, activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/{}?email={}",
        encode(activity),
        kind,
        encode(email)
    )
}

fn encode(component: &str) -> String {
    String::from(js_sys::encode_uri_component(component))
}

// ============ API Functions ============

/// Fetch the full activity list
pub async fn fetch_activities() -> Result<Vec<Activity>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/activities", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    decode_activities(&body).map_err(|e| format!("Parse error: {}", e))
}

/// Sign up for an activity
pub async fn signup(activity: &str, email: &str) -> MutationOutcome {
    mutate(MutationKind::Signup, activity, email).await
}

/// Unregister from an activity
pub async fn unregister(activity: &str, email: &str) -> MutationOutcome {
    mutate(MutationKind::Unregister, activity, email).await
}

async fn mutate(kind: MutationKind, activity: &str, email: &str) -> MutationOutcome {
    let url = format!("{}{}", get_api_base(), mutation_path(kind, activity, email));

    let request = match kind {
        MutationKind::Signup => Request::post(&url),
        MutationKind::Unregister => Request::delete(&url),
    };

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            MutationOutcome::from_response(status, read_body(response).await)
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Error during {}: {}", kind, e).into());
            MutationOutcome::Unreachable
        }
    }
}

async fn read_body(response: Response) -> Option<MutationBody> {
    let text = response.text().await.ok()?;
    serde_json::from_str(&text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("  "), "");
    }

    #[wasm_bindgen_test]
    fn test_mutation_path_encodes_components() {
        assert_eq!(
            mutation_path(MutationKind::Signup, "Chess Club", "a+b@x.edu"),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.edu"
        );
        assert_eq!(
            mutation_path(MutationKind::Unregister, "Art/Design", "c@x.edu"),
            "/activities/Art%2FDesign/unregister?email=c%40x.edu"
        );
    }
}
