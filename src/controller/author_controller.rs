use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use reqwest::StatusCode;
use serde_json::json;

use crate::helpers::envelope;

pub fn router() -> Router {
    Router::new().route("/author", get(get_author_data))
}

/// Static details about the application author, served in the same envelope
/// as the trucks endpoint.
pub async fn get_author_data() -> impl IntoResponse {
    let author = json!({
        "name": "Kelsey Tripp",
        "title": "Software Engineer",
        "location": "San Francisco, CA",
        "education": "Brown University Computer Science Sc.B., 2013",
        "current-employer": "NetApp",
        "website": "www.katripp.com",
        "resume": "http://www.katripp.com/resources/KelseyTripp_Resume.pdf"
    });

    (StatusCode::OK, envelope::ok(&author).to_string()).into_response()
}
