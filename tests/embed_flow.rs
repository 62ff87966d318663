//! End-to-end embed rendering against mocked data sources.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use mockito::{Matcher, Server, ServerGuard};
use tower::ServiceExt;

use caniuse_embed::config::Settings;
use caniuse_embed::server::{create_router, AppState};

const DATASET: &str = r#"{
    "agents": {
        "chrome": {
            "current_version": "120",
            "usage_global": {"118": 0.9, "119": 1.2, "120": 34.8, "121": 0},
            "version_list": [
                {"version": "118", "era": -2},
                {"version": "119", "era": -1},
                {"version": "120", "era": 0},
                {"version": "121", "era": 1}
            ]
        },
        "firefox": {
            "current_version": "121",
            "usage_global": {"120": 0.3, "121": 2.1},
            "version_list": [
                {"version": "120", "era": -1},
                {"version": "121", "era": 0}
            ]
        },
        "ios_saf": {
            "current_version": "",
            "usage_global": {"15.2-15.3": 0.4, "17.2": 8.1},
            "version_list": [
                {"version": "15.2-15.3", "era": -1},
                {"version": "17.2", "era": 0}
            ]
        }
    },
    "data": {
        "flexbox": {
            "title": "CSS Flexible Box Layout Module",
            "description": "Method of positioning elements in horizontal or vertical stacks.",
            "usage_perc_y": 97.12,
            "usage_perc_a": 0.5,
            "status": "cr",
            "stats": {
                "chrome": {"118": "a x #1", "119": "y", "120": "y", "121": "y"},
                "firefox": {"120": "y", "121": "y"},
                "ios_saf": {"15.2-15.3": "y", "17.2": "y"}
            }
        }
    }
}"#;

const MDN_GAP: &str = r#"{
    "title": "gap",
    "description": "The <code>gap</code> property.",
    "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/gap",
    "status": {"experimental": true, "standard_track": true, "deprecated": false},
    "support": {
        "chrome": {"version_added": "84"},
        "firefox": [
            {"version_added": "130"},
            {"version_added": "61", "version_removed": "63", "prefix": "-moz-"}
        ]
    }
}"#;

async fn mock_sources() -> ServerGuard {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/data.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DATASET)
        .create_async()
        .await;
    server
}

fn app_for(server: &ServerGuard) -> axum::Router {
    let settings = Settings {
        dataset_url: format!("{}/data.json", server.url()),
        api_url: server.url(),
        site_url: "https://embed.example.com".to_string(),
        ..Default::default()
    };
    create_router(AppState::new(&settings).unwrap())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn caniuse_feature_renders_support_table() {
    let server = mock_sources().await;
    let (status, html) = get(
        app_for(&server),
        "/embed?feat=flexbox&periods=future_1,current,past_2&accessible-colours=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<body class="accessible-colours caniuse""#));
    assert!(html.contains(r#"<span id="featureTitle">CSS Flexible Box Layout Module</span>"#));
    assert!(html.contains(r#"href="https://caniuse.com/#feat=flexbox""#));

    // Rows appear in reverse of the requested order
    let past = html.find("statistics past_2").unwrap();
    let current = html.find("statistics current").unwrap();
    let future = html.find("statistics future_1").unwrap();
    assert!(past < current && current < future);

    assert!(html.contains(r#"<td class="chrome y"><span>120</span><span class="usage">34.80%</span></td>"#));
    assert!(html.contains(r#"<td class="chrome a x"><span>118</span><span class="usage">0.90%</span></td>"#));
    assert!(html.contains(r#"<td class="chrome y"><span>121</span><span class="usage">0%</span></td>"#));

    // Empty current_version leaves the iOS Safari current cell blank
    assert!(html.contains(r#"<td class="ios_saf"><span></span></td>"#));

    assert!(html.contains(r#"id="legendX" class="x" style="display: inline-block""#));
    assert!(html.contains(r#"id="legendU" class="u" style="display: none""#));
    assert!(html.contains("Global: <span class=\"y\">97.12%</span>"));
    assert!(html.contains("accessibleColoursToggle"));
    assert!(html.contains(">embed.example.com</a>"));
}

#[tokio::test]
async fn mdn_feature_resolves_version_ranges() {
    let mut server = mock_sources().await;
    let mdn = server
        .mock("POST", "/mdn-browser-compat-data")
        .match_header("content-type", "application/json; charset=utf-8")
        .match_body(Matcher::Json(serde_json::json!({
            "feature": "mdn-css__properties__gap"
        })))
        .with_status(200)
        .with_body(MDN_GAP)
        .expect(1)
        .create_async()
        .await;

    let (status, html) = get(
        app_for(&server),
        "/embed?feat=mdn-css__properties__gap&periods=current,past_1&screenshot=true",
    )
    .await;
    mdn.assert_async().await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<body class="screenshot mdn""#));
    assert!(html.contains(r#"href="https://developer.mozilla.org/docs/Web/CSS/gap""#));
    assert!(html.contains("The gap property."));
    assert!(html.contains("<strong>Experimental</strong> feature"));

    assert!(html.contains(r#"<td class="chrome y"><span>120</span>"#));
    assert!(html.contains(r#"<td class="chrome y"><span>119</span>"#));
    // Newest statement (130) is ahead of Firefox 121
    assert!(html.contains(r#"<td class="firefox n"><span>121</span>"#));

    // Browsers missing from the MDN record are unknown
    assert!(html.contains(r#"<td class="ios_saf u"><span>15.3</span>"#));
    assert!(html.contains(r#"id="legendU" class="u" style="display: inline-block""#));

    assert!(html.contains(r#"hidden="true""#));
    assert!(!html.contains("accessibleColoursToggle"));
    assert!(html.contains("browser-compat-data\">MDN</a>"));
}

#[tokio::test]
async fn failed_fetch_shows_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/data.json")
        .with_status(500)
        .create_async()
        .await;

    let (status, html) = get(app_for(&server), "/embed?feat=flexbox").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Feature not found..."));
    assert!(!html.contains(r#"class="feature""#));
}

#[tokio::test]
async fn feature_list_falls_back_to_dataset() {
    let mut server = mock_sources().await;
    server
        .mock("GET", "/features")
        .with_status(503)
        .create_async()
        .await;

    let (status, body) = get(app_for(&server), "/api/features").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json[0]["id"], "flexbox");
    assert_eq!(json[0]["title"], "CSS Flexible Box Layout Module");
}

#[tokio::test]
async fn mdn_reply_without_support_shows_not_found() {
    let mut server = mock_sources().await;
    server
        .mock("POST", "/mdn-browser-compat-data")
        .with_status(200)
        .with_body(r#"{"title": "gap", "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/gap"}"#)
        .create_async()
        .await;

    let (status, html) = get(app_for(&server), "/embed?feat=mdn-css__properties__gap").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Feature not found..."));
    assert!(!html.contains("tableBody"));
}
