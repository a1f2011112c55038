#[allow(dead_code)]
mod common;

use anyhow::{Context, Result};

use agora::model::Application;

#[test]
fn server_api_contract_happy_path_and_auth_failures() -> Result<()> {
    let server = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();
    let auth = common::auth_header(common::TOKEN);
    let apps_url = format!("{}/api/applications", server.base_url);

    // Health is unauthenticated.
    let health = client
        .get(format!("{}/healthz", server.base_url))
        .send()
        .context("healthz")?;
    assert!(health.status().is_success());

    // The api requires the token.
    let anon = client.get(&apps_url).send().context("anonymous list")?;
    assert_eq!(anon.status(), reqwest::StatusCode::UNAUTHORIZED);
    let wrong = client
        .get(&apps_url)
        .header(reqwest::header::AUTHORIZATION, common::auth_header("nope"))
        .send()
        .context("wrong token list")?;
    assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

    // Create-or-replace returns the canonical form.
    let mut web = common::web_application();
    web.components["api"].ports.shift_insert(0, "https".to_string(), 443);
    let created: Application = client
        .post(&apps_url)
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&web)
        .send()
        .context("create application")?
        .error_for_status()
        .context("create application status")?
        .json()
        .context("parse created application")?;
    let schemes: Vec<&str> = created.components["api"]
        .ports
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(schemes, vec!["http", "https"]);

    let listed: Vec<Application> = client
        .get(&apps_url)
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("list applications")?
        .error_for_status()
        .context("list applications status")?
        .json()
        .context("parse applications")?;
    assert_eq!(listed, vec![created.clone()]);

    let fetched: Application = client
        .get(format!("{}/web", apps_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("get application")?
        .error_for_status()
        .context("get application status")?
        .json()
        .context("parse application")?;
    assert_eq!(fetched, created);

    let missing = client
        .get(format!("{}/nope", apps_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("get missing application")?;
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    // PUT must name the same application in path and body.
    let mismatched = client
        .put(format!("{}/other", apps_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .json(&web)
        .send()
        .context("put mismatched application")?;
    assert_eq!(mismatched.status(), reqwest::StatusCode::BAD_REQUEST);

    // Delete answers 204, then 404.
    let deleted = client
        .delete(format!("{}/web", apps_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("delete application")?;
    assert_eq!(deleted.status(), reqwest::StatusCode::NO_CONTENT);
    let again = client
        .delete(format!("{}/web", apps_url))
        .header(reqwest::header::AUTHORIZATION, &auth)
        .send()
        .context("delete application again")?;
    assert_eq!(again.status(), reqwest::StatusCode::NOT_FOUND);

    Ok(())
}

#[test]
fn server_rejects_invalid_applications_with_issues() -> Result<()> {
    let server = common::spawn_server()?;
    let client = reqwest::blocking::Client::new();

    let mut web = common::web_application();
    web.components["api"].cpus = 0;
    web.components["api"].dist_url = "nowhere".to_string();

    let resp = client
        .post(format!("{}/api/applications", server.base_url))
        .header(
            reqwest::header::AUTHORIZATION,
            common::auth_header(common::TOKEN),
        )
        .json(&web)
        .send()
        .context("create invalid application")?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().context("parse error body")?;
    assert_eq!(body["error"], "invalid application");
    let fields: Vec<&str> = body["issues"]
        .as_array()
        .context("issues array")?
        .iter()
        .filter_map(|i| i["field"].as_str())
        .collect();
    assert!(fields.contains(&"components.api.cpus"));
    assert!(fields.contains(&"components.api.dist_url"));

    Ok(())
}
