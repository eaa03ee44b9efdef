//! End-to-end tests against a mocked GitHub API.

use github_showcase::{
    classify_project, fetch_project_detail, fetch_projects, AccountConfig, ProjectCategory,
    Runner, RunnerConfig, NO_DESCRIPTION,
};
use octocrab::Octocrab;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Octocrab {
    Octocrab::builder()
        .base_uri(server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn repo_entry(
    id: u64,
    name: &str,
    language: Option<&str>,
    topics: &[&str],
    fork: bool,
    archived: bool,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": null,
        "html_url": format!("https://github.com/testuser/{name}"),
        "homepage": null,
        "stargazers_count": 0,
        "forks_count": 0,
        "language": language,
        "created_at": "2023-01-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z",
        "topics": topics,
        "fork": fork,
        "archived": archived,
    })
}

async fn mount_listing(server: &MockServer, entries: Value) {
    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .and(query_param("sort", "updated"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries))
        .mount(server)
        .await;
}

#[tokio::test]
async fn filters_and_classifies_fetched_entries() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            repo_entry(1, "forked-lib", Some("Python"), &[], true, false),
            repo_entry(2, "retired-tool", Some("Python"), &[], false, true),
            repo_entry(3, "classifier", Some("Python"), &["machine-learning"], false, false),
        ]),
    )
    .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let projects = fetch_projects(&octocrab, &config, 30).await.unwrap();

    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project.name, "classifier");
    assert_eq!(project.description, NO_DESCRIPTION);
    assert_eq!(
        project.image,
        "https://opengraph.githubassets.com/1/testuser/classifier"
    );
    assert_eq!(classify_project(project), ProjectCategory::DataScience);
}

#[tokio::test]
async fn typescript_entry_falls_back_to_web_development() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([repo_entry(
            4,
            "site",
            Some("TypeScript"),
            &["portfolio-site"],
            false,
            false
        )]),
    )
    .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let projects = fetch_projects(&octocrab, &config, 30).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(
        classify_project(&projects[0]),
        ProjectCategory::WebDevelopment
    );
}

#[tokio::test]
async fn reserved_names_never_reach_the_gallery() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            repo_entry(5, "testuser", None, &[], false, false),
            repo_entry(6, "testuser.github.io", None, &[], false, false),
            repo_entry(7, "keeper", None, &[], false, false),
        ]),
    )
    .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let projects = fetch_projects(&octocrab, &config, 30).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "keeper");
}

#[tokio::test]
async fn fetch_failure_surfaces_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Server Error",
            "documentation_url": null,
        })))
        .mount(&server)
        .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let result = fetch_projects(&octocrab, &config, 30).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn runner_contains_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/testuser/repos"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Server Error",
            "documentation_url": null,
        })))
        .mount(&server)
        .await;

    let config = RunnerConfig::new(AccountConfig::new("testuser"));
    let runner = Runner::with_client(config, client(&server));
    let view = runner.run().await;

    // The refresh itself never fails; both views are empty with the error
    // message on the side channel.
    assert!(view.gallery.all.is_empty());
    assert!(view.gallery_error.is_some());
    assert!(view.skills_error.is_some());
    assert!(view.has_errors());
}

#[tokio::test]
async fn runner_builds_both_views() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        json!([
            repo_entry(1, "classifier", Some("Python"), &["machine-learning"], false, false),
            repo_entry(2, "trainer", Some("Python"), &[], false, false),
            repo_entry(3, "site", Some("TypeScript"), &[], false, false),
        ]),
    )
    .await;

    let config = RunnerConfig::new(AccountConfig::new("testuser"));
    let runner = Runner::with_client(config, client(&server));
    let view = runner.run().await;

    assert!(!view.has_errors());
    assert_eq!(view.gallery.all.len(), 3);
    assert_eq!(
        view.gallery.bucket(ProjectCategory::DataScience).len(),
        2
    );
    assert_eq!(
        view.gallery.bucket(ProjectCategory::WebDevelopment).len(),
        1
    );
    // "Python" recurs across the sample, so it shows up as a skill.
    assert!(view
        .skills
        .families
        .iter()
        .flat_map(|group| &group.technologies)
        .any(|tech| tech.name == "Python" && tech.count == 2));
}

#[tokio::test]
async fn detail_includes_decoded_readme_and_languages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/testuser/classifier"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_entry(
            3,
            "classifier",
            Some("Python"),
            &["machine-learning"],
            false,
            false,
        )))
        .mount(&server)
        .await;
    // The API wraps base64 payloads across lines; the decoder must cope.
    Mock::given(method("GET"))
        .and(path("/repos/testuser/classifier/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "IyBIZWxs\nbwo=",
            "encoding": "base64",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/testuser/classifier/languages"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Python": 12345, "Shell": 321})),
        )
        .mount(&server)
        .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let detail = fetch_project_detail(&octocrab, &config, "classifier")
        .await
        .unwrap();

    assert_eq!(detail.project.name, "classifier");
    assert_eq!(detail.readme.as_deref(), Some("# Hello\n"));
    assert_eq!(detail.languages.get("Python"), Some(&12345));
    assert_eq!(detail.languages.get("Shell"), Some(&321));
}

#[tokio::test]
async fn detail_treats_missing_readme_as_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/testuser/quiet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repo_entry(
            8,
            "quiet",
            None,
            &[],
            false,
            false,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/testuser/quiet/readme"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/testuser/quiet/languages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let octocrab = client(&server);
    let config = AccountConfig::new("testuser");
    let detail = fetch_project_detail(&octocrab, &config, "quiet")
        .await
        .unwrap();

    assert_eq!(detail.readme, None);
    assert!(detail.languages.is_empty());
}
