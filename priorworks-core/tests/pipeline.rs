//! End-to-end checks of the aggregation pipeline over realistic inputs.

use priorworks_core::{
    Config, FrontMatter, ManualProject, PipelineContext, PriorWorksError, RawRepository,
    assemble_projects, build_document,
};

fn config() -> Config {
    serde_json::from_value(serde_json::json!({
        "document": {
            "file": "prior-inventions.md",
            "description": "A list of everything I have built."
        },
        "github": {
            "username": "alice",
            "organizations": [["acme", ["rocket"]], ["initech", []]],
            "repoOverrides": [
                {"slug": "alice/cool-app", "description": "An app that is cool."},
                {"slug": "acme/rocket", "name": "Rocket Engine", "link": null},
                {"slug": "alice/tools", "link": "https://tools.alice.dev"}
            ]
        },
        "projects": [
            {"name": "Widget", "description": "A widget."},
            {"name": "Gadget", "description": "A gadget.", "link": "https://gadget.dev"}
        ]
    }))
    .expect("config")
}

fn repos() -> Vec<RawRepository> {
    serde_json::from_value(serde_json::json!([
        {"id": 10, "name": "cool-app", "owner": {"login": "alice"}, "fork": false,
         "html_url": "https://github.com/alice/cool-app", "description": ""},
        {"id": 11, "name": "tools", "owner": {"login": "alice"}, "fork": false,
         "html_url": "https://github.com/alice/tools", "description": "Small tools."},
        {"id": 12, "name": "linux", "owner": {"login": "alice"}, "fork": true,
         "html_url": "https://github.com/alice/linux", "description": "Fork."},
        {"id": 13, "name": "rocket", "owner": {"login": "acme"}, "fork": false,
         "html_url": "https://github.com/acme/rocket", "description": "Lift off."},
        {"id": 14, "name": "anvil", "owner": {"login": "acme"}, "fork": false,
         "html_url": "https://github.com/acme/anvil", "description": "Heavy."},
        {"id": 15, "name": "tps-reports", "owner": {"login": "initech"}, "fork": false,
         "html_url": "https://github.com/initech/tps-reports", "description": "Reports."},
        {"id": 16, "name": "secret", "owner": {"login": "mallory"}, "fork": false,
         "html_url": "https://github.com/mallory/secret", "description": "No."}
    ]))
    .expect("repos")
}

fn front(config: &Config) -> FrontMatter {
    FrontMatter {
        header: Some("---\ngeometry: margin=0.5in\n---\nAlice".to_string()),
        title: config.document.title.clone(),
        description: config.document.description.clone(),
    }
}

#[test]
fn renders_expected_document() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let document =
        build_document(&ctx, &front(&config), &repos(), &config.projects).expect("document");

    let expected = "\
---
geometry: margin=0.5in
---
Alice

# Prior Inventions
A list of everything I have built.

- **[Cool App](https://github.com/alice/cool-app)**: An app that is cool.
- **[Gadget](https://gadget.dev)**: A gadget.
- **Rocket Engine**: Lift off.
- **[Tools](https://tools.alice.dev)**: Small tools.
- **Widget**: A widget.
";
    assert_eq!(document, expected);
}

#[test]
fn rendering_is_idempotent() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let first =
        build_document(&ctx, &front(&config), &repos(), &config.projects).expect("first");
    let second =
        build_document(&ctx, &front(&config), &repos(), &config.projects).expect("second");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn admission_matches_owner_allowlist_and_fork_rules() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let projects = assemble_projects(&ctx, &repos(), &[]).expect("projects");
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["alice/cool-app", "alice/tools", "acme/rocket"]);
}

#[test]
fn ids_are_unique_across_remote_and_manual() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let projects = assemble_projects(&ctx, &repos(), &config.projects).expect("projects");
    let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn manual_project_named_like_remote_id_does_not_collide() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let manual = vec![ManualProject {
        name: "10".to_string(),
        description: Some("Numeric name.".to_string()),
        link: None,
    }];
    let projects = assemble_projects(&ctx, &repos(), &manual).expect("projects");
    assert!(projects.iter().any(|p| p.id == "10"));
    assert!(projects.iter().any(|p| p.id == "manualproject:10"));
}

#[test]
fn validation_lists_every_offender() {
    let mut config = config();
    config.github.repo_overrides.clear();
    config.projects.push(ManualProject {
        name: "Undocumented".to_string(),
        description: None,
        link: None,
    });
    let ctx = PipelineContext::from_config(&config);
    let err = assemble_projects(&ctx, &repos(), &config.projects).unwrap_err();

    let PriorWorksError::Validation(failure) = &err else {
        panic!("expected validation failure, got {err:?}");
    };
    let names: Vec<&str> = failure.projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cool App", "Undocumented"]);
    let message = err.to_string();
    assert!(message.contains("Cool App: Missing fields: description (slug: alice/cool-app)"));
    assert!(message.contains("Undocumented: Missing fields: description (slug: alice/Undocumented)"));
}

#[test]
fn repository_without_id_aborts_the_run() {
    let config = config();
    let ctx = PipelineContext::from_config(&config);
    let mut repos = repos();
    repos.push(
        serde_json::from_value(serde_json::json!({
            "name": "ghost", "owner": {"login": "alice"}, "fork": false, "description": "Boo."
        }))
        .expect("repo"),
    );
    let err = build_document(&ctx, &front(&config), &repos, &config.projects).unwrap_err();
    assert!(matches!(err, PriorWorksError::DataIntegrity(_)));
}
