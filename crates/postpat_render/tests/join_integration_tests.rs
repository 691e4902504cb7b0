//! Integration tests for joining collection directories.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::tempdir;

use postpat_collection::{
    Body, Collection, CollectionInfo, Item, Request, SplitOptions, Splitter, Url,
};
use postpat_render::{
    output_file_name, JoinOptions, Joiner, RenderError, SequentialIds, UuidGenerator,
};

/// Write the `Foo` fixture directory, optionally replacing some files.
fn foo_fixture(root: &Path, overrides: &[(&str, &str)]) -> std::path::PathBuf {
    let dir = root.join("Foo");
    fs::create_dir(&dir).unwrap();

    let mut files = vec![
        ("info:collection", r#"{"name":"Foo","schema":"s"}"#),
        ("auth:collection", r#"{"type":"noauth"}"#),
        ("event:collection", "[]"),
        ("variables:collection", "[]"),
        (
            "Request:Ping:GET",
            r#"{"name":"Ping","request":{"method":"GET","url":{"raw":"http://x"}}}"#,
        ),
    ];
    for &(name, contents) in overrides {
        files.retain(|(n, _)| *n != name);
        files.push((name, contents));
    }
    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
    dir
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Test the documented single-request scenario.
#[test]
fn test_join_foo_scenario() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(temp.path(), &[]);
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    let ids = UuidGenerator;
    let result = Joiner::new(JoinOptions::new().with_output_dir(&out), &ids)
        .join(&dir)
        .unwrap();

    assert_eq!(result.output_path, out.join("Test-Foo.postman_collection.json"));
    assert_eq!(result.items, 1);

    let json = read_json(&result.output_path);
    assert_eq!(json["info"]["name"], "Foo");

    let items = json["item"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Ping");
    assert_eq!(items[0]["request"]["method"], "GET");
    assert_eq!(items[0]["request"]["url"]["raw"], "http://x");
    assert_eq!(items[0]["request"]["header"], Value::Array(Vec::new()));
    assert_eq!(items[0]["event"], Value::Array(Vec::new()));
    assert_eq!(json["event"], Value::Array(Vec::new()));
    assert_eq!(json["variable"], Value::Array(Vec::new()));
}

/// Test that a broken request fragment still yields a slot.
#[test]
fn test_join_lenient_request_fragments() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(temp.path(), &[("Request:Broken:GET", "{\"name\": ")]);

    let ids = SequentialIds::new("id");
    let result = Joiner::new(JoinOptions::new().with_output_dir(temp.path()), &ids)
        .join(&dir)
        .unwrap();
    assert_eq!(result.items, 2);

    let json = read_json(&result.output_path);
    let items = json["item"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // "Request:Broken:GET" sorts before "Request:Ping:GET"
    assert_eq!(items[0]["name"], "");
    assert_eq!(items[0]["request"]["method"], "");
    assert_eq!(items[1]["name"], "Ping");
}

/// Test that a broken auth fragment aborts the join without output.
#[test]
fn test_join_invalid_auth_aborts() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(temp.path(), &[("auth:collection", "not json")]);

    let ids = SequentialIds::new("id");
    let err = Joiner::new(JoinOptions::new().with_output_dir(temp.path()), &ids)
        .join(&dir)
        .unwrap_err();

    assert!(matches!(err, RenderError::Collection(_)));
    assert!(!temp.path().join(output_file_name("Foo")).exists());
}

/// Test that a missing auth fragment is not treated as "no auth".
#[test]
fn test_join_missing_auth_aborts() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(temp.path(), &[]);
    fs::remove_file(dir.join("auth:collection")).unwrap();

    let ids = SequentialIds::new("id");
    let result = Joiner::new(JoinOptions::new().with_output_dir(temp.path()), &ids).join(&dir);
    assert!(result.is_err());
}

/// Test split followed by join on a simple collection.
#[test]
fn test_split_join_round_trip() {
    let temp = tempdir().unwrap();
    let collection = Collection {
        info: CollectionInfo {
            name: "RoundTrip".to_string(),
            schema: postpat_collection::SCHEMA_V2_1.to_string(),
            ..Default::default()
        },
        item: vec![Item {
            name: "Create".to_string(),
            request: Request {
                method: "POST".to_string(),
                body: Body {
                    mode: "raw".to_string(),
                    raw: "{\"quote\": \"\\\"\", \"slash\": \"\\\\\"}\n\ttab".to_string(),
                    ..Default::default()
                },
                url: Url::raw("https://api.example.com/items"),
                ..Default::default()
            },
            ..Default::default()
        }],
        ..Default::default()
    };

    let split = Splitter::new(SplitOptions::new().with_output_dir(temp.path()))
        .split(&collection)
        .unwrap();

    let ids = SequentialIds::new("id");
    let joined = Joiner::new(JoinOptions::new().with_output_dir(temp.path()), &ids)
        .join(&split.directory)
        .unwrap();

    let rendered = read_json(&joined.output_path);
    let reparsed: Collection = serde_json::from_value(rendered).unwrap();

    assert_eq!(reparsed.info.name, "RoundTrip");
    assert_eq!(reparsed.item.len(), 1);
    assert_eq!(reparsed.item[0].request.method, "POST");
    assert_eq!(reparsed.item[0].request.url.raw, "https://api.example.com/items");
    assert_eq!(reparsed.item[0].request.body.raw, collection.item[0].request.body.raw);
    assert_eq!(reparsed.item[0].request.body.mode, "raw");
}

/// Test that each render draws new ids.
#[test]
fn test_fresh_ids_per_render() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(
        temp.path(),
        &[
            (
                "event:collection",
                r#"[{"listen":"test","script":{"type":"text/javascript","exec":["a"]}}]"#,
            ),
            ("variables:collection", r#"[{"key":"k","value":"v","type":"string"}]"#),
        ],
    );

    let ids = UuidGenerator;
    let render = |sub: &str| {
        let out = temp.path().join(sub);
        fs::create_dir(&out).unwrap();
        let result = Joiner::new(JoinOptions::new().with_output_dir(&out), &ids)
            .join(&dir)
            .unwrap();
        let json = read_json(&result.output_path);
        (
            json["event"][0]["script"]["id"].as_str().unwrap().to_string(),
            json["variable"][0]["id"].as_str().unwrap().to_string(),
        )
    };

    let first = render("one");
    let second = render("two");
    assert_ne!(first.0, first.1);
    assert_ne!(first.0, second.0);
    assert_ne!(first.1, second.1);
}

/// Test that a custom template replaces the bundled one.
#[test]
fn test_join_with_custom_template() {
    let temp = tempdir().unwrap();
    let dir = foo_fixture(temp.path(), &[]);
    let template = temp.path().join("names.hbs");
    fs::write(
        &template,
        "[{{#each item}}{{quote name}}{{end_item @index (count ../item)}}{{/each}}]",
    )
    .unwrap();

    let ids = SequentialIds::new("id");
    let options = JoinOptions::new()
        .with_output_dir(temp.path())
        .with_template(Some(template));
    let result = Joiner::new(options, &ids).join(&dir).unwrap();

    assert_eq!(fs::read_to_string(result.output_path).unwrap(), r#"["Ping"]"#);
}
