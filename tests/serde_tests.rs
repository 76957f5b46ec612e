use serde::Deserialize;
use serde_minitoml::{decode, from_str, from_str_with_options, DecodeOptions, Error, Result};
use std::collections::HashMap;

#[derive(Deserialize, Debug, PartialEq)]
struct Database {
    server: String,
    ports: Vec<u16>,
    connection_max: u32,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Owner {
    name: String,
    #[serde(default)]
    nickname: Option<String>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Config {
    title: String,
    owner: Owner,
    database: Database,
}

const CONFIG: &str = r#"
# This is a config document.
title = "Example"

[owner]
name = "Tom"

[database]
server = "192.168.1.1"
ports = [ 8000, 8001, 8002 ]
connection_max = 5000
"#;

#[test]
fn test_config_struct() {
    let config: Config = from_str(CONFIG).unwrap();
    assert_eq!(config.title, "Example");
    assert_eq!(
        config.owner,
        Owner {
            name: "Tom".to_string(),
            nickname: None,
        }
    );
    assert_eq!(config.database.ports, vec![8000, 8001, 8002]);
    assert_eq!(config.database.connection_max, 5000);
}

#[test]
fn test_wrong_shape_reports_error() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Strict {
        title: u32,
    }

    let result: Result<Strict> = from_str(CONFIG);
    assert!(matches!(result, Err(Error::Custom(_))));
}

#[test]
fn test_tuple_and_map() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Doc {
        pair: (String, i64),
        labels: HashMap<String, String>,
    }

    let doc: Doc = from_str("pair = [\"x\", 9]\nlabels = { env = \"prod\", tier = \"web\" }").unwrap();
    assert_eq!(doc.pair, ("x".to_string(), 9));
    assert_eq!(doc.labels["tier"], "web");
}

#[test]
fn test_bools_with_options() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Flags {
        verbose: bool,
        dry_run: bool,
    }

    let options = DecodeOptions::new().with_bool_literals(true);
    let flags: Flags = from_str_with_options("verbose = true\ndry_run = false", &options).unwrap();
    assert_eq!(
        flags,
        Flags {
            verbose: true,
            dry_run: false,
        }
    );

    let result: Result<Flags> = from_str("verbose = true\ndry_run = false");
    assert!(result.unwrap_err().is_syntax());
}

#[test]
fn test_serialize_tree_to_json() {
    let root = decode(CONFIG).unwrap();
    let json = serde_json::to_value(&root).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "title": "Example",
            "owner": { "name": "Tom" },
            "database": {
                "server": "192.168.1.1",
                "ports": [8000, 8001, 8002],
                "connection_max": 5000
            }
        })
    );
}

#[test]
fn test_serialize_keeps_key_order() {
    let root = decode("zeta = 1\nalpha = 2\nmid = [3]").unwrap();
    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2,"mid":[3]}"#);
}
