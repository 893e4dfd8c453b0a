use formbind_config::{BinderConfig, ConfigError};
use std::{env, fs};

const SAMPLE: &str = r#"
model-namespace = "Crm.Models"

[[binding]]
name = "account"
type = "Account"
enumerable = true

[[binding]]
name = "contact"
type = "Contact"
"#;

#[test]
fn parses_bindings_with_default_enumerable() {
    let config = BinderConfig::from_toml_str(SAMPLE).expect("sample config parses");

    assert_eq!(config.model_namespace, "Crm.Models");
    assert_eq!(config.bindings.len(), 2);
    assert_eq!(config.bindings[0].type_name, "Account");
    assert!(config.bindings[0].enumerable);
    assert!(!config.bindings[1].enumerable);
}

#[test]
fn missing_namespace_is_a_parse_error() {
    let err = BinderConfig::from_toml_str("[[binding]]\nname = \"a\"\ntype = \"A\"\n")
        .expect_err("namespace is required");

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let text = "model-namespace = \"M\"\nextra = 1\n";

    assert!(matches!(
        BinderConfig::from_toml_str(text),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn duplicate_names_are_rejected() {
    let text = r#"
model-namespace = "M"

[[binding]]
name = "account"
type = "Account"

[[binding]]
name = "account"
type = "Contact"
"#;

    let err = BinderConfig::from_toml_str(text).expect_err("duplicate name");
    assert!(matches!(err, ConfigError::DuplicateName(ref name) if name == "account"));
}

#[test]
fn blank_type_is_rejected() {
    let text = "model-namespace = \"M\"\n[[binding]]\nname = \"a\"\ntype = \"  \"\n";

    assert!(matches!(
        BinderConfig::from_toml_str(text),
        Err(ConfigError::EmptyType(_))
    ));
}

#[test]
fn load_reads_from_disk() {
    let path = env::temp_dir().join(format!("formbind-config-{}.toml", std::process::id()));
    fs::write(&path, SAMPLE).expect("write temp config");

    let config = BinderConfig::load(&path).expect("load temp config");
    fs::remove_file(&path).ok();

    assert_eq!(config.bindings[1].name, "contact");
}

#[test]
fn load_reports_missing_file() {
    let err = BinderConfig::load("/definitely/not/here/formbind.toml").expect_err("missing file");

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("formbind.toml"));
}
