use std::{collections::HashMap, path::PathBuf};

use obscurify::{
    Error,
    config::{
        Config, DEFAULT_API_URL, DEFAULT_SCOPE, DEFAULT_SERVER_ADDRESS, StoreBackend, parse_paths,
    },
};

fn required_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client-id"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "client-secret"),
        ("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:8888/callback"),
    ])
}

fn load(vars: &HashMap<&str, &str>) -> Result<Config, Error> {
    Config::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
}

#[test]
fn test_parse_paths_drops_empty_entries() {
    assert_eq!(parse_paths(" /a, ,/b "), vec!["/a", "/b"]);
    assert_eq!(parse_paths("/stats"), vec!["/stats"]);
    assert!(parse_paths("").is_empty());
    assert!(parse_paths(" , ,").is_empty());
}

#[test]
fn test_store_backend_from_str() {
    assert_eq!("file".parse::<StoreBackend>().unwrap(), StoreBackend::File);
    assert_eq!(" MEMORY ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
    assert!(matches!(
        "bogus".parse::<StoreBackend>(),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_from_lookup_applies_defaults() {
    let config = load(&required_vars()).unwrap();

    assert_eq!(config.client_id, "client-id");
    assert_eq!(config.client_secret, "client-secret");
    assert_eq!(config.redirect_uri, "http://127.0.0.1:8888/callback");
    assert_eq!(config.server_addr, DEFAULT_SERVER_ADDRESS);
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.auth_required_paths, vec!["/stats"]);
    assert_eq!(config.store, StoreBackend::File);
}

#[test]
fn test_from_lookup_reads_overrides() {
    let mut vars = required_vars();
    vars.insert("SERVER_ADDRESS", "0.0.0.0:3000");
    vars.insert("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/");
    vars.insert("AUTH_REQUIRED_PATHS", "/stats, /profile,");
    vars.insert("OBSCURIFY_STORE", "memory");
    vars.insert("OBSCURIFY_DATA_DIR", "/tmp/obscurify");

    let config = load(&vars).unwrap();

    assert_eq!(config.server_addr, "0.0.0.0:3000");
    // Trailing slash is trimmed
    assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
    assert_eq!(config.auth_required_paths, vec!["/stats", "/profile"]);
    assert_eq!(config.store, StoreBackend::Memory);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/obscurify"));
}

#[test]
fn test_from_lookup_requires_credentials() {
    for missing in [
        "SPOTIFY_API_AUTH_CLIENT_ID",
        "SPOTIFY_API_AUTH_CLIENT_SECRET",
        "SPOTIFY_API_REDIRECT_URI",
    ] {
        let mut vars = required_vars();
        vars.remove(missing);

        match load(&vars) {
            Err(Error::Config(message)) => assert!(message.contains(missing)),
            other => panic!("expected a config error for {}, got {:?}", missing, other),
        }
    }
}

#[test]
fn test_from_lookup_rejects_unknown_store() {
    let mut vars = required_vars();
    vars.insert("OBSCURIFY_STORE", "postgres");

    assert!(matches!(load(&vars), Err(Error::Config(_))));
}
