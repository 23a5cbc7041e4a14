use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

struct AppMetadata {
    file: std::fs::File,
}

impl AppMetadata {
    pub fn new() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
        let dest_path = Path::new(&out_dir).join("app_metadata.rs");
        let file = File::create(&dest_path)?;
        Ok(Self { file })
    }

    pub fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        write!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};\n",
            &key.to_uppercase(),
            &value
        )
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=TASKDECK_API_URL");

    // Load .env file if it exists
    let _ = dotenv();

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo_toml: Value = toml::from_str(&cargo_toml).expect("Failed to parse Cargo.toml");

    let mut app_metadata = AppMetadata::new()?;
    app_metadata.write("NAME", &env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "taskdeck".to_string()))?;
    app_metadata.write("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let metadata = cargo_toml.get("package").and_then(|pkg| pkg.get("metadata")).and_then(|meta| meta.as_table());

    if let Some(metadata) = metadata {
        for (key, value) in metadata {
            // An API URL in the environment wins over the manifest default
            if key == "api_url" {
                continue;
            }
            if let Some(value) = value.as_str() {
                app_metadata.write(key, value)?;
            }
        }
    }

    let api_url = match env::var("TASKDECK_API_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => metadata
            .and_then(|meta| meta.get("api_url"))
            .and_then(|value| value.as_str())
            .unwrap_or("https://jsonplaceholder.typicode.com")
            .to_string(),
    };
    app_metadata.write("API_URL", &api_url)?;

    Ok(())
}
