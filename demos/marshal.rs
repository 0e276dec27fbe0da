//! Marshaling structs with Optional fields to and from JSON
//!
//! Run with: cargo run --example marshal

use nilo::utils::init_logging_from_config;
use nilo::{codec, Optional};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    name: String,
    #[serde(default)]
    code: Optional<String>,
}

fn main() -> anyhow::Result<()> {
    let config = nilo::NiloConfig::from_env()?;
    config.validate()?;
    init_logging_from_config(config.logging.as_option());

    let mut user = User {
        name: "Name".to_string(),
        code: Optional::empty(),
    };

    let json = serde_json::to_string_pretty(&user)?;
    info!("Marshaled:\n{}", json);

    let unmarshaled: User = serde_json::from_str(&json)?;
    info!("Unmarshaled: {:?}", unmarshaled);
    unmarshaled
        .code
        .if_empty(|| info!("Code is Empty: {}", unmarshaled.code));

    user.code.insert("some code".to_string());

    let json = serde_json::to_string_pretty(&user)?;
    info!("Marshaled:\n{}", json);

    let unmarshaled: User = serde_json::from_str(&json)?;
    info!("Unmarshaled: {:?}", unmarshaled);
    if unmarshaled.code.is_present() {
        info!("Code is Present: {}", unmarshaled.code.or_panic("should not be empty"));
    }

    let json_codec = nilo::Codec::new(config.codec);
    let mut code: Optional<u32> = Optional::of(7);
    if let Err(err) = json_codec.decode_into(&mut code, "\"not a number\"") {
        info!("Decode failed ({}), binding is now {}", err, code);
    }
    info!("Round trip of {}: {}", Optional::of(5), codec::to_json(&Optional::of(5))?);

    Ok(())
}
