//! Walkthrough of the Optional combinators
//!
//! Run with: cargo run --example simple

use anyhow::Context;
use nilo::utils::init_logging;
use nilo::Optional;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
}

impl Default for User {
    fn default() -> Self {
        User {
            name: "Default Implementation".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("user {0} not found")]
struct UserNotFound(u32);

fn get_user(found: bool) -> Result<u32, UserNotFound> {
    if found {
        Ok(1)
    } else {
        Err(UserNotFound(0))
    }
}

fn get_user_score(id: u32) -> Result<u32, UserNotFound> {
    if id == 0 {
        return Err(UserNotFound(id));
    }
    Ok(id + 2)
}

fn greeting(present: bool) -> Optional<&'static str> {
    if present {
        Optional::of("Hello")
    } else {
        Optional::empty()
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(Some("simple=info,nilo=debug"));

    let opt_user: Optional<User> = Optional::empty();

    info!("User or default: {:?}", opt_user.clone().or_default());
    info!("User or else: {:?}", opt_user.clone().or_else(User { name: "or".into() }));
    info!(
        "User or else get: {:?}",
        opt_user.clone().or_else_get(|| User { name: "else".into() })
    );
    info!(
        "Map or: {:?}",
        opt_user
            .clone()
            .map(|mut u| {
                u.name = "something".into();
                u
            })
            .or_else(User { name: "or".into() })
    );

    Optional::from_result(get_user(true))
        .and_then_result(get_user_score)
        .consume(|score| info!("Value: {}", score));

    if let Err(err) = greeting(false).or_error(|| anyhow::anyhow!("some err")) {
        info!("Error: {}", err);
    }

    info!("{}", greeting(true).map_to_string(|v| format!("{}, World", v)));

    let renamed = Optional::of_nullable(Some(User { name: "blabla".into() }))
        .and_then(|u| Optional::of(User { name: format!("{}bla", u.name) }));
    info!("{:?}", renamed);

    let mut slot = Optional::of(3);
    let taken = slot.take_if(|v| *v > 2);
    info!("Taken {} leaving {}", taken, slot);

    let score = Optional::from_result(get_user(false))
        .and_then_result(get_user_score)
        .ok_or_else(|| UserNotFound(0))
        .context("looking up score for missing user");
    if let Err(err) = score {
        info!("Expected failure: {:#}", err);
    }

    Ok(())
}
