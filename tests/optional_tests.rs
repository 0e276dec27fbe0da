//! Scenario tests for the Optional container
//!
//! Walks through construction, unwrapping, chaining and mutation the way
//! calling code uses them.

use nilo::{Optional, OptionalError};

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    retries: u32,
    endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            retries: 3,
            endpoint: "localhost".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct LookupError(String);

fn find_user(id: u32) -> Result<String, LookupError> {
    match id {
        1 => Ok("alice".to_string()),
        2 => Ok("bob".to_string()),
        _ => Err(LookupError(format!("no user {}", id))),
    }
}

fn manager_of(name: String) -> Optional<String> {
    if name == "bob" {
        Optional::of("alice".to_string())
    } else {
        Optional::empty()
    }
}

#[test]
fn test_from_result_scenarios() {
    let present = Optional::from_result(Ok::<i32, LookupError>(10));
    assert_eq!(*present.get(), 10);

    let empty = Optional::from_result(Err::<i32, _>(LookupError("boom".into())));
    assert!(empty.is_empty());
}

#[test]
fn test_chained_lookups() {
    let manager = Optional::of(2)
        .and_then_result(find_user)
        .and_then(manager_of);
    assert_eq!(manager, Optional::of("alice".to_string()));

    let manager = Optional::of(1)
        .and_then_result(find_user)
        .and_then(manager_of);
    assert!(manager.is_empty());

    let manager = Optional::of(9)
        .and_then_result(find_user)
        .and_then(manager_of);
    assert!(manager.is_empty());
}

#[test]
fn test_or_error_bridges_to_result() {
    fn load(id: u32) -> Result<usize, LookupError> {
        let user = Optional::from_result(find_user(id));
        let name = user.or_error(|| LookupError(format!("user {} missing", id)))?;
        Ok(name.len())
    }

    assert_eq!(load(1), Ok(5));
    assert_eq!(load(7), Err(LookupError("user 7 missing".into())));
}

#[test]
fn test_try_get_with_question_mark() {
    fn first_char(o: &Optional<String>) -> Result<char, OptionalError> {
        Ok(o.try_get()?.chars().next().unwrap_or(' '))
    }

    assert_eq!(first_char(&Optional::of("xyz".to_string())).unwrap(), 'x');
    assert!(matches!(
        first_char(&Optional::empty()),
        Err(OptionalError::EmptyAccess)
    ));
}

#[test]
fn test_get_or_insert_default_custom_type() {
    let mut settings: Optional<Settings> = Optional::empty();
    let value = settings.get_or_insert_default().clone();

    assert_eq!(value, Settings::default());
    assert_eq!(settings, Optional::of(Settings::default()));
    assert_eq!(settings.get().retries, 3);
}

#[test]
fn test_get_or_insert_default_builtin_zero() {
    let mut counter: Optional<i32> = Optional::empty();
    assert_eq!(*counter.get_or_insert_default(), 0);
    assert_eq!(counter, Optional::of(0));

    let mut existing = Optional::of(12);
    assert_eq!(*existing.get_or_insert_default(), 12);
}

#[test]
fn test_map_or_default_uses_custom_default() {
    let settings = Optional::<u32>::empty().map_or_default(|retries| Settings {
        retries,
        ..Settings::default()
    });
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_take_then_take_again() {
    let mut slot = Optional::of("token");
    assert_eq!(slot.take(), Optional::of("token"));
    assert!(slot.is_empty());
    assert_eq!(slot.take(), Optional::empty());
}

#[test]
fn test_replace_versus_take_and_insert() {
    let mut slot = Optional::of(1);
    let old = slot.take();
    slot.insert(2);
    assert_eq!(old, Optional::of(1));
    assert_eq!(slot, Optional::of(2));

    assert_eq!(slot.replace(3), Optional::of(3));
    assert_eq!(slot, Optional::of(3));
}

#[test]
fn test_inspect_chain_logs_without_changing() {
    let mut log = Vec::new();
    let result = Optional::of(4)
        .inspect(|v| log.push(format!("got {}", v)))
        .filter(|v| *v > 2)
        .map(|v| v * 2);
    assert_eq!(result, Optional::of(8));
    assert_eq!(log, vec!["got 4".to_string()]);
}

#[test]
fn test_display_rendering() {
    assert_eq!(format!("{}", Optional::of(5)), "Present(5)");
    assert_eq!(format!("{}", Optional::<u8>::empty()), "Empty");
}

#[test]
#[should_panic(expected = "called `Optional::get()` on an `Empty` value")]
fn test_get_on_empty_is_unrecoverable() {
    let opt: Optional<Settings> = Optional::empty();
    let _retries = opt.get().retries;
}

#[test]
#[should_panic(expected = "settings must be loaded before start")]
fn test_or_panic_carries_message() {
    Optional::<Settings>::empty().or_panic("settings must be loaded before start");
}
