//! Behaviour-driven step definitions driving the list CLI scenarios.

use super::helpers::CatalogueDir;
use super::*;
use crate::list::run_list_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

#[derive(Debug, Default)]
struct ListWorld {
    catalogue: RefCell<Option<CatalogueDir>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ListWorld {
    fn output(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        serde_json::from_slice(&self.stdout.borrow()).expect("stdout should be JSON")
    }
}

#[fixture]
fn list_world() -> ListWorld {
    ListWorld::default()
}

#[given("a museum catalogue is available")]
fn catalogue_exists(#[from(list_world)] world: &ListWorld) {
    world.catalogue.replace(Some(CatalogueDir::sample()));
}

#[when("I run the list command")]
fn run_list_command(#[from(list_world)] world: &ListWorld) {
    let catalogue = world.catalogue.borrow();
    let path = catalogue.as_ref().expect("catalogue written").path();
    let invocation = ["nightwalk", "list", path.as_str()];
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::List(args) => {
                let mut buffer = world.stdout.borrow_mut();
                run_list_with(args, &mut *buffer)
            }
            Command::Plan(_) => panic!("expected list command"),
        });
    world.result.replace(Some(outcome));
}

#[then("the museums are listed as {ids}")]
fn museums_listed(#[from(list_world)] world: &ListWorld, ids: String) {
    let output = world.output();
    let listed: Vec<String> = output["museums"]
        .as_array()
        .expect("museums is an array")
        .iter()
        .map(|entry| entry["stop"]["id"].to_string())
        .collect();
    assert_eq!(listed.join(","), ids);
    assert_eq!(output["start"]["name"], "Dam Square");
}

#[then("{name} is listed as excluded")]
fn listed_as_excluded(#[from(list_world)] world: &ListWorld, name: String) {
    let output = world.output();
    assert_eq!(output["excluded"][0]["name"], Value::String(name));
    assert_eq!(output["excluded"][0]["reason"], "missing_coordinates");
}

#[scenario(path = "tests/features/list_command.feature", index = 0)]
fn list_nearest_first(#[from(list_world)] world: ListWorld) {
    let _ = world;
}
