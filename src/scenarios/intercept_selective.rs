use crate::domain::test_utils::*;
use crate::intercept::{Interceptor, Replacements};
use crate::runtime::test_utils::*;
use crate::runtime::Value;

use super::macros::*;
use super::session::*;

#[test]
fn qualified_replacements_feed_selective_imports() {
    let runtime = fixture_runtime();
    let seen = CountingResolver::install(&runtime);
    let replacements = Replacements::new()
        .with("netsvc.host", str!("stub-host"))
        .with("netsvc.port", int!(9));
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let reporting = runtime.import_module("reporting").unwrap();

    assert_eq!(reporting.attr("host"), Some(str!("stub-host")));
    assert_eq!(reporting.attr("port"), Some(int!(9)));
    // Every requested attribute was mapped, so the real resolver never saw netsvc.
    assert!(!seen.borrow().contains(&mn!("netsvc")));
    assert!(seen.borrow().contains(&mn!("reporting")));

    activation.deactivate();
}

#[test]
fn qualified_entries_beat_bare_entries() {
    let runtime = fixture_runtime();
    let marker = obj!();
    let fake = obj! { "host" => str!("fake-host"), "port" => int!(7) };
    let replacements = Replacements::new()
        .with("netsvc.host", marker.clone())
        .with("netsvc", fake);
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let reporting = runtime.import_module("reporting").unwrap();

    // host comes from the qualified entry, port falls back to the bare one.
    assert_same_identity!(reporting.attr("host").unwrap(), marker);
    assert_eq!(reporting.attr("port"), Some(int!(7)));

    activation.deactivate();
}

#[test]
fn deferred_attributes_come_from_one_bare_resolution() {
    let runtime = fixture_runtime();
    let seen = CountingResolver::install(&runtime);
    let replacements = Replacements::new().with("netsvc.host", str!("stub-host"));
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let reporting = runtime.import_module("reporting").unwrap();

    assert_eq!(reporting.attr("host"), Some(str!("stub-host")));
    assert_eq!(reporting.attr("port"), Some(int!(8080)));
    let netsvc_requests = seen
        .borrow()
        .iter()
        .filter(|name| **name == mn!("netsvc"))
        .count();
    assert_eq!(netsvc_requests, 1);

    activation.deactivate();
}

#[test]
fn bare_replacement_serves_selective_attributes() {
    let runtime = fixture_runtime();
    let fake = obj! { "host" => str!("fake"), "port" => int!(7) };
    let replacements = Replacements::new().with("netsvc", fake);
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // Nothing is qualified, so both attributes defer to the bare replacement.
    let reporting = runtime.import_module("reporting").unwrap();
    assert_eq!(reporting.attr("host"), Some(str!("fake")));
    assert_eq!(reporting.attr("port"), Some(int!(7)));

    activation.deactivate();
}

#[test]
fn selective_first_level_extracts_substituted_bindings() {
    let runtime = fixture_runtime();
    let double = obj!();
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // fetcher itself loads for real; the `remote` it binds came from the
    // substituted nested acquisition.
    let values = runtime.import_from("fetcher", &["remote"]).unwrap();
    assert_same_identity!(values[0], double);

    activation.deactivate();
}

#[test]
fn submodule_requests_from_a_selective_import_are_substituted() {
    let runtime = fixture_runtime();
    let marker = obj!();
    let replacements = Replacements::new().with("pack.core", marker.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // `core` is unbound in pack's namespace, so the loader acquires it as a
    // submodule, and that request arrives below the first level.
    let values = runtime.import_from("pack", &["core"]).unwrap();
    assert_same_identity!(values[0], marker);

    activation.deactivate();
}

#[test]
fn fully_explicit_selective_needs_no_real_module() {
    let runtime = fixture_runtime();
    runtime.define_module("consumer", |rt, module| {
        let values = rt.import_from("ghost", &["alpha", "beta"])?;
        let mut module = module.borrow_mut();
        module.insert("alpha", values[0].clone());
        module.insert("beta", values[1].clone());
        Ok(())
    });
    let replacements = Replacements::new()
        .with("ghost.alpha", int!(1))
        .with("ghost.beta", int!(2));
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // `ghost` is not defined anywhere; a bare resolution of it would fail.
    let consumer = runtime.import_module("consumer").unwrap();

    assert_eq!(consumer.attr("alpha"), Some(int!(1)));
    assert_eq!(consumer.attr("beta"), Some(int!(2)));

    activation.deactivate();
}

#[test]
fn stand_in_carries_only_the_requested_attributes() {
    let runtime = fixture_runtime();
    runtime.define_module("consumer", |rt, _| {
        rt.import_from("ghost", &["alpha", "beta"])?;
        Ok(())
    });
    let replacements = Replacements::new()
        .with("ghost.alpha", int!(1))
        .with("ghost.beta", int!(2))
        .with("ghost.gamma", int!(3));
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    runtime.import_module("consumer").unwrap();

    let Some(Value::Object(stand_in)) = runtime.read_module(&mn!("ghost")) else {
        panic!("expected a synthesized stand-in under the requested name");
    };
    let mut symbols = stand_in.borrow().symbols();
    symbols.sort();
    // gamma was mapped but never requested, so it is not part of the stand-in.
    assert_eq!(symbols, vec!["alpha".to_string(), "beta".to_string()]);

    activation.deactivate();
}

#[test]
fn missing_deferred_attribute_reports_the_first_in_request_order() {
    let runtime = fixture_runtime();
    runtime.define_module("consumer", |rt, _| {
        rt.import_from("netsvc", &["host", "flux", "blip"])?;
        Ok(())
    });
    let activation = Interceptor::new(Replacements::new())
        .activate(&runtime)
        .unwrap();

    // host copies fine; flux and blip are both absent, and flux comes first.
    assert_attribute_not_found!(runtime.import_module("consumer"), "netsvc", "flux");

    activation.deactivate();
}

#[test]
fn empty_attribute_list_behaves_as_a_bare_request() {
    let runtime = fixture_runtime();
    runtime.define_module("consumer", |rt, _| {
        let values = rt.import_from("netsvc", &[])?;
        assert!(values.is_empty());
        Ok(())
    });
    let double = obj!();
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    runtime.import_module("consumer").unwrap();

    // The whole replacement was registered, not a synthesized stand-in.
    assert_same_identity!(runtime.read_module(&mn!("netsvc")).unwrap(), double);

    activation.deactivate();
}
