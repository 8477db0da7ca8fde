use crate::domain::test_utils::*;
use crate::intercept::{Interceptor, Replacements};
use crate::runtime::test_utils::*;

use super::macros::*;
use super::session::*;

#[test]
fn unmapped_nested_acquisition_falls_back_to_real() {
    let runtime = fixture_runtime();
    let activation = Interceptor::new(Replacements::new())
        .activate(&runtime)
        .unwrap();

    let fetcher = runtime.import_module("fetcher").unwrap();
    let netsvc = runtime.read_module(&mn!("netsvc")).unwrap();

    assert_same_identity!(fetcher.attr("remote").unwrap(), netsvc);
    assert_eq!(netsvc.attr("host"), Some(str!("localhost")));

    activation.deactivate();
}

#[test]
fn mapped_module_substitutes_nested_acquisitions() {
    let runtime = fixture_runtime();
    let double = obj! { "host" => str!("stub"), "port" => int!(1) };
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let fetcher = runtime.import_module("fetcher").unwrap();

    let remote = fetcher.attr("remote").unwrap();
    assert_same_identity!(remote, double);
    assert_eq!(remote.attr("host"), Some(str!("stub")));

    activation.deactivate();
}

#[test]
fn first_level_acquisitions_are_never_substituted() {
    let runtime = fixture_runtime();
    let double = obj! { "host" => str!("stub") };
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let netsvc = runtime.import_module("netsvc").unwrap();

    assert!(!netsvc.same_identity(&double));
    assert_eq!(netsvc.attr("host"), Some(str!("localhost")));

    activation.deactivate();
}

#[test]
fn scalar_replacements_pass_through_verbatim() {
    let runtime = fixture_runtime();
    let replacements = Replacements::new().with("netsvc", str!("stub"));
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let fetcher = runtime.import_module("fetcher").unwrap();
    assert_eq!(fetcher.attr("remote"), Some(str!("stub")));

    activation.deactivate();
}

#[test]
fn substitution_applies_through_nested_chains() {
    let runtime = fixture_runtime();
    let double = obj! { "host" => str!("deep") };
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // pipeline pulls in fetcher, which pulls in netsvc; only the leaf is mapped.
    let pipeline = runtime.import_module("pipeline").unwrap();
    let fetcher = pipeline.attr("fetcher").unwrap();

    assert_same_identity!(fetcher.attr("remote").unwrap(), double);

    activation.deactivate();
}

#[test]
fn nested_consumers_share_one_replacement() {
    let runtime = fixture_runtime();
    runtime.define_module("second_consumer", |rt, module| {
        let remote = rt.import_module("netsvc")?;
        module.borrow_mut().insert("remote", remote);
        Ok(())
    });
    let double = obj!();
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    let fetcher = runtime.import_module("fetcher").unwrap();
    let second = runtime.import_module("second_consumer").unwrap();

    assert_same_identity!(
        fetcher.attr("remote").unwrap(),
        second.attr("remote").unwrap()
    );

    activation.deactivate();
}

#[test]
fn sentinel_replacement_short_circuits_the_load() {
    let runtime = fixture_runtime();
    runtime.define_module("consumer", |rt, module| {
        let audit = rt.import_module("audit")?;
        module.borrow_mut().insert("audit", audit);
        Ok(())
    });
    let replacements = Replacements::new().with("audit", none!());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    // `audit` has no definition anywhere; the mapped sentinel stands in for it.
    let consumer = runtime.import_module("consumer").unwrap();

    assert_eq!(consumer.attr("audit"), Some(none!()));
    assert_eq!(runtime.read_module(&mn!("audit")), Some(none!()));

    activation.deactivate();
    assert!(runtime.read_module(&mn!("audit")).is_none());
}

#[test]
fn replacement_is_registered_under_the_requested_name() {
    let runtime = fixture_runtime();
    let double = obj!();
    let replacements = Replacements::new().with("netsvc", double.clone());
    let activation = Interceptor::new(replacements).activate(&runtime).unwrap();

    runtime.import_module("fetcher").unwrap();

    assert_same_identity!(runtime.read_module(&mn!("netsvc")).unwrap(), double);

    activation.deactivate();
}
