use catprint::models::{FeedStrategy, PayloadEncoding, StartCommand};
use catprint::{registry, DeviceId, ModelError, ModelRegistry};
use std::collections::BTreeSet;

const KNOWN: [&str; 7] = ["GB01", "GB02", "GB03", "GT01", "MX05", "MX06", "YT01"];

#[test]
fn test_all_known_models_present() {
    for name in KNOWN {
        assert!(registry().has(name), "{} should be registered", name);
    }
}

#[test]
fn test_new_kind_only_gb03() {
    for name in KNOWN {
        let spec = registry().get(name).unwrap();
        assert_eq!(spec.is_new_kind, name == "GB03", "is_new_kind for {}", name);
    }
}

#[test]
fn test_problem_feeding_only_mx05_mx06() {
    for name in KNOWN {
        let spec = registry().get(name).unwrap();
        let expected = name == "MX05" || name == "MX06";
        assert_eq!(spec.problem_feeding, expected, "problem_feeding for {}", name);
    }
}

#[test]
fn test_paper_width_is_384() {
    for name in KNOWN {
        assert_eq!(registry().get(name).unwrap().paper_width, 384);
    }
}

#[test]
fn test_unknown_model() {
    assert_eq!(
        registry().get("NOT_A_REAL_MODEL"),
        Err(ModelError::UnknownModel("NOT_A_REAL_MODEL".to_string()))
    );
    assert!(!registry().has("NOT_A_REAL_MODEL"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert!(!registry().has("gb01"));
    assert!(matches!(registry().get("gb01"), Err(ModelError::UnknownModel(_))));
}

#[test]
fn test_names_match_known_list() {
    let names = registry().names();
    assert_eq!(names.len(), 7);

    let names: BTreeSet<String> = names.into_iter().collect();
    let expected: BTreeSet<String> = KNOWN.iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_repeated_lookups_are_equal() {
    for name in KNOWN {
        assert_eq!(registry().get(name), registry().get(name));
    }
    assert_eq!(registry(), &ModelRegistry::builtin().unwrap());
}

#[test]
fn test_derived_capabilities() {
    for (name, spec) in registry().iter() {
        assert_eq!(spec.bytes_per_line(), 48);
        assert_eq!(spec.payload_encoding(), PayloadEncoding::Uncompressed);

        let feed = if name == "MX05" || name == "MX06" { FeedStrategy::Workaround } else { FeedStrategy::Standard };
        assert_eq!(spec.feed_strategy(), feed, "feed strategy for {}", name);

        let start = if name == "GB03" { StartCommand::NewKind } else { StartCommand::Standard };
        assert_eq!(spec.start_command(), start, "start command for {}", name);
    }
}

#[test]
fn test_resolve_discovered_device() {
    let device: DeviceId = "MX05,AA:BB:CC:DD:EE:FF".parse().unwrap();
    let spec = registry().resolve_device(&device).unwrap();
    assert!(spec.problem_feeding);

    let unknown = DeviceId::new("Printer", "AA:BB:CC:DD:EE:FF");
    assert_eq!(
        registry().resolve_device(&unknown),
        Err(ModelError::UnknownModel("Printer".to_string()))
    );
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let handles: Vec<_> = KNOWN
        .iter()
        .map(|&name| std::thread::spawn(move || registry().get(name).unwrap()))
        .collect();
    for (handle, name) in handles.into_iter().zip(KNOWN) {
        assert_eq!(handle.join().unwrap(), registry().get(name).unwrap());
    }
}
