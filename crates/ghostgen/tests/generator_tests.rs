//! End-to-end tests for interception method generation.
//!
//! Tests cover:
//! - Exact body text for the write kind (guard, membership branch, fallback)
//! - Delegation to genuine user overrides
//! - Omission of the membership branch for classes without public properties
//! - Determinism of repeated generation
//! - Guard ordering across all four kinds

use ghostgen::classify::classify;
use ghostgen::generator::{generate, generate_all};
use ghostgen::metadata::{
    ClassMetadata, InitializerDescriptor, MethodBody, MethodKind, PropertyMetadata, Visibility,
};
use ghostgen::PublicPropertiesMap;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn initializer() -> InitializerDescriptor {
    InitializerDescriptor::new("foo", "baz")
}

fn two_property_class() -> ClassMetadata {
    ClassMetadata::new("Acme\\ClassWithTwoPublicProperties")
        .with_property(PropertyMetadata::new("bar", Visibility::Public))
        .with_property(PropertyMetadata::new("baz", Visibility::Public))
}

/// A stand-in for the mocked non-empty map of the reference scenarios: the
/// symbol is fixed to `bar` so expected bodies are literal strings.
fn mocked_map() -> PublicPropertiesMap {
    PublicPropertiesMap::new("bar", vec!["bar".into(), "baz".into()])
}

// =============================================================================
// WRITE KIND: BODY STRUCTURE
// =============================================================================

#[test]
fn test_write_body_structure_without_override() {
    let class = ClassMetadata::new("Acme\\EmptyClass");
    let method = generate(MethodKind::Set, &class, &initializer(), &mocked_map()).unwrap();

    assert_eq!(method.name(), "__set");
    assert_eq!(method.parameters().len(), 2);
    assert_eq!(
        method.render_body(),
        "$this->foo && $this->baz('__set', array('name' => $name, 'value' => $value));\n\n\
         if (isset(self::$bar[$name])) {\n    return ($this->$name = $value);\n}\n\n\
         return ($this->$name = $value);"
    );
}

#[test]
fn test_write_body_structure_with_public_properties() {
    let class = two_property_class();
    let map = classify(&class, &initializer()).unwrap();
    let method = generate(MethodKind::Set, &class, &initializer(), &map).unwrap();

    assert_eq!(method.name(), "__set");
    assert_eq!(method.parameters().len(), 2);
    assert!(!map.is_empty());
    assert!(map.contains("bar") && map.contains("baz"));

    let body = method.render_body();
    let branch = format!(
        "if (isset(self::${}[$name])) {{\n    return ($this->$name = $value);\n}}",
        map.symbol()
    );
    assert!(body.contains(&branch));
}

#[test]
fn test_write_body_structure_with_overridden_magic_set() {
    let class = ClassMetadata::new("Acme\\ClassWithMagicMethods").with_interceptor(
        MethodKind::Set,
        MethodBody::Source("$this->values[$name] = $value; return $value;".into()),
    );
    let method = generate(MethodKind::Set, &class, &initializer(), &mocked_map()).unwrap();

    assert_eq!(method.name(), "__set");
    assert_eq!(method.parameters().len(), 2);
    assert_eq!(
        method.render_body(),
        "$this->foo && $this->baz('__set', array('name' => $name, 'value' => $value));\n\n\
         if (isset(self::$bar[$name])) {\n    return ($this->$name = $value);\n}\n\n\
         return parent::__set($name, $value);"
    );
}

// =============================================================================
// READ / EXISTS / UNSET KINDS
// =============================================================================

#[test]
fn test_read_body_defaults_to_null_sentinel() {
    let class = ClassMetadata::new("Acme\\EmptyClass");
    let method = generate(MethodKind::Get, &class, &initializer(), &mocked_map()).unwrap();

    assert_eq!(method.name(), "__get");
    assert_eq!(method.parameters().len(), 1);
    assert_eq!(
        method.render_body(),
        "$this->foo && $this->baz('__get', array('name' => $name));\n\n\
         if (isset(self::$bar[$name])) {\n    return $this->$name;\n}\n\n\
         return null;"
    );
}

#[test]
fn test_exists_body_defaults_to_false() {
    let class = ClassMetadata::new("Acme\\EmptyClass");
    let method = generate(MethodKind::Isset, &class, &initializer(), &mocked_map()).unwrap();

    assert_eq!(method.name(), "__isset");
    assert_eq!(
        method.render_body(),
        "$this->foo && $this->baz('__isset', array('name' => $name));\n\n\
         if (isset(self::$bar[$name])) {\n    return isset($this->$name);\n}\n\n\
         return false;"
    );
}

#[test]
fn test_unset_body_clears_and_returns_nothing() {
    let class = ClassMetadata::new("Acme\\EmptyClass");
    let method = generate(MethodKind::Unset, &class, &initializer(), &mocked_map()).unwrap();

    assert_eq!(method.name(), "__unset");
    assert_eq!(
        method.render_body(),
        "$this->foo && $this->baz('__unset', array('name' => $name));\n\n\
         if (isset(self::$bar[$name])) {\n    unset($this->$name);\n\n    return;\n}\n\n\
         return;"
    );
}

#[test]
fn test_delegating_fallbacks_for_all_kinds() {
    let class = ClassMetadata::new("Acme\\AllMagic")
        .with_interceptor(MethodKind::Get, MethodBody::Source("return $this->lazy($name);".into()))
        .with_interceptor(MethodKind::Set, MethodBody::Source("return $this->store($name, $value);".into()))
        .with_interceptor(MethodKind::Isset, MethodBody::Source("return $this->has($name);".into()))
        .with_interceptor(MethodKind::Unset, MethodBody::Source("$this->drop($name);".into()));

    let methods = generate_all(&class, &initializer()).unwrap();
    assert!(methods[&MethodKind::Get]
        .render_body()
        .ends_with("return parent::__get($name);"));
    assert!(methods[&MethodKind::Set]
        .render_body()
        .ends_with("return parent::__set($name, $value);"));
    assert!(methods[&MethodKind::Isset]
        .render_body()
        .ends_with("return parent::__isset($name);"));
    assert!(methods[&MethodKind::Unset]
        .render_body()
        .ends_with("return parent::__unset($name);"));
}

// =============================================================================
// STRUCTURAL PROPERTIES
// =============================================================================

#[test]
fn test_empty_public_set_emits_no_membership_branch() {
    let class = ClassMetadata::new("Acme\\NoPublics")
        .with_property(PropertyMetadata::new("hidden", Visibility::Private))
        .with_property(PropertyMetadata::new("counter", Visibility::Public).into_static());

    let methods = generate_all(&class, &initializer()).unwrap();
    for kind in MethodKind::ALL {
        let body = methods[&kind].render_body();
        assert!(
            !body.contains("isset(self::$"),
            "dead membership test emitted for {kind}"
        );
    }
}

#[test]
fn test_guard_precedes_every_other_statement() {
    let class = two_property_class();
    let methods = generate_all(&class, &initializer()).unwrap();

    for kind in MethodKind::ALL {
        let body = methods[&kind].render_body();
        let guard_at = body
            .find("$this->foo && $this->baz(")
            .unwrap_or_else(|| panic!("no guard in {kind} body"));
        assert_eq!(guard_at, 0, "guard not first in {kind} body");
    }
}

#[test]
fn test_public_branch_precedes_override_fallback() {
    // Open-question resolution: with public properties AND a genuine
    // override, the membership branch still comes first.
    let class = two_property_class().with_interceptor(
        MethodKind::Set,
        MethodBody::Source("return $this->store($name, $value);".into()),
    );

    let methods = generate_all(&class, &initializer()).unwrap();
    let body = methods[&MethodKind::Set].render_body();
    let branch_at = body.find("if (isset(self::$").unwrap();
    let delegate_at = body.find("return parent::__set").unwrap();
    assert!(branch_at < delegate_at);
}

#[test]
fn test_no_delegation_without_genuine_override() {
    let default_bodied = ClassMetadata::new("Acme\\Defaulted")
        .with_interceptor(MethodKind::Get, MethodBody::Source("return null;".into()))
        .with_interceptor(MethodKind::Isset, MethodBody::Source("return false;".into()));

    let methods = generate_all(&default_bodied, &initializer()).unwrap();
    for kind in MethodKind::ALL {
        assert!(!methods[&kind].render_body().contains("parent::"));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let class = two_property_class().with_interceptor(
        MethodKind::Get,
        MethodBody::Source("return $this->lazy($name);".into()),
    );

    let first = generate_all(&class, &initializer()).unwrap();
    let second = generate_all(&class, &initializer()).unwrap();

    for kind in MethodKind::ALL {
        assert_eq!(first[&kind], second[&kind]);
        assert_eq!(
            serde_json::to_string(&first[&kind]).unwrap(),
            serde_json::to_string(&second[&kind]).unwrap()
        );
    }
}

#[test]
fn test_metadata_arrives_intact_over_json() {
    // The metadata seam is JSON from an external reflection collaborator;
    // a round-tripped class must generate identical methods.
    let class = two_property_class().with_interceptor(
        MethodKind::Unset,
        MethodBody::Source("$this->drop($name);".into()),
    );

    let json = serde_json::to_string(&class).unwrap();
    let decoded: ClassMetadata = serde_json::from_str(&json).unwrap();

    let direct = generate_all(&class, &initializer()).unwrap();
    let via_json = generate_all(&decoded, &initializer()).unwrap();
    for kind in MethodKind::ALL {
        assert_eq!(direct[&kind], via_json[&kind]);
    }
}
