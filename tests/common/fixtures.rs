//! Sample catalog types shared by integration tests.

use fixture::{Fixture, TypeDescriptor};
use fixture_core::catalog::{ClassDef, ConstructorCandidate, MethodSig};
use fixture_types::{parse_type_descriptor, parse_type_descriptor_with_params};
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse a type string, panicking on malformed test input.
pub fn td(s: &str) -> TypeDescriptor {
    parse_type_descriptor(s).unwrap_or_else(|e| panic!("bad test type {}: {}", s, e))
}

fn td_in(s: &str, params: &[&str]) -> TypeDescriptor {
    parse_type_descriptor_with_params(s, params)
        .unwrap_or_else(|e| panic!("bad test type {}: {}", s, e))
}

/// A seeded engine with the sample types:
///
/// - `Pair<A, B>`: `new(first: A, second: B)`
/// - `Box<T>`: `new(value: T, history: List<T>)`
/// - `User`: `new(username: String, email: String, age: Int)`
/// - `Shape`: variant of `Circle`, `Square`
/// - `Circle`: `new(radius: Double)`, `Square`: `new(side: Double)`
/// - `Named`: capability with `get_name(): String`
/// - `Origin`: singleton
#[allow(dead_code)]
pub fn sample_fixture(seed: u64) -> Fixture {
    let fixture = Fixture::seeded(seed);
    fixture.define(
        ClassDef::class("Pair").type_params(["A", "B"]).constructor(
            ConstructorCandidate::public("new")
                .param("first", TypeDescriptor::param("A"))
                .param("second", TypeDescriptor::param("B")),
        ),
    );
    fixture.define(
        ClassDef::class("Box").type_params(["T"]).constructor(
            ConstructorCandidate::public("new")
                .param("value", TypeDescriptor::param("T"))
                .param("history", td_in("List<T>", &["T"])),
        ),
    );
    fixture.define(
        ClassDef::class("User").constructor(
            ConstructorCandidate::public("new")
                .param("username", td("String"))
                .param("email", td("String"))
                .param("age", td("Int")),
        ),
    );
    fixture.define(
        ClassDef::variant("Shape")
            .alternative(td("Circle"))
            .alternative(td("Square")),
    );
    fixture.define(
        ClassDef::class("Circle")
            .constructor(ConstructorCandidate::public("new").param("radius", td("Double"))),
    );
    fixture.define(
        ClassDef::class("Square")
            .constructor(ConstructorCandidate::public("new").param("side", td("Double"))),
    );
    fixture.define(ClassDef::capability("Named").method(MethodSig::new("get_name", td("String"))));
    fixture.define(ClassDef::singleton("Origin"));
    fixture
}

/// The sample types as a catalog document.
#[allow(dead_code)]
pub const SAMPLE_CATALOG_JSON: &str = r#"{
  "classes": [
    { "name": "Pair", "type_params": ["A", "B"], "kind": "class",
      "constructors": [ { "name": "new", "visibility": "public",
        "params": [ { "name": "first", "type": "A" }, { "name": "second", "type": "B" } ] } ] },
    { "name": "User", "kind": "class",
      "constructors": [ { "name": "new",
        "params": [ { "name": "username", "type": "String" },
                    { "name": "email", "type": "String" },
                    { "name": "age", "type": "Int" } ] } ] },
    { "name": "Shape", "kind": "variant", "alternatives": ["Circle", "Square"] },
    { "name": "Circle", "kind": "class",
      "constructors": [ { "name": "new", "params": [ { "name": "radius", "type": "Double" } ] } ] },
    { "name": "Square", "kind": "class",
      "constructors": [ { "name": "new", "params": [ { "name": "side", "type": "Double" } ] } ] },
    { "name": "Named", "kind": "capability",
      "methods": [ { "name": "get_name", "returns": "String" } ] },
    { "name": "Origin", "kind": "singleton" }
  ]
}"#;

/// Write [`SAMPLE_CATALOG_JSON`] to a temporary file.
#[allow(dead_code)]
pub fn sample_catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(SAMPLE_CATALOG_JSON.as_bytes())
        .expect("write temp catalog");
    file
}
