//! Behavioral conformance cases for the schema engine.
//!
//! Each [`Case`] bundles several accept/reject expectations under one
//! description and reports a single pass/fail. The `fluentschema
//! conformance` command runs them; the workspace tests require all of
//! them to pass.

use std::collections::HashSet;

use fluentschema_core::{is, Schema};
use fluentschema_value::Value;
use serde_json::json;

/// A named group of expectations.
#[derive(Clone, Copy)]
pub struct Case {
    pub description: &'static str,
    check: fn() -> bool,
}

impl Case {
    /// Evaluate every expectation of the case.
    pub fn run(&self) -> bool {
        (self.check)()
    }
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub description: &'static str,
    pub passed: bool,
}

/// Outcomes of a suite run, in case order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// All cases, in a fixed order.
pub fn cases() -> Vec<Case> {
    vec![
        case("values are required by default", required_by_default),
        case("optional validators accept absent values", optionals_accept_absent),
        case("kinds accept only their own type", kinds_accept_own_type),
        case("validators without a kind reject", undeclared_kind_rejects),
        case("refinements constrain accepted values", refinements_constrain),
        case("multiple refinements must all hold", refinements_conjoin),
        case("arrays reject non-array values", arrays_reject_non_arrays),
        case("arrays check every element", arrays_check_elements),
        case("array and element refinements combine", array_refinements),
        case("optional arrays", optional_arrays),
        case("unions accept any alternative", unions_accept_alternatives),
        case("optional unions", optional_unions),
        case("unions with optional alternatives", unions_with_optional_alternatives),
        case("arrays of unions", arrays_of_unions),
        case("simple objects", simple_objects),
        case("objects with optional properties", objects_with_optional_properties),
        case("objects with array properties", objects_with_array_properties),
        case("objects with union properties", objects_with_union_properties),
        case("person records", person_records),
        case("location records", location_records),
        case("people and locations cross-reference", people_and_locations),
    ]
}

/// Cases whose description contains `filter`, ignoring ASCII case.
pub fn select(filter: Option<&str>) -> Vec<Case> {
    let all = cases();
    match filter {
        Some(filter) => {
            let needle = filter.to_ascii_lowercase();
            all.into_iter()
                .filter(|c| c.description.to_ascii_lowercase().contains(&needle))
                .collect()
        }
        None => all,
    }
}

/// Run the given cases.
pub fn run_cases(cases: &[Case]) -> Report {
    Report {
        outcomes: cases
            .iter()
            .map(|c| Outcome {
                description: c.description,
                passed: c.run(),
            })
            .collect(),
    }
}

/// Run every case matching `filter`.
pub fn run(filter: Option<&str>) -> Report {
    run_cases(&select(filter))
}

fn case(description: &'static str, check: fn() -> bool) -> Case {
    Case { description, check }
}

fn j(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn strings_with_gap() -> Value {
    Value::array([Value::from("array"), Value::from("of"), Value::Absent])
}

fn string_number_gap() -> Value {
    Value::array([Value::from("string"), Value::from(42), Value::Absent])
}

fn gt(limit: f64) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |v: &Value| v.as_f64().is_some_and(|n| n > limit)
}

fn lt(limit: f64) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |v: &Value| v.as_f64().is_some_and(|n| n < limit)
}

fn len_is(len: usize) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |v: &Value| v.as_array().is_some_and(|items| items.len() == len)
}

fn required_by_default() -> bool {
    !is::string().validate(&Value::Absent)
        && !is::number().validate(&Value::Absent)
        && !is::boolean().validate(&Value::Absent)
        && !is::any_object().validate(&Value::Absent)
}

fn optionals_accept_absent() -> bool {
    is::optional().string().validate(&Value::Absent)
        && is::optional().number().validate(&Value::Absent)
        && is::optional().boolean().validate(&Value::Absent)
        && is::optional().any_object().validate(&Value::Absent)
}

fn kinds_accept_own_type() -> bool {
    let samples = [j(json!("string")), j(json!(42)), j(json!(true)), j(json!({}))];
    let expectations = [
        (is::string(), [true, false, false, false]),
        (is::number(), [false, true, false, false]),
        (is::boolean(), [false, false, true, false]),
        (is::any_object(), [false, false, false, true]),
    ];

    expectations.iter().all(|(schema, expected)| {
        !schema.validate(&Value::Absent)
            && samples
                .iter()
                .zip(expected)
                .all(|(sample, want)| schema.validate(sample) == *want)
    })
}

fn undeclared_kind_rejects() -> bool {
    !is::which(|_| true).validate(&Value::Absent)
        && !is::optional().which(|_| true).validate(&j(json!("anything")))
}

fn refinements_constrain() -> bool {
    let long = is::string().which(|s| s.as_str().is_some_and(|s| s.len() > 5));
    let big = is::number().which(gt(42.0));
    let truthy = is::boolean().which(|b| b.as_bool() == Some(true));
    let paired = is::any_object().which(|o| !o.contains_key("key1") || o.contains_key("key2"));

    long.validate(&j(json!("more than 5 chars")))
        && !long.validate(&j(json!("less")))
        && big.validate(&j(json!(50)))
        && !big.validate(&j(json!(0)))
        && truthy.validate(&j(json!(true)))
        && !truthy.validate(&j(json!(false)))
        && paired.validate(&j(json!({})))
        && !paired.validate(&j(json!({"key1": "value1"})))
        && paired.validate(&j(json!({"key1": "value1", "key2": "value2"})))
}

fn refinements_conjoin() -> bool {
    let between = is::number().which(gt(5.0)).which(lt(10.0));
    between.validate(&j(json!(8)))
        && !between.validate(&j(json!(4)))
        && !between.validate(&j(json!(11)))
}

fn arrays_reject_non_arrays() -> bool {
    !is::array_of(is::string()).validate(&j(json!("not an array")))
        && !is::array_of(is::number()).validate(&j(json!(42)))
}

fn arrays_check_elements() -> bool {
    let strings = is::array_of(is::string());
    strings.validate(&j(json!(["array", "of", "strings"])))
        && !strings.validate(&j(json!(["array", "of", 42])))
        && !strings.validate(&strings_with_gap())
        && is::array_of(is::optional().string()).validate(&strings_with_gap())
}

fn array_refinements() -> bool {
    let only_a = |s: &Value| s.as_str() == Some("a");

    is::array_of(is::string())
        .which(len_is(3))
        .validate(&j(json!(["array", "of", "strings"])))
        && !is::array_of(is::string())
            .which(len_is(3))
            .validate(&j(json!(["array", "of", "more", "strings"])))
        && is::array_of(is::string().which(only_a)).validate(&j(json!(["a", "a", "a"])))
        && !is::array_of(is::string().which(only_a)).validate(&j(json!(["a", "a", "B!"])))
        && is::array_of(is::string().which(only_a))
            .which(len_is(3))
            .validate(&j(json!(["a", "a", "a"])))
        && !is::array_of(is::string().which(only_a))
            .which(len_is(3))
            .validate(&j(json!(["a", "a", "a", "a"])))
}

fn optional_arrays() -> bool {
    let strings = is::optional().array_of(is::string());
    let loose = is::optional().array_of(is::optional().string());

    strings.validate(&Value::Absent)
        && strings.validate(&j(json!(["array", "of", "strings"])))
        && !strings.validate(&j(json!(["array", "of", 42])))
        && loose.validate(&strings_with_gap())
        && !loose.validate(&j(json!(["array", "of", 42])))
}

fn unions_accept_alternatives() -> bool {
    let single = is::one_of([is::string()]);
    let either = is::one_of([is::string(), is::number()]);

    !single.validate(&Value::Absent)
        && single.validate(&j(json!("string")))
        && !single.validate(&j(json!(42)))
        && either.validate(&j(json!("string")))
        && either.validate(&j(json!(42)))
        && !either.validate(&j(json!({})))
        && is::one_of([is::any_object(), is::number()]).validate(&j(json!({})))
        && !either.validate(&Value::Absent)
}

fn optional_unions() -> bool {
    let schema = is::optional().one_of([is::number(), is::string()]);
    schema.validate(&Value::Absent)
        && schema.validate(&j(json!(42)))
        && schema.validate(&j(json!("string")))
        && !schema.validate(&j(json!({})))
}

fn unions_with_optional_alternatives() -> bool {
    let single = is::one_of([is::optional().string()]);
    let mixed = is::one_of([is::string(), is::optional().number()]);

    single.validate(&Value::Absent)
        && single.validate(&j(json!("string")))
        && !single.validate(&j(json!(42)))
        && mixed.validate(&Value::Absent)
        && mixed.validate(&j(json!("string")))
        && mixed.validate(&j(json!(42)))
        && !mixed.validate(&j(json!({})))
}

fn arrays_of_unions() -> bool {
    let middle_gap = Value::array([Value::from("array"), Value::Absent, Value::from("string")]);
    let either = is::array_of(is::one_of([is::string(), is::number()]));
    let number_optional = is::array_of(is::one_of([is::string(), is::optional().number()]));
    let string_optional = is::array_of(is::one_of([is::optional().string(), is::number()]));

    is::array_of(is::one_of([is::string()])).validate(&j(json!(["array", "of", "strings"])))
        && !is::array_of(is::one_of([is::string()])).validate(&middle_gap)
        && is::array_of(is::one_of([is::optional().string()])).validate(&middle_gap)
        && either.validate(&j(json!(["string", 42])))
        && !either.validate(&string_number_gap())
        && !either.validate(&j(json!(["string", 42, {}])))
        && number_optional.validate(&string_number_gap())
        && string_optional.validate(&string_number_gap())
        && !number_optional.validate(&j(json!(["string", 42, {}])))
}

fn simple_objects() -> bool {
    is::object([
        ("str", is::string()),
        ("num", is::number()),
        ("bln", is::boolean()),
        ("obj", is::any_object()),
    ])
    .validate(&j(json!({"str": "string", "num": 42, "bln": false, "obj": {}})))
        && !is::object([("str", is::string()), ("num", is::number())])
            .validate(&j(json!({"str": "string"})))
}

fn objects_with_optional_properties() -> bool {
    !is::object([("str", is::string()), ("num", is::number())])
        .validate(&j(json!({"str": "string"})))
        && is::object([("str", is::string()), ("num", is::optional().number())])
            .validate(&j(json!({"str": "string"})))
}

fn objects_with_array_properties() -> bool {
    let nums = is::object([("nums", is::array_of(is::number()))]);
    let gaps = is::object([("nums", is::array_of(is::optional().number()))]);
    let maybe = is::object([("nums", is::optional().array_of(is::number()))]);
    let with_nums = |nums: Value| Value::object([("nums", nums)]);

    nums.validate(&j(json!({"nums": [1, 2, 3]})))
        && gaps.validate(&with_nums(Value::array([
            Value::from(1),
            Value::from(2),
            Value::Absent,
        ])))
        && gaps.validate(&with_nums(Value::array([Value::Absent])))
        && nums.validate(&j(json!({"nums": []})))
        && !nums.validate(&with_nums(Value::Absent))
        && !nums.validate(&with_nums(Value::array([Value::Absent])))
        && !nums.validate(&j(json!({})))
        && maybe.validate(&j(json!({})))
        && !maybe.validate(&j(json!({"nums": "it exists, but not an array of numbers"})))
}

fn objects_with_union_properties() -> bool {
    let required = is::object([("oneof", is::one_of([is::string(), is::number()]))]);
    let optional = is::object([("oneof", is::optional().one_of([is::string(), is::number()]))]);

    required.validate(&j(json!({"oneof": "string"})))
        && required.validate(&j(json!({"oneof": 42})))
        && !required.validate(&j(json!({"oneof": {}})))
        && !required.validate(&j(json!({})))
        && optional.validate(&j(json!({})))
        && !optional.validate(&j(json!({"oneof": []})))
}

fn person_schema() -> Schema {
    is::object([
        ("name", is::string()),
        ("nickname", is::optional().string()),
        ("hometown", is::string()),
        ("age", is::number().which(gt(5.0))),
        (
            "hobbies",
            is::optional().array_of(is::string().which(|s| s.as_str() != Some("illegal activities"))),
        ),
        (
            "favoriteNumberOrColor",
            is::optional().one_of([is::string(), is::number()]),
        ),
    ])
}

fn location_schema() -> Schema {
    is::object([
        ("name", is::string()),
        ("coordinates", is::array_of(is::number())),
        ("population", is::optional().number()),
    ])
}

fn records<'a>(everything: &'a Value, key: &str) -> &'a [Value] {
    everything[key].as_array().unwrap_or_default()
}

/// Every person's hometown names a known location.
fn hometowns_resolve(everything: &Value) -> bool {
    let locations = records(everything, "locations");
    records(everything, "people").iter().all(|person| {
        locations
            .iter()
            .any(|location| location["name"] == person["hometown"])
    })
}

/// No two locations share a name.
fn location_names_unique(everything: &Value) -> bool {
    let mut seen = HashSet::new();
    records(everything, "locations")
        .iter()
        .all(|location| seen.insert(location["name"].as_str()))
}

fn everything_schema() -> Schema {
    is::object([
        ("people", is::array_of(person_schema())),
        ("locations", is::array_of(location_schema())),
    ])
    .which(hometowns_resolve)
    .which(location_names_unique)
}

fn person_records() -> bool {
    let person = person_schema();

    person.validate(&j(json!({
        "name": "John Doe",
        "nickname": "johnny",
        "hometown": "Budapest",
        "age": 42
    }))) && person.validate(&j(json!({
        "name": "John Doe",
        "hometown": "Budapest",
        "age": 42,
        "hobbies": ["eating", "coding", "sleeping"]
    }))) && person.validate(&j(json!({
        "name": "John Doe",
        "hometown": "Budapest",
        "age": 42,
        "hobbies": ["eating", "coding", "sleeping"],
        "favoriteNumberOrColor": 42
    }))) && !person.validate(&j(json!({
        "name": "John Doe",
        "hometown": "Budapest",
        "age": 42,
        "hobbies": ["eating", "coding", "sleeping"],
        "favoriteNumberOrColor": ["you", "dont", "tell", "me", "what", "to", "do"]
    }))) && !person.validate(&j(json!({
        "name": "John Doe",
        "hometown": "Budapest",
        "age": 42,
        "hobbies": ["eating", "illegal activities", "sleeping"]
    }))) && !person.validate(&j(json!({
        "name": "John Doe Jr.",
        "hometown": "Budapest",
        "age": 2
    }))) && !person.validate(&j(json!({
        "hometown": "Budapest",
        "age": 42
    })))
}

fn location_records() -> bool {
    let location = location_schema();

    location.validate(&j(json!({
        "name": "Budapest",
        "coordinates": [47.49, 19.04],
        "population": 1
    }))) && location.validate(&j(json!({
        "name": "Budapest",
        "coordinates": [47.49, 19.04]
    }))) && !location.validate(&j(json!({
        "name": "Budapest",
        "population": 42
    }))) && !location.validate(&j(json!({
        "coordinates": [47.49, 19.04],
        "population": 42
    })))
}

fn people_and_locations() -> bool {
    let everything = everything_schema();
    let john = json!({
        "name": "John Doe",
        "hometown": "Budapest",
        "age": 42,
        "hobbies": ["eating", "coding", "sleeping"]
    });
    let budapest = json!({
        "name": "Budapest",
        "coordinates": [47.49, 19.04],
        "population": 1
    });

    everything.validate(&j(json!({
        "people": [john],
        "locations": [budapest]
    }))) && !everything.validate(&j(json!({
        "people": [john],
        "locations": []
    }))) && !everything.validate(&j(json!({
        "people": [john],
        "locations": [{
            "name": "Not Budapest",
            "coordinates": [47.49, 19.04],
            "population": 1
        }]
    }))) && everything.validate(&j(json!({
        "people": [
            {
                "name": "Johnny Bravo",
                "hometown": "Aron City",
                "age": 42,
                "hobbies": ["looking good", "flexing"]
            },
            john,
            {
                "name": "Ms. Janet Doe",
                "hometown": "Budapest",
                "age": 40,
                "hobbies": ["eating", "coding", "sleeping"]
            }
        ],
        "locations": [budapest, {
            "name": "Aron City",
            "coordinates": [34.05, 118.24]
        }]
    }))) && !everything.validate(&j(json!({
        "people": [john],
        "locations": [budapest, budapest]
    })))
}
