//! Integration tests for generating both notations from model manifests

use intellisense_generator::config::NamingConfig;
use intellisense_generator::generator::{generate, GeneratorContext, Notation};
use intellisense_generator::models::{ModelObject, ModelProperty};
use intellisense_generator::parser::load_manifest;
use std::path::PathBuf;

/// Get path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> Vec<ModelObject> {
    load_manifest(&fixture_path(name)).expect("Failed to load fixture")
}

fn default_ctx() -> GeneratorContext {
    GeneratorContext::new(NamingConfig::default())
}

#[test]
fn test_shop_stubs() {
    let objects = load_fixture("shop.toml");

    let output = generate(&objects, Notation::Dynamic, &default_ctx());

    let expected = r#"var server = server || {};
server.Customer = function()  {
	/// <field name="Id" type="Number">Primary key</field>
	this.Id = new Number();
	/// <field name="Name" type="String">The display name shown in the header</field>
	this.Name = new String();
	/// <field name="Birthday" type="Object">The Birthday property as defined in Shop.Models.Customer</field>
	this.Birthday = new Object();
	/// <field name="Orders" type="Array">The Orders property as defined in Shop.Models.Customer</field>
	this.Orders = new Array();
	/// <field name="Tags" type="Array">The Tags property as defined in Shop.Models.Customer</field>
	this.Tags = new Array();
};

server.Order = function()  {
	/// <field name="Total" type="Number">Total incl. &lt;tax&gt; &amp; fees</field>
	this.Total = new Number();
	/// <field name="Discount" type="Object">The Discount property as defined in Shop.Models.Order</field>
	this.Discount = new Object();
	/// <field name="Reference" type="Object">The Reference property as defined in Shop.Models.Order</field>
	this.Reference = new Object();
};

"#;
    assert_eq!(output, expected);
}

#[test]
fn test_shop_declarations() {
    let objects = load_fixture("shop.toml");

    let output = generate(&objects, Notation::Static, &default_ctx());

    let expected = r#"declare module server {

	interface Customer{
		Id: Number;
		Name: String;
		Birthday: Date;
		Orders: Array<Order>;
		Tags: Array<String>;
}
	interface Order{
		Total: Number;
		Discount: NullableNumber;
		Reference: Guid;
}
}
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_generic_declarations() {
    let objects = load_fixture("paging.toml");

    let output = generate(&objects, Notation::Static, &default_ctx());

    let expected = r#"declare module server {

	interface Page<Number> {
		Items: Array<Object>;
		HasMore: Boolean;
}
	interface Result<Shop.Models.Order> {
		Value: Wrapper<Shop.Models.Order>;
}
}
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_empty_object_declaration_has_empty_body() {
    let objects = vec![ModelObject::new("Marker", "Shop.Marker")];

    let output = generate(&objects, Notation::Static, &default_ctx());

    assert_eq!(output, "declare module server {\n\n\tinterface Marker{\n}\n}\n");
}

#[test]
fn test_generation_is_idempotent() {
    let objects = load_fixture("shop.toml");
    let ctx = default_ctx();

    for notation in [Notation::Dynamic, Notation::Static] {
        let first = generate(&objects, notation, &ctx);
        let second = generate(&objects, notation, &ctx);
        assert_eq!(first, second, "{notation} output differs between runs");
    }
}

#[test]
fn test_reordering_properties_only_moves_their_lines() {
    let forward = ModelObject::new("Customer", "Shop.Customer")
        .with_property(ModelProperty::new("Id", "int"))
        .with_property(ModelProperty::new("Name", "string"))
        .with_property(ModelProperty::new("Orders", "Order[]"));
    let mut reordered = forward.clone();
    reordered.properties.swap(0, 2);

    let ctx = default_ctx();
    let before = generate(&[forward], Notation::Static, &ctx);
    let after = generate(&[reordered], Notation::Static, &ctx);

    let before: Vec<_> = before.lines().collect();
    let after: Vec<_> = after.lines().collect();
    assert_eq!(before.len(), after.len());

    // Module header, blank line and interface header precede the members
    assert_eq!(before[..3], after[..3]);
    assert_eq!(before[3], after[5]);
    assert_eq!(before[4], after[4]);
    assert_eq!(before[5], after[3]);
    assert_eq!(before[6..], after[6..]);
}

#[test]
fn test_stub_reordering_moves_property_pairs() {
    let forward = ModelObject::new("Customer", "Shop.Customer")
        .with_property(ModelProperty::new("Id", "int"))
        .with_property(ModelProperty::new("Name", "string"));
    let mut reordered = forward.clone();
    reordered.properties.reverse();

    let ctx = default_ctx();
    let before = generate(&[forward], Notation::Dynamic, &ctx);
    let after = generate(&[reordered], Notation::Dynamic, &ctx);

    let before: Vec<_> = before.lines().collect();
    let after: Vec<_> = after.lines().collect();

    assert_eq!(before[..2], after[..2]);
    assert_eq!(before[2..4], after[4..6]);
    assert_eq!(before[4..6], after[2..4]);
    assert_eq!(before[6..], after[6..]);
}

#[test]
fn test_camel_case_naming_applies_to_both_notations() {
    let objects = load_fixture("shop.toml");
    let ctx = GeneratorContext::new(NamingConfig {
        namespace: "shop".to_string(),
        camel_case_properties: true,
    });

    let stubs = generate(&objects, Notation::Dynamic, &ctx);
    assert!(stubs.starts_with("var shop = shop || {};\n"));
    assert!(stubs.contains("\tthis.birthday = new Object();\n"));
    assert!(stubs.contains("The Birthday property as defined in Shop.Models.Customer"));

    let declarations = generate(&objects, Notation::Static, &ctx);
    assert!(declarations.starts_with("declare module shop {\n"));
    assert!(declarations.contains("\t\tbirthday: Date;\n"));
}
