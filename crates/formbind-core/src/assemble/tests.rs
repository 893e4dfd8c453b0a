use super::*;
use crate::{
    record::Record,
    source::FormData,
    test_fixtures::CountingSource,
    types::Money,
    value::Value,
};
use formbind_derive::BindEntity;
use rust_decimal::Decimal;
use uuid::Uuid;

// ---- fixtures ----------------------------------------------------------

#[derive(BindEntity, Debug, Default, PartialEq)]
struct Contact {
    id: Uuid,
    #[bind(display = "Имя", range(min = 1, max = 10))]
    name: Option<String>,
    #[bind(range(min = 18, max = 65))]
    age: Option<i32>,
    total: Money,
    rate: Option<Decimal>,
    subscribed: Option<bool>,
    #[bind(read_only)]
    version: Option<i32>,
}

#[derive(BindEntity, Debug, Default, PartialEq)]
#[bind(entity = "Line")]
struct OrderLine {
    id: Uuid,
    quantity: Option<i32>,
    gift: Option<bool>,
}

const ID_A: &str = "6f9619ff-8b86-d011-b42d-00cf4fc964ff";
const ID_B: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

fn uuid(raw: &str) -> Uuid {
    Uuid::parse_str(raw).expect("test uuid")
}

fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs.iter().copied().collect()
}

fn bind_contact(form: &FormData) -> BindOutcome<Contact> {
    bind_one(form, &BindOptions::default())
}

fn bind_lines(form: &FormData) -> BindOutcome<Vec<OrderLine>> {
    bind_list(form, &BindOptions::default())
}

// ---- scalar targets ----------------------------------------------------

#[test]
fn empty_submission_binds_defaults_without_issues() {
    let outcome = bind_contact(&FormData::new());

    assert_eq!(outcome.value, Contact::default());
    assert!(outcome.is_valid());
}

#[test]
fn scalar_fields_are_coerced_and_written() {
    let outcome = bind_contact(&form(&[
        ("Contact.Id", ID_A),
        ("Contact.Name", "Иван"),
        ("Contact.Age", "30"),
        ("Contact.Total", "1 500,50"),
        ("Contact.Rate", "0.25"),
        ("Contact.Subscribed", "true"),
        ("Contact.Subscribed", "false"),
    ]));

    assert!(outcome.is_valid(), "{:?}", outcome.issues);
    let contact = outcome.value;
    assert_eq!(contact.id, uuid(ID_A));
    assert_eq!(contact.name.as_deref(), Some("Иван"));
    assert_eq!(contact.age, Some(30));
    assert_eq!(contact.total, Money::new(Decimal::new(150_050, 2)));
    assert_eq!(contact.rate, Some(Decimal::new(25, 2)));
    assert_eq!(contact.subscribed, Some(true));
}

#[test]
fn read_only_fields_are_never_written() {
    let outcome = bind_contact(&form(&[("Contact.Version", "7")]));

    assert_eq!(outcome.value.version, None);
}

#[test]
fn cleared_fields_bind_to_their_empty_values() {
    let outcome = bind_contact(&form(&[
        ("Contact.Id", "null"),
        ("Contact.Name", "clear"),
        ("Contact.Total", ""),
        ("Contact.Rate", "null"),
    ]));

    assert!(outcome.is_valid());
    assert_eq!(outcome.value.id, Uuid::nil());
    assert_eq!(outcome.value.name, None);
    assert_eq!(outcome.value.total, Money::ZERO);
    assert_eq!(outcome.value.rate, None);
}

#[test]
fn unparseable_ranged_value_reports_overflow_and_invalid_type() {
    let outcome = bind_contact(&form(&[("Contact.Age", "abc")]));

    let issues = outcome.issues.get("Contact.Age");
    let kinds: Vec<_> = issues.iter().map(|issue| issue.kind).collect();

    assert_eq!(kinds, [IssueKind::Overflow, IssueKind::InvalidType]);
    assert_eq!(issues[0].attempted, ["abc"]);
    assert_eq!(outcome.value.age, None);
}

#[test]
fn null_token_on_a_ranged_number_is_overflow_but_still_clears() {
    let outcome = bind_contact(&form(&[("Contact.Age", "null"), ("Contact.Name", "clear")]));

    let issues = outcome.issues.get("Contact.Age");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Overflow);
    assert_eq!(issues[0].raw, "null");
    assert_eq!(outcome.value.age, None);
    assert!(outcome.issues.get("Contact.Name").is_empty());
    assert_eq!(outcome.value.name, None);
}

#[test]
fn out_of_range_value_is_reported_but_still_written() {
    let outcome = bind_contact(&form(&[("Contact.Age", "70")]));

    let issues = outcome.issues.get("Contact.Age");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Range);
    assert_eq!(
        issues[0].message,
        "Age: введенное значение не входит в допустимый диапазон."
    );
    assert_eq!(outcome.value.age, Some(70));
}

#[test]
fn messages_prefer_the_display_name() {
    let outcome = bind_contact(&form(&[("Contact.Name", "очень длинное имя")]));

    assert_eq!(
        outcome.issues.messages("Contact.Name"),
        ["Имя: введенное значение не входит в допустимый диапазон."]
    );
}

#[test]
fn malformed_identifier_leaves_the_default() {
    let outcome = bind_contact(&form(&[("Contact.Id", "not-a-guid")]));

    assert_eq!(outcome.value.id, Uuid::nil());
    assert_eq!(outcome.issues.get("Contact.Id")[0].kind, IssueKind::InvalidType);
}

#[test]
fn into_result_separates_valid_and_invalid_binds() {
    assert!(bind_contact(&FormData::new()).into_result().is_ok());

    let issues = bind_contact(&form(&[("Contact.Age", "x")]))
        .into_result()
        .expect_err("issues expected");
    assert_eq!(issues.len(), 2);
}

// ---- list targets ------------------------------------------------------

#[test]
fn list_length_follows_the_identifier_values() {
    let outcome = bind_lines(&form(&[
        ("Line.Id.0", "x"),
        ("Line.Id", ID_A),
        ("Line.Id", ID_B),
        ("Line.Quantity", "3"),
        ("Line.Quantity", "5"),
    ]));

    let lines = outcome.value;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].id, uuid(ID_A));
    assert_eq!(lines[1].id, uuid(ID_B));
    assert_eq!(lines[0].quantity, Some(3));
    assert_eq!(lines[1].quantity, Some(5));
}

#[test]
fn list_without_identifiers_is_empty() {
    let outcome = bind_lines(&form(&[("Line.Id.0", "x"), ("Line.Quantity", "3")]));

    assert!(outcome.value.is_empty());
    assert!(outcome.is_valid());
}

#[test]
fn checkbox_runs_are_decoded_per_entry() {
    let outcome = bind_lines(&form(&[
        ("Line.Id", ID_A),
        ("Line.Id", ID_B),
        ("Line.Gift", "false"),
        ("Line.Gift", "true"),
        ("Line.Gift", "false"),
    ]));

    let gifts: Vec<_> = outcome.value.iter().map(|line| line.gift).collect();

    assert_eq!(gifts, [Some(false), Some(true)]);
}

#[test]
fn short_field_lists_leave_later_entries_unset() {
    let outcome = bind_lines(&form(&[
        ("Line.Id", ID_A),
        ("Line.Id", ID_B),
        ("Line.Quantity", "3"),
    ]));

    assert_eq!(outcome.value[0].quantity, Some(3));
    assert_eq!(outcome.value[1].quantity, None);
    assert!(outcome.is_valid());
}

#[test]
fn list_issues_accumulate_under_the_field_path() {
    let outcome = bind_lines(&form(&[
        ("Line.Id", ID_A),
        ("Line.Id", ID_B),
        ("Line.Quantity", "many"),
        ("Line.Quantity", "lots"),
    ]));

    let issues = outcome.issues.get("Line.Quantity");
    let offenders: Vec<_> = issues.iter().map(|i| (i.index, i.raw.as_str())).collect();

    assert_eq!(offenders, [(0, "many"), (1, "lots")]);
    assert_eq!(issues[1].attempted, ["many", "lots"]);
}

#[test]
fn list_issues_name_the_failing_entry() {
    let outcome = bind_lines(&form(&[
        ("Line.Id", ID_A),
        ("Line.Id", ID_B),
        ("Line.Quantity", "3"),
        ("Line.Quantity", "lots"),
    ]));

    let issues = outcome.issues.get("Line.Quantity");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::InvalidType);
    assert_eq!(issues[0].index, 1);
    assert_eq!(issues[0].raw, "lots");
    assert_eq!(outcome.value[0].quantity, Some(3));
    assert_eq!(outcome.value[1].quantity, None);
}

// ---- context and shapes ------------------------------------------------

#[test]
fn each_field_path_is_looked_up_once() {
    let source = CountingSource::new(&[("Contact.Age", &["abc"])]);
    let options = BindOptions::default();
    let mut ctx = BindContext::new(&source, &options);

    let _ = assemble_one(&mut ctx, Contact::MODEL, Contact::default);

    assert_eq!(source.hits("Contact.Age"), 1);
    assert_eq!(ctx.issues().len(), 2);
}

#[test]
fn every_assembly_starts_from_a_clean_context() {
    let source = CountingSource::new(&[("Contact.Age", &["abc"])]);
    let options = BindOptions::default();
    let mut ctx = BindContext::new(&source, &options);

    let _ = assemble_one(&mut ctx, Contact::MODEL, Contact::default);
    let _ = assemble_one(&mut ctx, Contact::MODEL, Contact::default);

    assert_eq!(ctx.issues().len(), 2);
    assert_eq!(source.hits("Contact.Age"), 2);
}

#[test]
fn multi_argument_generics_are_unsupported() {
    let source = FormData::new();
    let options = BindOptions::default();
    let mut ctx = BindContext::new(&source, &options);
    let target = TargetType::Generic(vec![Contact::MODEL, OrderLine::MODEL]);

    let err = assemble(&mut ctx, &target, Record::new).expect_err("two arguments");

    assert!(err.is_unsupported());
}

#[test]
fn records_bind_through_any_shape() {
    let source = form(&[("Line.Id", ID_A), ("Line.Quantity", "4")]);
    let options = BindOptions::default();
    let mut ctx = BindContext::new(&source, &options);

    let bound = assemble(&mut ctx, &TargetType::list(OrderLine::MODEL), Record::new)
        .expect("single argument");
    let records = bound.into_vec();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Quantity"), Some(&Value::Int(4)));

    let bound = assemble(&mut ctx, &TargetType::Scalar(OrderLine::MODEL), Record::new)
        .expect("scalar");
    assert!(!bound.is_list());
}
