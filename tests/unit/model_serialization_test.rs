// Storage-contract tests: persisted field names and representations must
// match what the external document store holds (camelCase keys, lowercase
// periodicity strings, ISO dates).

use rust_decimal_macros::dec;
use serde_json::Value;

use commitrack::core::traits::CommitmentPatch;
use commitrack::modules::commitments::models::Periodicity;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::TestDataFactory;

#[test]
fn test_commitment_serializes_with_camel_case_store_fields() {
    let mut commitment = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Monthly,
        dec!(3500000),
    );
    commitment.group_id = Some("grp_1_abc".to_string());
    commitment.recurring_index = 2;

    let json = serde_json::to_value(&commitment).unwrap();
    let object = json.as_object().unwrap();

    for key in [
        "id",
        "groupId",
        "recurringIndex",
        "companyId",
        "companyName",
        "beneficiary",
        "beneficiaryTaxId",
        "concept",
        "baseAmount",
        "taxAmount",
        "withholdingAmount",
        "discountAmount",
        "totalAmount",
        "currency",
        "dueDate",
        "periodicity",
        "paid",
        "createdAt",
        "updatedAt",
    ] {
        assert!(object.contains_key(key), "missing store field {}", key);
    }

    assert_eq!(json["periodicity"], Value::from("monthly"));
    assert_eq!(json["dueDate"], Value::from("2025-03-10"));
    assert_eq!(json["groupId"], Value::from("grp_1_abc"));
    assert_eq!(json["recurringIndex"], Value::from(2));
    assert_eq!(json["currency"], Value::from("COP"));
}

#[test]
fn test_optional_fields_absent_until_set() {
    let commitment = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Unique,
        dec!(100),
    );
    let json = serde_json::to_value(&commitment).unwrap();

    assert!(json.get("manualPaid").is_none());
    assert!(json.get("status").is_none());
    assert_eq!(json["groupId"], Value::Null);
}

#[test]
fn test_commitment_round_trip() {
    let commitment = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Quarterly,
        dec!(3500000),
    );

    let json = serde_json::to_string(&commitment).unwrap();
    let parsed: commitrack::modules::commitments::models::Commitment =
        serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.id, commitment.id);
    assert_eq!(parsed.total_amount, commitment.total_amount);
    assert_eq!(parsed.periodicity, Periodicity::Quarterly);
    assert_eq!(parsed.due_date, commitment.due_date);
}

#[test]
fn test_legacy_record_without_new_fields_deserializes() {
    // Records written before groupId / manualPaid / components existed
    let legacy = serde_json::json!({
        "id": "cmt-legacy-1",
        "companyId": "comp-1",
        "companyName": "DR Group SAS",
        "beneficiary": "Coljuegos",
        "beneficiaryTaxId": "900.123.456-7",
        "concept": "Derechos de explotación",
        "baseAmount": "1000000",
        "totalAmount": "1000000",
        "dueDate": "2024-11-20",
        "periodicity": "monthly",
        "createdAt": "2024-10-01T12:00:00",
        "updatedAt": "2024-10-01T12:00:00"
    });

    let parsed: commitrack::modules::commitments::models::Commitment =
        serde_json::from_value(legacy).unwrap();

    assert_eq!(parsed.group_id, None);
    assert_eq!(parsed.recurring_index, 0);
    assert!(!parsed.paid);
    assert!(parsed.manual_paid.is_none());
    assert_eq!(parsed.tax_amount, dec!(0));
}

#[test]
fn test_payment_serializes_with_camel_case_fields() {
    let commitment = TestDataFactory::commitment(
        "Office rent",
        TestDataFactory::date("2025-03-10"),
        Periodicity::Unique,
        dec!(100),
    );
    let payment =
        TestDataFactory::payment(&commitment, dec!(50), TestDataFactory::date("2025-03-12"))
            .unwrap();

    let json = serde_json::to_value(&payment).unwrap();
    assert_eq!(json["commitmentId"], Value::from(commitment.id.clone()));
    assert_eq!(json["date"], Value::from("2025-03-12"));
    assert!(json.get("amount").is_some());
}

#[test]
fn test_patch_serializes_only_set_fields() {
    let patch = CommitmentPatch::set_group("grp_9_zzz");
    let json = serde_json::to_value(&patch).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "groupId": "grp_9_zzz" })
    );
}
