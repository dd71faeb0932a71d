// ============================================================================
// Echo Body Example
// Decode, validate and re-encode a request body the way a web handler would
// ============================================================================

use serde::{Deserialize, Serialize};
use typed_money::prelude::*;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct TestBody {
    name: Option<String>,
    net_with_rounding: Required<Net>,
    gross_with_string: Required<Gross>,
    not_null: Required<Net>,
    nullable_value: NetNullable,
}

impl Validate for TestBody {
    fn validate(&self, violations: &mut Violations) {
        violations.require("netWithRounding", &self.net_with_rounding);
        violations.require("grossWithString", &self.gross_with_string);
        violations.require("notNull", &self.not_null);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Typed Money Echo ===\n");

    let request = r#"{"name":"abc","netWithRounding":31.12345,"grossWithString":"42.1234","notNull":null,"nullableValue":null}"#;
    println!("Request:  {}", request);

    let body: TestBody = match serde_json::from_str(request) {
        Ok(body) => body,
        Err(err) => {
            println!("Rejected (400): {}", err);
            return;
        },
    };

    // A web layer would answer 400 here; the demo reports and keeps going
    if let Err(violations) = body.check() {
        println!("\nValidation:");
        for violation in &violations {
            println!("  {}", violation);
        }
    }

    let response = TestBody {
        name: Some("changed".to_string()),
        ..body
    };
    match serde_json::to_string(&response) {
        Ok(json) => println!("\nResponse: {}", json),
        Err(err) => println!("\nFailed to encode response: {}", err),
    }

    println!("\n=== Malformed Fields ===\n");
    let request = serde_json::json!({
        "netWithRounding": true,
        "grossWithString": "12,50",
        "nullableValue": "3"
    });
    println!("Request:  {}", request);

    let mut fields = match FieldDecoder::from_value(&request) {
        Ok(fields) => fields,
        Err(err) => {
            println!("Rejected (400): {}", err);
            return;
        },
    };
    let body = TestBody {
        name: None,
        net_with_rounding: fields.required("netWithRounding"),
        gross_with_string: fields.required("grossWithString"),
        not_null: fields.required("notNull"),
        nullable_value: fields.nullable("nullableValue"),
    };
    let mut violations = fields.finish();
    body.validate(&mut violations);

    println!("\nValidation:");
    for violation in &violations {
        println!("  {}", violation);
    }
    println!("\nnullableValue decoded as {:?}", body.nullable_value);
}
