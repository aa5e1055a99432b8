//! OTLP/JSON encoding of exported spans.
//!
//! Each export batch becomes one `resourceSpans` document. IDs are lowercase
//! hex, timestamps are nanoseconds since the Unix epoch rendered as strings,
//! and 64-bit integers are strings, matching the OTLP JSON mapping.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{Array, KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as Json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "dialpick";

/// Encodes a batch of spans, tagged with `resource`, as one OTLP document.
pub fn encode_batch(resource: &Resource, batch: &[SpanData]) -> Json {
    let resource_attributes: Vec<Json> = resource
        .iter()
        .map(|(key, value)| attribute(key.as_str(), value))
        .collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME, "version": env!("CARGO_PKG_VERSION") },
                "spans": batch.iter().map(encode_span).collect::<Vec<_>>(),
            }],
        }],
    })
}

fn encode_span(span: &SpanData) -> Json {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(encode_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(encode_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn encode_event(event: &Event) -> Json {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn encode_link(link: &Link) -> Json {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(values: &[KeyValue]) -> Vec<Json> {
    values
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> Json {
    json!({ "key": key, "value": any_value(value) })
}

/// Maps an attribute value onto the OTLP `AnyValue` shape.
pub fn any_value(value: &Value) -> Json {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(array) => {
            let values: Vec<Json> = match array {
                Array::Bool(items) => items.iter().map(|b| json!({ "boolValue": b })).collect(),
                Array::I64(items) => items
                    .iter()
                    .map(|i| json!({ "intValue": i.to_string() }))
                    .collect(),
                Array::F64(items) => items.iter().map(|f| json!({ "doubleValue": f })).collect(),
                Array::String(items) => items
                    .iter()
                    .map(|s| json!({ "stringValue": s.as_str() }))
                    .collect(),
            };
            json!({ "arrayValue": { "values": values } })
        }
    }
}

/// OTLP `SpanKind` enum value.
pub const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

/// OTLP status code and message.
pub fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn scalar_values() {
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(any_value(&Value::I64(44)), json!({ "intValue": "44" }));
        assert_eq!(any_value(&Value::F64(1.5)), json!({ "doubleValue": 1.5 }));
        assert_eq!(
            any_value(&Value::from("Germany")),
            json!({ "stringValue": "Germany" })
        );
    }

    #[test]
    fn array_values_keep_element_types() {
        let value = Value::Array(Array::I64(vec![1, 44]));
        assert_eq!(
            any_value(&value),
            json!({ "arrayValue": { "values": [{ "intValue": "1" }, { "intValue": "44" }] } })
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(status(&Status::Unset), (0, String::new()));
        assert_eq!(status(&Status::Ok), (1, String::new()));
        assert_eq!(status(&Status::error("boom")), (2, "boom".to_string()));
    }

    #[test]
    fn kinds() {
        assert_eq!(kind(&SpanKind::Internal), 1);
        assert_eq!(kind(&SpanKind::Consumer), 5);
    }

    #[test]
    fn timestamps_are_nanosecond_strings() {
        let t = UNIX_EPOCH + Duration::from_millis(3);
        assert_eq!(unix_nanos(t), "3000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_has_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "dialpick")]);
        let doc = encode_batch(&resource, &[]);
        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], "dialpick");
        assert_eq!(scope["spans"], json!([]));
        let attrs = doc["resourceSpans"][0]["resource"]["attributes"]
            .as_array()
            .unwrap();
        assert!(attrs
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "dialpick"));
    }
}
