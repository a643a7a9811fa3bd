//! Request dispatch
//!
//! One request per line:
//! `{"id": 1, "op": "parse", "quantity": "Speed", "text": "1.2 m/s"}`
//!
//! Ops:
//! - parse: `text` -> value, unit and SI value
//! - format: `text` re-rendered with `format`
//! - convert: `text` expressed in `unit`, symbol written in `style`
//! - units: the units of `quantity`
//! - kinds: every quantity kind
//! - stats: cache counters of `quantity`

use metron_core::{Culture, ErrorReport, MetronError, MetronResult};
use metron_format::SymbolFormat;
use metron_units::{parse_quantity, parse_unit, Quantity, QuantityKind, QUANTITY_KINDS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub op: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub style: Option<SymbolFormat>,
    #[serde(default)]
    pub culture: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    pub fn error(id: Option<JsonValue>, error: ErrorReport) -> Self {
        Response {
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Payload for a line that is not a request at all
pub fn malformed(message: String) -> ErrorReport {
    MetronError::InvalidRequest(message).report()
}

pub fn handle_request(request: &Request, default_culture: &'static Culture) -> Response {
    let result = dispatch(request, default_culture);
    match result {
        Ok(result) => Response {
            id: request.id.clone(),
            result: Some(result),
            error: None,
        },
        Err(err) => {
            debug!(op = %request.op, code = err.code(), "request failed");
            Response::error(request.id.clone(), err.report())
        }
    }
}

fn dispatch(request: &Request, default_culture: &'static Culture) -> MetronResult<JsonValue> {
    let culture = match &request.culture {
        Some(name) => Culture::by_name(name).ok_or_else(|| MetronError::UnknownCulture(name.clone()))?,
        None => default_culture,
    };

    match request.op.as_str() {
        "parse" => op_parse(request, culture),
        "format" => op_format(request, culture),
        "convert" => op_convert(request, culture),
        "units" => op_units(request),
        "kinds" => Ok(op_kinds()),
        "stats" => op_stats(request),
        other => Err(MetronError::InvalidRequest(format!("unknown op '{other}'"))),
    }
}

fn kind(request: &Request) -> MetronResult<&'static QuantityKind> {
    let name = request.quantity.as_deref().unwrap_or_default();
    QuantityKind::by_name(name).ok_or_else(|| MetronError::UnknownQuantity(name.to_string()))
}

fn quantity(request: &Request, culture: &Culture) -> MetronResult<Quantity> {
    parse_quantity(kind(request)?, request.text.as_deref().unwrap_or_default(), culture)
}

fn quantity_json(q: &Quantity) -> JsonValue {
    json!({
        "value": q.value,
        "unit": q.unit,
        "si_value": q.si_value(),
        "text": q.to_string(),
    })
}

fn op_parse(request: &Request, culture: &Culture) -> MetronResult<JsonValue> {
    Ok(quantity_json(&quantity(request, culture)?))
}

fn op_format(request: &Request, culture: &Culture) -> MetronResult<JsonValue> {
    let q = quantity(request, culture)?;
    let format = request.format.as_deref().unwrap_or_default();
    Ok(json!({
        "text": q.to_string_with(format, culture),
        "unknown_format": q.kind().quantity_format(format).is_unknown(),
    }))
}

fn op_convert(request: &Request, culture: &Culture) -> MetronResult<JsonValue> {
    let q = quantity(request, culture)?;
    let target = parse_unit(q.kind(), request.unit.as_deref().unwrap_or_default())?;
    let converted = q.convert_to(target)?;
    let text = q.to_string_in(target, request.style.unwrap_or_default(), culture)?;

    let mut result = quantity_json(&converted);
    result["text"] = JsonValue::String(text);
    Ok(result)
}

fn op_units(request: &Request) -> MetronResult<JsonValue> {
    let kind = kind(request)?;
    let units: Vec<JsonValue> = kind
        .units()
        .map(|unit| {
            json!({
                "symbol": unit.symbol(),
                "name": unit.name(),
                "aliases": unit.def().aliases,
                "si": unit.is_si(),
            })
        })
        .collect();
    Ok(json!({ "quantity": kind.name, "units": units }))
}

fn op_kinds() -> JsonValue {
    let kinds: Vec<JsonValue> = QUANTITY_KINDS
        .iter()
        .map(|kind| {
            json!({
                "name": kind.name,
                "dimension": kind.dimension.to_string(),
                "si_unit": kind.si_unit(),
            })
        })
        .collect();
    json!({ "kinds": kinds })
}

fn op_stats(request: &Request) -> MetronResult<JsonValue> {
    let kind = kind(request)?;
    serde_json::to_value(kind.stats().snapshot())
        .map_err(|e| MetronError::InvalidRequest(format!("cannot encode stats: {e}")))
}
