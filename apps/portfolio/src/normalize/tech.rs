use std::collections::HashMap;

use serde_json::Value;

use crate::models::TechWeight;

/// Folds a raw `tech` / `pills` value into one weighted entry per name.
///
/// Accepts bare strings (weight 1) and `{name, weight}` objects (weight
/// defaults to 1 unless it is a finite number above zero). Names are trimmed
/// and compared case-sensitively. Output keeps first-occurrence order.
pub fn normalize_tech(raw: &Value) -> Vec<TechWeight> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut out: Vec<TechWeight> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let (name, weight) = match item {
            Value::String(s) => (s.trim(), 1.0),
            Value::Object(obj) => {
                let name = obj.get("name").and_then(Value::as_str).unwrap_or("").trim();
                let weight = obj
                    .get("weight")
                    .and_then(Value::as_f64)
                    .filter(|w| w.is_finite() && *w > 0.0)
                    .unwrap_or(1.0);
                (name, weight)
            }
            _ => continue,
        };

        if name.is_empty() {
            continue;
        }

        match index.get(name).copied() {
            Some(i) => out[i].weight += weight,
            None => {
                index.insert(name.to_string(), out.len());
                out.push(TechWeight {
                    name: name.to_string(),
                    weight,
                });
            }
        }
    }

    out
}
