//! JSON bodies shaped like the external catalog's responses.
//!
//! Numeric values are encoded as strings the way the catalog serves them.

use serde_json::{json, Value};

/// Properties of a person record, as found under `result.properties`
pub fn person_properties(name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://www.swapi.tech/api/planets/1",
        "created": "2025-10-19T09:29:30.119Z",
        "edited": "2025-10-19T09:29:30.119Z",
        "url": "https://www.swapi.tech/api/people/1"
    })
}

/// A flat planet record
pub fn planet_detail(name: &str) -> Value {
    json!({
        "name": name,
        "diameter": "10465",
        "rotation_period": "23",
        "orbital_period": "304",
        "gravity": "1 standard",
        "population": "200000",
        "climate": "arid",
        "terrain": "desert",
        "surface_water": "1",
        "created": "2025-10-19T09:29:30.119Z",
        "edited": "2025-10-19T09:29:30.119Z",
        "url": "https://www.swapi.tech/api/planets/1"
    })
}

/// Wraps person properties in the catalog's detail envelope
pub fn person_envelope(uid: i64, properties: &Value) -> Value {
    json!({
        "message": "ok",
        "result": {
            "properties": properties,
            "description": "A person within the Star Wars universe",
            "uid": uid.to_string()
        }
    })
}

/// A paginated summary list whose entries link to `{base_url}/{resource}/{uid}`
pub fn summary_list(base_url: &str, resource: &str, uids: &[i64]) -> Value {
    let results: Vec<Value> = uids
        .iter()
        .map(|uid| {
            json!({
                "uid": uid.to_string(),
                "name": format!("{} {}", resource, uid),
                "url": format!("{}/{}/{}", base_url, resource, uid)
            })
        })
        .collect();

    json!({
        "message": "ok",
        "total_records": uids.len(),
        "total_pages": 1,
        "previous": null,
        "next": null,
        "results": results
    })
}
