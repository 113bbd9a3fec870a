use serde::Deserialize;

/// One page of the observation listing, as returned by the facade.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub total_results: u64,
    pub results: Vec<Observation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub id: u64,
    pub time_observed_at: Option<String>,
    pub species_guess: Option<String>,
    pub location: Option<String>,
    pub private_location: Option<String>,
    pub obscured: bool,
    #[serde(default)]
    pub ofvs: Vec<ObservationFieldValue>,
}

/// A user-submitted observation field value ("ofv" on the wire).
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationFieldValue {
    pub name: String,
    pub value: String,
}

impl Observation {
    /// Obscured records hide their public location; the usable coordinate
    /// lives in `private_location` instead. Exactly one of the two fields is
    /// ever consulted.
    pub fn display_location(&self) -> Option<&str> {
        if self.obscured {
            self.private_location.as_deref()
        } else {
            self.location.as_deref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(json: serde_json::Value) -> Observation {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_obscured_record_uses_private_location() {
        let obs = observation(serde_json::json!({
            "id": 1,
            "time_observed_at": "2021-03-01T10:00:00+10:00",
            "species_guess": "Caladenia",
            "location": null,
            "private_location": "-36.9,144.2",
            "obscured": true,
            "ofvs": []
        }));
        assert_eq!(obs.display_location(), Some("-36.9,144.2"));
    }

    #[test]
    fn test_unobscured_record_uses_public_location() {
        let obs = observation(serde_json::json!({
            "id": 2,
            "time_observed_at": "2021-03-02T10:00:00+10:00",
            "species_guess": "Diuris",
            "location": "-37.1,144.5",
            "private_location": null,
            "obscured": false,
            "ofvs": []
        }));
        assert_eq!(obs.display_location(), Some("-37.1,144.5"));
    }

    #[test]
    fn test_missing_ofvs_defaults_to_empty() {
        let obs = observation(serde_json::json!({
            "id": 3,
            "time_observed_at": null,
            "species_guess": null,
            "location": null,
            "private_location": null,
            "obscured": false
        }));
        assert!(obs.ofvs.is_empty());
        assert_eq!(obs.display_location(), None);
    }

    #[test]
    fn test_page_requires_total_results() {
        let err = serde_json::from_value::<PageResponse>(serde_json::json!({
            "results": []
        }));
        assert!(err.is_err());
    }
}
