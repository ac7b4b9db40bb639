//! Domain models for the thumbnail pipeline.

use serde::{Deserialize, Serialize};

/// One decoded event record: a newly stored object in a source bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub source_bucket: String,
    pub source_key: String,
}

/// Per-notification result returned to the caller once the thumbnail has been
/// uploaded to the target bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    /// Source object key the thumbnail was generated from.
    pub file_name: String,
    pub target_bucket: String,
    /// Transport-level status code reported by the storage backend.
    pub status: u16,
    pub message: String,
}

/// Aggregated response for one batch, one outcome per processed record in
/// arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub outcomes: Vec<UploadOutcome>,
}

impl BatchResponse {
    pub fn record(&mut self, outcome: UploadOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_camel_case_fields() {
        let outcome = UploadOutcome {
            file_name: "cat.png".to_string(),
            target_bucket: "thumbs".to_string(),
            status: 200,
            message: "OK".to_string(),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["fileName"], "cat.png");
        assert_eq!(json["targetBucket"], "thumbs");
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "OK");
    }

    #[test]
    fn response_keeps_insertion_order() {
        let mut response = BatchResponse::default();
        for name in ["a.png", "b.png", "c.png"] {
            response.record(UploadOutcome {
                file_name: name.to_string(),
                target_bucket: "thumbs".to_string(),
                status: 200,
                message: "OK".to_string(),
            });
        }

        let names: Vec<_> = response
            .outcomes
            .iter()
            .map(|o| o.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }
}
