//! S3 event notification decoding.
//!
//! Minimal serde model of the bucket-notification JSON: only the bucket name
//! and object key are read, everything else is ignored. Object keys are taken
//! verbatim, with no percent-decoding or normalization.

use serde::Deserialize;
use thumbly_core::Notification;

#[derive(Debug, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3Record>,
}

#[derive(Debug, Deserialize)]
pub struct S3Record {
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
}

impl S3Event {
    /// Extract one notification per record, preserving record order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.records
            .iter()
            .map(|record| Notification {
                source_bucket: record.s3.bucket.name.clone(),
                source_key: record.s3.object.key.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_EVENT: &str = r#"{
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": {
                        "name": "uploads",
                        "arn": "arn:aws:s3:::uploads"
                    },
                    "object": {
                        "key": "images/a/b.png",
                        "size": 1024,
                        "eTag": "0123456789abcdef"
                    }
                }
            },
            {
                "s3": {
                    "bucket": { "name": "other-uploads" },
                    "object": { "key": "cat.png" }
                }
            }
        ]
    }"#;

    #[test]
    fn decodes_records_in_order() {
        let event: S3Event = serde_json::from_str(SAMPLE_EVENT).unwrap();
        let notifications = event.notifications();

        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].source_bucket, "uploads");
        assert_eq!(notifications[0].source_key, "images/a/b.png");
        assert_eq!(notifications[1].source_bucket, "other-uploads");
        assert_eq!(notifications[1].source_key, "cat.png");
    }

    #[test]
    fn decodes_empty_batch() {
        let event: S3Event = serde_json::from_str(r#"{"Records": []}"#).unwrap();
        assert!(event.notifications().is_empty());
    }

    #[test]
    fn missing_records_field_is_an_error() {
        assert!(serde_json::from_str::<S3Event>("{}").is_err());
    }

    #[test]
    fn missing_object_key_is_an_error() {
        let malformed = r#"{
            "Records": [ { "s3": { "bucket": { "name": "uploads" }, "object": {} } } ]
        }"#;
        assert!(serde_json::from_str::<S3Event>(malformed).is_err());
    }

    #[test]
    fn keys_are_not_decoded() {
        let event_json = r#"{
            "Records": [ { "s3": { "bucket": { "name": "b" }, "object": { "key": "sp%20ace.png" } } } ]
        }"#;
        let event: S3Event = serde_json::from_str(event_json).unwrap();
        assert_eq!(event.notifications()[0].source_key, "sp%20ace.png");
    }
}
