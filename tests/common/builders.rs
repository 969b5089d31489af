//! Test data builders for creating test objects

use super::at_ms;
use serial_logger::Record;

/// Builder for creating test Records
pub struct RecordBuilder {
    payload: String,
    offset_ms: i64,
}

impl RecordBuilder {
    pub fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_string(),
            offset_ms: 0,
        }
    }

    pub fn at_ms(mut self, offset_ms: i64) -> Self {
        self.offset_ms = offset_ms;
        self
    }

    pub fn build(self) -> Record {
        Record::new(at_ms(self.offset_ms), self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new("temp=20").at_ms(1_500).build();
        assert_eq!(record.payload(), "temp=20");
        assert_eq!(record.timestamp_string(), "2025-06-01 14:30:01");
    }
}
