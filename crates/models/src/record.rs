use serde::Deserialize;

/// The part of a remote record needed to resolve a reference.
///
/// Every other field of the record is ignored when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RemoteRecord {
    pub id: i32,
}

/// Linear membership test over a fetched collection
pub fn contains_id(records: &[RemoteRecord], id: i32) -> bool {
    records.iter().any(|record| record.id == id)
}
