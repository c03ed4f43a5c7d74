//! Service layer: the record store abstraction used by the HTTP layer.
//! - `RecordStore` is the seam between handlers and persistence.
//! - `SeaOrmRecordStore` delegates to `models::client_record`.

pub mod errors;
pub mod records;
#[cfg(test)]
pub mod test_support;
