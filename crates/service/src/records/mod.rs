pub mod repository;

pub use models::client_record::{Model as ClientRecord, NewClientRecord};
pub use repository::{RecordStore, SeaOrmRecordStore};
