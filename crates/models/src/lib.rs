pub mod errors;
pub mod db;
pub mod client_record;

#[cfg(test)]
mod tests;
