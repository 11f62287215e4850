pub mod seed;
pub mod storage;
pub mod store;
