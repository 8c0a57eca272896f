pub mod db;
pub mod errors;
pub mod product {
    pub mod entity;
    pub mod repository;
}
