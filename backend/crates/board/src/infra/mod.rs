//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryBoardRepository;
pub use postgres::PgBoardRepository;
