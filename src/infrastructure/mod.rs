pub mod id_gen;
pub mod memory_repo;
pub mod seed;
