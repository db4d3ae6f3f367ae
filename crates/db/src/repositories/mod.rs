mod location_repo;

pub use location_repo::LocationRepo;
