/// Storage contract shared by the tracker and the seeder.
pub mod persistence;
