pub mod json_collection;
