pub mod form;
pub mod repo;
pub mod view;
