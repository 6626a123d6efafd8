pub mod dispatcher;
pub mod normalizer;
