pub mod movie_filter;

pub use movie_filter::{FilterKey, MovieFilter, MovieLookup};
