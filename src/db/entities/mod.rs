pub mod director;
pub mod genre;
pub mod movie;

pub use director::Entity as Director;
pub use genre::Entity as Genre;
pub use movie::Entity as Movie;
