//! One repository per entity. Each lookup-then-write runs inside a single
//! transaction on the shared connection.

mod directors;
mod genres;
mod movies;

pub use directors::DirectorRepo;
pub use genres::GenreRepo;
pub use movies::MovieRepo;
