//! Domain entities.

mod shortened_link;

pub use shortened_link::ShortenedLink;
