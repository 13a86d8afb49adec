pub mod seen;

pub use seen::SeenArticles;
