pub mod article;

pub use article::{Article, UNSAVED_ID};
