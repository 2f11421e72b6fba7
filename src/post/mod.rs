pub mod memory;
pub mod post_controller;
pub mod post_index;
pub mod post_model;
pub mod post_service;
pub mod post_store;


pub use memory::InMemoryPostStore;
pub use post_model::{Author, BlogPost, BlogPostView, NewBlogPost, PostUpdate};
pub use post_service::MongoPostStore;
pub use post_store::{PostStore, StoreError};
