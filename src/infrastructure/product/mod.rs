pub mod model;
pub mod repository;

pub use model::ProductModel;
pub use repository::ProductRepository;
