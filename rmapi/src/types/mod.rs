pub mod character;
pub mod detail;
pub mod episode;
pub mod location;
pub mod page;
pub mod resource;

pub use character::*;
pub use detail::*;
pub use episode::*;
pub use location::*;
pub use page::*;
pub use resource::*;
