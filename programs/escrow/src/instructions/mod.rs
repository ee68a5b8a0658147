pub mod cancel_offer;
pub mod fulfill_offer;
pub mod make_offer;

pub use cancel_offer::*;
pub use fulfill_offer::*;
pub use make_offer::*;
