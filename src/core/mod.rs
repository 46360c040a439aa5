pub mod clock;
pub mod farm_manager;
pub mod finance;
pub mod services;
pub mod store;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use farm_manager::{FarmManager, LoadMetadata};
pub use finance::{CustoPorCategoria, ResultadosSafra};
pub use store::{FarmStore, Table};
