pub mod hit_testing;

pub use hit_testing::{cell_at, cell_rect};
