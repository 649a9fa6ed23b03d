pub mod popup;

pub use popup::reduce_popup;
