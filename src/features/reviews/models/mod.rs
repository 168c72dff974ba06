mod review;

pub use review::ReviewRow;
