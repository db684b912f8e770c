pub mod pii;
pub mod timegrid;
