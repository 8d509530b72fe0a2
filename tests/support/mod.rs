pub mod builders;
pub mod clock;
