// Export foundational arithmetic operations directly
pub mod add;
pub mod mul;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::{add_op, add_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use pow::pow_op;
pub use sub::{sub_op, sub_scalar_op};
