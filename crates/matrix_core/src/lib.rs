pub mod autodiff;
pub mod classify;
pub mod primitive;
/// The `matrix_core` crate decides which types may be used as matrix and vector elements.
/// It accepts the built-in integer and floating-point types directly, and custom numeric
/// types (such as the Dual numbers used for automatic differentiation) once they provide
/// closed `+ - * /` and unary `-`.
///
/// Key components:
/// - **Traits**: `ScalarLike` (the element bound), `Primitive` and `Composite` (its two branches),
///   and one `Closed*` capability trait per required operator.
/// - **Classify**: const probes (`capabilities!`, `is_scalar_like!`) reporting which branch a
///   concrete type takes and which operators it lacks.
/// - **Autodiff**: Dual number implementation plus `derivative` and `jacobian` helpers.
pub mod traits;

pub use classify::{Capabilities, ClassificationError, Operation, ScalarClass};
pub use traits::{
    classify, Arithmetic, ClosedAdd, ClosedDiv, ClosedMul, ClosedNeg, ClosedSub, Composite,
    Primitive, ScalarLike,
};
