//! Two-branch classification report for concrete types.
//!
//! [`ScalarLike`](crate::traits::ScalarLike) either holds or the build fails.
//! The probes here answer the same question without failing, so a type that is
//! rejected can still be inspected: which branch was tried, and which operators
//! are missing.
//!
//! ```
//! use matrix_core::{capabilities, is_scalar_like, Operation};
//!
//! #[derive(Clone, Copy)]
//! struct Tag;
//!
//! const TAG: matrix_core::Capabilities = capabilities!(Tag);
//! const _: () = assert!(!is_scalar_like!(Tag));
//!
//! assert_eq!(TAG.missing(), Operation::ALL.to_vec());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Branch through which a type qualifies as scalar-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarClass {
    /// Built-in integer or floating-point type.
    Primitive,
    /// Custom type with closed `+ - * /` and unary `-`.
    Composite,
}

impl fmt::Display for ScalarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarClass::Primitive => write!(f, "primitive"),
            ScalarClass::Composite => write!(f, "composite"),
        }
    }
}

/// One of the five operators the structural branch requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Neg,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub | Operation::Neg => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Neg => write!(f, "-a"),
            op => write!(f, "a {} b", op.symbol()),
        }
    }
}

/// Static capabilities of one concrete type, built by [`capabilities!`](crate::capabilities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub type_name: &'static str,
    pub primitive: bool,
    pub add: bool,
    pub sub: bool,
    pub mul: bool,
    pub div: bool,
    pub neg: bool,
    /// The type already implements `ScalarLike`.
    pub declared: bool,
}

impl Capabilities {
    pub const fn has(&self, op: Operation) -> bool {
        match op {
            Operation::Add => self.add,
            Operation::Sub => self.sub,
            Operation::Mul => self.mul,
            Operation::Div => self.div,
            Operation::Neg => self.neg,
        }
    }

    /// All five operators are closed over the type.
    pub const fn is_arithmetic(&self) -> bool {
        self.add && self.sub && self.mul && self.div && self.neg
    }

    /// Primitive membership first, then the structural test.
    pub const fn class(&self) -> Option<ScalarClass> {
        if self.primitive {
            Some(ScalarClass::Primitive)
        } else if self.is_arithmetic() {
            Some(ScalarClass::Composite)
        } else {
            None
        }
    }

    /// Operators that failed the structural test. Empty for primitives.
    pub fn missing(&self) -> Vec<Operation> {
        if self.primitive {
            return Vec::new();
        }
        Operation::ALL
            .into_iter()
            .filter(|&op| !self.has(op))
            .collect()
    }

    pub fn ensure(&self) -> Result<ScalarClass, ClassificationError> {
        match self.class() {
            Some(ScalarClass::Primitive) => Ok(ScalarClass::Primitive),
            Some(ScalarClass::Composite) if self.declared => Ok(ScalarClass::Composite),
            Some(ScalarClass::Composite) => {
                log::debug!(
                    "{} has every operator but does not implement Composite",
                    self.type_name
                );
                Err(ClassificationError::NotDeclared {
                    type_name: self.type_name,
                })
            }
            None => {
                let missing = self.missing();
                log::debug!(
                    "{} rejected as scalar, missing {}",
                    self.type_name,
                    join_operations(&missing)
                );
                Err(ClassificationError::MissingOperations {
                    type_name: self.type_name,
                    missing,
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("`{type_name}` is not scalar-like: missing {}", join_operations(.missing))]
    MissingOperations {
        type_name: &'static str,
        missing: Vec<Operation>,
    },
    #[error("`{type_name}` supports every scalar operator but is not declared `Composite`")]
    NotDeclared { type_name: &'static str },
}

fn join_operations(ops: &[Operation]) -> String {
    ops.iter()
        .map(|op| format!("`{op}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Inherent constants shadow the [`Fallback`](probe::Fallback) defaults when
/// the bound holds for the concrete type.
#[doc(hidden)]
pub mod probe {
    use crate::traits::{
        Arithmetic, ClosedAdd, ClosedDiv, ClosedMul, ClosedNeg, ClosedSub, Primitive, ScalarLike,
    };
    use std::marker::PhantomData;

    pub struct Probe<T: ?Sized>(PhantomData<T>);

    pub trait Fallback {
        const PRIMITIVE: bool = false;
        const ADD: bool = false;
        const SUB: bool = false;
        const MUL: bool = false;
        const DIV: bool = false;
        const NEG: bool = false;
        const ARITHMETIC: bool = false;
        const DECLARED: bool = false;
    }

    impl<T: ?Sized> Fallback for Probe<T> {}

    impl<T: Primitive> Probe<T> {
        pub const PRIMITIVE: bool = true;
    }
    impl<T: ClosedAdd> Probe<T> {
        pub const ADD: bool = true;
    }
    impl<T: ClosedSub> Probe<T> {
        pub const SUB: bool = true;
    }
    impl<T: ClosedMul> Probe<T> {
        pub const MUL: bool = true;
    }
    impl<T: ClosedDiv> Probe<T> {
        pub const DIV: bool = true;
    }
    impl<T: ClosedNeg> Probe<T> {
        pub const NEG: bool = true;
    }
    impl<T: Arithmetic> Probe<T> {
        pub const ARITHMETIC: bool = true;
    }
    impl<T: ScalarLike> Probe<T> {
        pub const DECLARED: bool = true;
    }
}

/// Builds the [`Capabilities`] of a concrete type as a constant expression.
///
/// Only meaningful for concrete types: inside a generic function every field
/// reads `false`, because the bounds cannot be proven there.
#[macro_export]
macro_rules! capabilities {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::classify::probe::Fallback as _;
        $crate::classify::Capabilities {
            type_name: ::core::stringify!($ty),
            primitive: <$crate::classify::probe::Probe<$ty>>::PRIMITIVE,
            add: <$crate::classify::probe::Probe<$ty>>::ADD,
            sub: <$crate::classify::probe::Probe<$ty>>::SUB,
            mul: <$crate::classify::probe::Probe<$ty>>::MUL,
            div: <$crate::classify::probe::Probe<$ty>>::DIV,
            neg: <$crate::classify::probe::Probe<$ty>>::NEG,
            declared: <$crate::classify::probe::Probe<$ty>>::DECLARED,
        }
    }};
}

/// `true` when the concrete type implements `ScalarLike`.
#[macro_export]
macro_rules! is_scalar_like {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::classify::probe::Fallback as _;
        <$crate::classify::probe::Probe<$ty>>::DECLARED
    }};
}

/// `true` when the concrete type passes the structural five-operator test.
#[macro_export]
macro_rules! is_arithmetic {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::classify::probe::Fallback as _;
        <$crate::classify::probe::Probe<$ty>>::ARITHMETIC
    }};
}
