/// Implements a `std::ops` binary operator for every owned/borrowed
/// combination of `Value` operands, forwarding to `combine_unchecked`.
macro_rules! impl_value_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<'a, T: $crate::ScalarNumeric> std::ops::$trait<&'a $crate::Value<T>>
            for &'a $crate::Value<T>
        {
            type Output = $crate::Value<T>;

            fn $method(self, rhs: &'a $crate::Value<T>) -> $crate::Value<T> {
                $crate::ops::combine::combine_unchecked($op, &[self.clone(), rhs.clone()])
            }
        }

        impl<T: $crate::ScalarNumeric> std::ops::$trait<$crate::Value<T>> for $crate::Value<T> {
            type Output = $crate::Value<T>;

            fn $method(self, rhs: $crate::Value<T>) -> $crate::Value<T> {
                std::ops::$trait::$method(&self, &rhs)
            }
        }

        impl<'a, T: $crate::ScalarNumeric> std::ops::$trait<&'a $crate::Value<T>> for $crate::Value<T> {
            type Output = $crate::Value<T>;

            fn $method(self, rhs: &'a $crate::Value<T>) -> $crate::Value<T> {
                std::ops::$trait::$method(&self, rhs)
            }
        }

        impl<'a, T: $crate::ScalarNumeric> std::ops::$trait<$crate::Value<T>> for &'a $crate::Value<T> {
            type Output = $crate::Value<T>;

            fn $method(self, rhs: $crate::Value<T>) -> $crate::Value<T> {
                std::ops::$trait::$method(self, &rhs)
            }
        }
    };
}

// Modules come after the macro so it is in their textual scope.
pub mod add;
pub mod mul;

pub use add::{add_op, sum_op};
pub use mul::{mul_op, product_op};
