/// Implements the by-value forms of a binary operator in terms of its `&T op &T` form.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl std::ops::$imp<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<'a> std::ops::$imp<&'a $t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &'a $t) -> $t {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl<'a> std::ops::$imp<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

/// Implements `-T` in terms of `-&T`.
macro_rules! forward_neg {
    ($t:ty) => {
        impl std::ops::Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> $t {
                -&self
            }
        }
    };
}
