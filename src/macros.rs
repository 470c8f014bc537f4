// Forwards the owned-operand forms of a binary operator, and both compound
// assignment forms, to the `&T op &T` implementation. Compound operators
// evaluate the full result before writing it back.
macro_rules! forward_binop {
    ($t: ty, $imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <&$t as $imp<&$t>>::$method(&self, &rhs)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                <&$t as $imp<&$t>>::$method(&self, rhs)
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <&$t as $imp<&$t>>::$method(self, &rhs)
            }
        }

        impl $imp_assign<$t> for $t {
            fn $method_assign(&mut self, rhs: $t) {
                *self = <&$t as $imp<&$t>>::$method(&*self, &rhs);
            }
        }

        impl $imp_assign<&$t> for $t {
            fn $method_assign(&mut self, rhs: &$t) {
                *self = <&$t as $imp<&$t>>::$method(&*self, rhs);
            }
        }
    };
}

macro_rules! trim_leading_zero {
    ($limbs: expr) => {
        while let Some(&0) = $limbs.last() {
            $limbs.pop();
        }
    };
}
