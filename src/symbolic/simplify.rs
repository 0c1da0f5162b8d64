//! Single-pass bottom-up simplification.
//!
//! Children are simplified first, then the parent applies its rewrite rules
//! in a fixed order and returns on the first one that fires. Some rules
//! re-simplify their replacement (re-association, sign extraction), others
//! return it as built; the distinction is part of the engine's observable
//! output and is kept as is.

use crate::symbolic::errors::EvalError;
use crate::symbolic::node::{num, Node};
use crate::symbolic::scalar::Scalar;

fn is_number<T: Scalar>(node: &Node<T>) -> bool {
    matches!(node, Node::Number(_))
}

fn is_zero<T: Scalar>(node: &Node<T>) -> bool {
    matches!(node, Node::Number(value) if value.is_zero())
}

fn is_one<T: Scalar>(node: &Node<T>) -> bool {
    matches!(node, Node::Number(value) if value.is_one())
}

fn is_minus_one<T: Scalar>(node: &Node<T>) -> bool {
    matches!(node, Node::Number(value) if value.is_minus_one())
}

// sin, cos, exp and ln fold a constant argument only when the result is
// 0, 1 or -1; anything else stays symbolic so output remains exact.
fn fold_if_small<T: Scalar>(value: T) -> Option<Node<T>> {
    if value.is_zero() || value.is_one() || value.is_minus_one() {
        Some(Node::Number(value))
    } else {
        None
    }
}

impl<T: Scalar> Node<T> {
    /// Simplifies the tree bottom-up in a single pass.
    ///
    /// Fails only if constant folding runs into `ln(0)`.
    pub fn simplify(&self) -> Result<Node<T>, EvalError> {
        match self {
            Node::Number(_) | Node::Variable(_) => Ok(self.clone()),
            Node::Neg(arg) => Ok(simplify_neg(&arg.simplify()?)),
            Node::Add(left, right) => simplify_add(&left.simplify()?, &right.simplify()?),
            Node::Sub(left, right) => simplify_sub(&left.simplify()?, &right.simplify()?),
            Node::Mul(left, right) => simplify_mul(&left.simplify()?, &right.simplify()?),
            Node::Div(left, right) => simplify_div(&left.simplify()?, &right.simplify()?),
            Node::Pow(left, right) => simplify_pow(&left.simplify()?, &right.simplify()?),
            Node::Sin(arg) => simplify_sin(&arg.simplify()?),
            Node::Cos(arg) => simplify_cos(&arg.simplify()?),
            Node::Exp(arg) => simplify_exp(&arg.simplify()?),
            Node::Ln(arg) => simplify_ln(&arg.simplify()?),
        }
    }
}

fn simplify_neg<T: Scalar>(arg: &Node<T>) -> Node<T> {
    // -(a) = -a
    if let Node::Number(value) = arg {
        return Node::Number(-*value);
    }
    // -(-a) = a
    if let Node::Neg(inner) = arg {
        return inner.as_ref().clone();
    }
    Node::Neg(arg.clone().boxed())
}

fn simplify_add<T: Scalar>(left: &Node<T>, right: &Node<T>) -> Result<Node<T>, EvalError> {
    // 0 + x = x
    if is_zero(left) {
        return Ok(right.clone());
    }
    // x + 0 = x
    if is_zero(right) {
        return Ok(left.clone());
    }
    // constant folding
    if let (Node::Number(a), Node::Number(b)) = (left, right) {
        return Ok(Node::Number(*a + *b));
    }

    // -x + (-y) = -(x + y)
    if let (Node::Neg(x), Node::Neg(y)) = (left, right) {
        return Node::Neg(Node::Add(x.clone(), y.clone()).boxed()).simplify();
    }
    // -x + y = y - x
    if let Node::Neg(x) = left {
        return Node::Sub(right.clone().boxed(), x.clone()).simplify();
    }
    // x + (-y) = x - y
    if let Node::Neg(y) = right {
        return Node::Sub(left.clone().boxed(), y.clone()).simplify();
    }

    // x + x = 2 * x
    if left == right {
        return Ok(Node::Mul(num(2.0).boxed(), left.clone().boxed()));
    }

    // sin(x)^2 + cos(x)^2 = 1
    if let (Node::Pow(lbase, lexp), Node::Pow(rbase, rexp)) = (left, right) {
        let two = num(2.0);
        if lexp.as_ref() == &two && rexp.as_ref() == &two {
            if let (Node::Sin(x), Node::Cos(y)) = (lbase.as_ref(), rbase.as_ref()) {
                if x == y {
                    return Ok(num(1.0));
                }
            }
            if let (Node::Cos(x), Node::Sin(y)) = (lbase.as_ref(), rbase.as_ref()) {
                if x == y {
                    return Ok(num(1.0));
                }
            }
        }
    }

    if is_number(left) {
        if let Node::Add(rl, rr) = right {
            // a + (b + x) = (a + b) + x
            if is_number(rl) {
                return Ok(Node::Add(
                    Node::Add(rl.clone(), left.clone().boxed()).boxed(),
                    rr.clone(),
                ));
            }
            // a + (x + b) = (a + b) + x
            if is_number(rr) {
                return Ok(Node::Add(
                    Node::Add(rr.clone(), left.clone().boxed()).boxed(),
                    rl.clone(),
                ));
            }
        }
        if let Node::Sub(rl, rr) = right {
            // a + (b - x) = (a + b) - x
            if is_number(rl) {
                return Ok(Node::Sub(
                    Node::Add(rl.clone(), left.clone().boxed()).boxed(),
                    rr.clone(),
                ));
            }
            // a + (x - b) = (a - b) + x
            if is_number(rr) {
                return Ok(Node::Add(
                    Node::Sub(left.clone().boxed(), rr.clone()).boxed(),
                    rl.clone(),
                ));
            }
        }
    }

    if is_number(right) {
        if let Node::Add(ll, lr) = left {
            // (a + x) + b = (a + b) + x
            if is_number(ll) {
                return Ok(Node::Add(
                    Node::Add(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                ));
            }
            // (x + a) + b = (a + b) + x
            if is_number(lr) {
                return Ok(Node::Add(
                    Node::Add(lr.clone(), right.clone().boxed()).boxed(),
                    ll.clone(),
                ));
            }
        }
        if let Node::Sub(ll, lr) = left {
            // (a - x) + b = (a + b) - x
            if is_number(ll) {
                return Ok(Node::Sub(
                    Node::Add(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                ));
            }
            // (x - a) + b = (b - a) + x
            if is_number(lr) {
                return Ok(Node::Add(
                    Node::Sub(right.clone().boxed(), lr.clone()).boxed(),
                    ll.clone(),
                ));
            }
        }
    }

    if let (Node::Mul(ll, lr), Node::Mul(rl, rr)) = (left, right) {
        // x * a + x * b = (a + b) * x
        if ll == rl {
            return Node::Mul(Node::Add(lr.clone(), rr.clone()).boxed(), ll.clone()).simplify();
        }
        // x * a + b * x = (a + b) * x
        if ll == rr {
            return Node::Mul(Node::Add(lr.clone(), rl.clone()).boxed(), ll.clone()).simplify();
        }
        // a * x + x * b = (a + b) * x
        if lr == rl {
            return Node::Mul(Node::Add(ll.clone(), rr.clone()).boxed(), lr.clone()).simplify();
        }
        // a * x + b * x = (a + b) * x
        if lr == rr {
            return Node::Mul(Node::Add(ll.clone(), rl.clone()).boxed(), lr.clone()).simplify();
        }
    }

    if let Node::Mul(ll, lr) = left {
        // a * x + x = (a + 1) * x
        if lr.as_ref() == right {
            return Node::Mul(
                Node::Add(ll.clone(), num(1.0).boxed()).boxed(),
                right.clone().boxed(),
            )
            .simplify();
        }
        // x * a + x = (a + 1) * x
        if ll.as_ref() == right {
            return Node::Mul(
                Node::Add(lr.clone(), num(1.0).boxed()).boxed(),
                right.clone().boxed(),
            )
            .simplify();
        }
    }

    if let Node::Mul(rl, rr) = right {
        // x + a * x = (a + 1) * x
        if rr.as_ref() == left {
            return Node::Mul(
                Node::Add(rl.clone(), num(1.0).boxed()).boxed(),
                left.clone().boxed(),
            )
            .simplify();
        }
        // x + x * a = (a + 1) * x
        if rl.as_ref() == left {
            return Node::Mul(
                Node::Add(rr.clone(), num(1.0).boxed()).boxed(),
                left.clone().boxed(),
            )
            .simplify();
        }
    }

    if let (Node::Div(ll, lr), Node::Div(rl, rr)) = (left, right) {
        // a / x + b / x = (a + b) / x
        if lr == rr {
            return Node::Div(Node::Add(ll.clone(), rl.clone()).boxed(), lr.clone()).simplify();
        }
    }

    Ok(Node::Add(left.clone().boxed(), right.clone().boxed()))
}

fn simplify_sub<T: Scalar>(left: &Node<T>, right: &Node<T>) -> Result<Node<T>, EvalError> {
    // 0 - x = -x
    if is_zero(left) {
        return Ok(Node::Neg(right.clone().boxed()));
    }
    // x - 0 = x
    if is_zero(right) {
        return Ok(left.clone());
    }
    // constant folding
    if let (Node::Number(a), Node::Number(b)) = (left, right) {
        return Ok(Node::Number(*a - *b));
    }
    // x - x = 0
    if left == right {
        return Ok(num(0.0));
    }

    // -x - y = -(x + y)
    if let Node::Neg(x) = left {
        return Node::Neg(Node::Add(x.clone(), right.clone().boxed()).boxed()).simplify();
    }
    // x - (-y) = x + y
    if let Node::Neg(y) = right {
        return Node::Add(left.clone().boxed(), y.clone()).simplify();
    }

    if is_number(right) {
        if let Node::Add(ll, lr) = left {
            // (x + a) - b = (a - b) + x
            if is_number(lr) {
                return Node::Add(
                    Node::Sub(lr.clone(), right.clone().boxed()).boxed(),
                    ll.clone(),
                )
                .simplify();
            }
            // (a + x) - b = (a - b) + x
            if is_number(ll) {
                return Node::Add(
                    Node::Sub(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                )
                .simplify();
            }
        }
        if let Node::Sub(ll, lr) = left {
            // (x - a) - b = x - (a + b)
            if is_number(lr) {
                return Node::Sub(
                    ll.clone(),
                    Node::Add(lr.clone(), right.clone().boxed()).boxed(),
                )
                .simplify();
            }
            // (a - x) - b = (a - b) - x
            if is_number(ll) {
                return Node::Sub(
                    Node::Sub(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                )
                .simplify();
            }
        }
    }

    if is_number(left) {
        if let Node::Add(rl, rr) = right {
            // a - (x + b) = (a - b) - x
            if is_number(rr) {
                return Node::Sub(
                    Node::Sub(left.clone().boxed(), rr.clone()).boxed(),
                    rl.clone(),
                )
                .simplify();
            }
            // a - (b + x) = (a - b) - x
            if is_number(rl) {
                return Node::Sub(
                    Node::Sub(left.clone().boxed(), rl.clone()).boxed(),
                    rr.clone(),
                )
                .simplify();
            }
        }
        if let Node::Sub(rl, rr) = right {
            // a - (x - b) = (a + b) - x
            if is_number(rr) {
                return Node::Sub(
                    Node::Add(left.clone().boxed(), rr.clone()).boxed(),
                    rl.clone(),
                )
                .simplify();
            }
            // a - (b - x) = (a - b) + x
            if is_number(rl) {
                return Node::Add(
                    Node::Sub(left.clone().boxed(), rl.clone()).boxed(),
                    rr.clone(),
                )
                .simplify();
            }
        }
    }

    if let (Node::Mul(ll, lr), Node::Mul(rl, rr)) = (left, right) {
        // x * a - x * b = (a - b) * x
        if ll == rl {
            return Node::Mul(Node::Sub(lr.clone(), rr.clone()).boxed(), ll.clone()).simplify();
        }
        // x * a - b * x = (a - b) * x
        if ll == rr {
            return Node::Mul(Node::Sub(lr.clone(), rl.clone()).boxed(), ll.clone()).simplify();
        }
        // a * x - x * b = (a - b) * x
        if lr == rl {
            return Node::Mul(Node::Sub(ll.clone(), rr.clone()).boxed(), lr.clone()).simplify();
        }
        // a * x - b * x = (a - b) * x
        if lr == rr {
            return Node::Mul(Node::Sub(ll.clone(), rl.clone()).boxed(), lr.clone()).simplify();
        }
    }

    if let Node::Mul(ll, lr) = left {
        // a * x - x = (a - 1) * x
        if lr.as_ref() == right {
            return Node::Mul(
                Node::Sub(ll.clone(), num(1.0).boxed()).boxed(),
                right.clone().boxed(),
            )
            .simplify();
        }
        // x * a - x = (a - 1) * x
        if ll.as_ref() == right {
            return Node::Mul(
                Node::Sub(lr.clone(), num(1.0).boxed()).boxed(),
                right.clone().boxed(),
            )
            .simplify();
        }
    }

    if let Node::Mul(rl, rr) = right {
        // x - a * x = (1 - a) * x
        if rr.as_ref() == left {
            return Node::Mul(
                Node::Sub(num(1.0).boxed(), rl.clone()).boxed(),
                left.clone().boxed(),
            )
            .simplify();
        }
        // x - x * a = (1 - a) * x
        if rl.as_ref() == left {
            return Node::Mul(
                Node::Sub(num(1.0).boxed(), rr.clone()).boxed(),
                left.clone().boxed(),
            )
            .simplify();
        }
    }

    if let (Node::Div(ll, lr), Node::Div(rl, rr)) = (left, right) {
        // a / x - b / x = (a - b) / x
        if lr == rr {
            return Node::Div(Node::Sub(ll.clone(), rl.clone()).boxed(), lr.clone()).simplify();
        }
    }

    Ok(Node::Sub(left.clone().boxed(), right.clone().boxed()))
}

fn simplify_mul<T: Scalar>(left: &Node<T>, right: &Node<T>) -> Result<Node<T>, EvalError> {
    // 0 * x = x * 0 = 0
    if is_zero(left) || is_zero(right) {
        return Ok(num(0.0));
    }
    // 1 * x = x
    if is_one(left) {
        return Ok(right.clone());
    }
    // -1 * x = -x
    if is_minus_one(left) {
        return Ok(Node::Neg(right.clone().boxed()));
    }
    // x * 1 = x
    if is_one(right) {
        return Ok(left.clone());
    }
    // x * -1 = -x
    if is_minus_one(right) {
        return Ok(Node::Neg(left.clone().boxed()));
    }
    // constant folding
    if let (Node::Number(a), Node::Number(b)) = (left, right) {
        return Ok(Node::Number(*a * *b));
    }

    if is_number(left) {
        if let Node::Mul(rl, rr) = right {
            // a * (b * x) = (a * b) * x
            if is_number(rl) {
                return Node::Mul(
                    Node::Mul(left.clone().boxed(), rl.clone()).boxed(),
                    rr.clone(),
                )
                .simplify();
            }
            // a * (x * b) = (a * b) * x
            if is_number(rr) {
                return Node::Mul(
                    Node::Mul(left.clone().boxed(), rr.clone()).boxed(),
                    rl.clone(),
                )
                .simplify();
            }
        }
        if let Node::Div(rl, rr) = right {
            // a * (b / x) = (a * b) / x
            if is_number(rl) {
                return Node::Div(
                    Node::Mul(left.clone().boxed(), rl.clone()).boxed(),
                    rr.clone(),
                )
                .simplify();
            }
            // a * (x / b) = (a / b) * x
            if is_number(rr) {
                return Node::Mul(
                    Node::Div(left.clone().boxed(), rr.clone()).boxed(),
                    rl.clone(),
                )
                .simplify();
            }
        }
    }

    if is_number(right) {
        if let Node::Mul(ll, lr) = left {
            // (a * x) * b = (a * b) * x
            if is_number(ll) {
                return Node::Mul(
                    Node::Mul(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                )
                .simplify();
            }
            // (x * a) * b = (a * b) * x
            if is_number(lr) {
                return Node::Mul(
                    Node::Mul(lr.clone(), right.clone().boxed()).boxed(),
                    ll.clone(),
                )
                .simplify();
            }
        }
        if let Node::Div(ll, lr) = left {
            // (a / x) * b = (a * b) / x
            if is_number(ll) {
                return Node::Div(
                    Node::Mul(ll.clone(), right.clone().boxed()).boxed(),
                    lr.clone(),
                )
                .simplify();
            }
            // (x / a) * b = (b / a) * x
            if is_number(lr) {
                return Node::Mul(
                    Node::Div(right.clone().boxed(), lr.clone()).boxed(),
                    ll.clone(),
                )
                .simplify();
            }
        }
    }

    // x * x = x^2
    if left == right {
        return Ok(Node::Pow(left.clone().boxed(), num(2.0).boxed()));
    }

    // -x * -y = x * y
    if let (Node::Neg(x), Node::Neg(y)) = (left, right) {
        return Node::Mul(x.clone(), y.clone()).simplify();
    }
    // -x * y = -(x * y)
    if let Node::Neg(x) = left {
        return Node::Neg(Node::Mul(x.clone(), right.clone().boxed()).boxed()).simplify();
    }
    // x * -y = -(x * y)
    if let Node::Neg(y) = right {
        return Node::Neg(Node::Mul(left.clone().boxed(), y.clone()).boxed()).simplify();
    }

    // a / x * b / y = (a * b) / (x * y)
    if let (Node::Div(ll, lr), Node::Div(rl, rr)) = (left, right) {
        return Node::Div(
            Node::Mul(ll.clone(), rl.clone()).boxed(),
            Node::Mul(lr.clone(), rr.clone()).boxed(),
        )
        .simplify();
    }
    // (a / b) * c = (a * c) / b
    if let Node::Div(ll, lr) = left {
        return Node::Div(
            Node::Mul(ll.clone(), right.clone().boxed()).boxed(),
            lr.clone(),
        )
        .simplify();
    }
    // a * (b / c) = (a * b) / c
    if let Node::Div(rl, rr) = right {
        return Node::Div(
            Node::Mul(left.clone().boxed(), rl.clone()).boxed(),
            rr.clone(),
        )
        .simplify();
    }

    if let Node::Mul(ll, lr) = left {
        if let Node::Pow(base, exponent) = lr.as_ref() {
            // (a * x^b) * x = a * x^(b + 1)
            if base.as_ref() == right {
                return Node::Mul(
                    ll.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // (a * x^b) * x^c = a * x^(b + c)
            if let Node::Pow(rbase, rexponent) = right {
                if rbase == base {
                    return Node::Mul(
                        ll.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Add(exponent.clone(), rexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
        if let Node::Pow(base, exponent) = ll.as_ref() {
            // (x^b * a) * x = a * x^(b + 1)
            if base.as_ref() == right {
                return Node::Mul(
                    lr.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // (x^b * a) * x^c = a * x^(b + c)
            if let Node::Pow(rbase, rexponent) = right {
                if rbase == base {
                    return Node::Mul(
                        lr.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Add(exponent.clone(), rexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
        // (a * x) * x = a * x^2
        if lr.as_ref() == right {
            return Node::Mul(
                ll.clone(),
                Node::Pow(right.clone().boxed(), num(2.0).boxed()).boxed(),
            )
            .simplify();
        }
        // (x * a) * x = a * x^2
        if ll.as_ref() == right {
            return Node::Mul(
                lr.clone(),
                Node::Pow(right.clone().boxed(), num(2.0).boxed()).boxed(),
            )
            .simplify();
        }
    }

    if let Node::Mul(rl, rr) = right {
        if let Node::Pow(base, exponent) = rr.as_ref() {
            // x * (a * x^b) = a * x^(b + 1)
            if base.as_ref() == left {
                return Node::Mul(
                    rl.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // x^c * (a * x^b) = a * x^(b + c)
            if let Node::Pow(lbase, lexponent) = left {
                if lbase == base {
                    return Node::Mul(
                        rl.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Add(exponent.clone(), lexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
        if let Node::Pow(base, exponent) = rl.as_ref() {
            // x * (x^b * a) = a * x^(b + 1)
            if base.as_ref() == left {
                return Node::Mul(
                    rr.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // x^c * (x^b * a) = a * x^(b + c)
            if let Node::Pow(lbase, lexponent) = left {
                if lbase == base {
                    return Node::Mul(
                        rr.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Add(exponent.clone(), lexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
        // x * (x * a) = a * x^2
        if rl.as_ref() == left {
            return Node::Mul(
                rr.clone(),
                Node::Pow(left.clone().boxed(), num(2.0).boxed()).boxed(),
            )
            .simplify();
        }
        // x * (a * x) = a * x^2
        if rr.as_ref() == left {
            return Node::Mul(
                rl.clone(),
                Node::Pow(left.clone().boxed(), num(2.0).boxed()).boxed(),
            )
            .simplify();
        }
    }

    if let Node::Pow(base, exponent) = left {
        // x^a * x = x^(a + 1)
        if base.as_ref() == right {
            return Node::Pow(
                right.clone().boxed(),
                Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
            )
            .simplify();
        }
        // x^a * x^b = x^(a + b)
        if let Node::Pow(rbase, rexponent) = right {
            if base == rbase {
                return Node::Pow(
                    base.clone(),
                    Node::Add(exponent.clone(), rexponent.clone()).boxed(),
                )
                .simplify();
            }
        }
    }

    if let Node::Pow(base, exponent) = right {
        // x * x^a = x^(a + 1)
        if base.as_ref() == left {
            return Node::Pow(
                left.clone().boxed(),
                Node::Add(exponent.clone(), num(1.0).boxed()).boxed(),
            )
            .simplify();
        }
    }

    Ok(Node::Mul(left.clone().boxed(), right.clone().boxed()))
}

fn simplify_div<T: Scalar>(left: &Node<T>, right: &Node<T>) -> Result<Node<T>, EvalError> {
    // 0 / x = 0
    if is_zero(left) {
        return Ok(num(0.0));
    }
    // x / 1 = x
    if is_one(right) {
        return Ok(left.clone());
    }
    // x / -1 = -x
    if is_minus_one(right) {
        return Ok(Node::Neg(left.clone().boxed()));
    }
    // x / x = 1
    if left == right {
        return Ok(num(1.0));
    }
    // constant folding
    if let (Node::Number(a), Node::Number(b)) = (left, right) {
        return Ok(Node::Number(*a / *b));
    }

    // -x / -y = x / y
    if let (Node::Neg(x), Node::Neg(y)) = (left, right) {
        return Node::Div(x.clone(), y.clone()).simplify();
    }
    // -x / y = -(x / y)
    if let Node::Neg(x) = left {
        return Node::Neg(Node::Div(x.clone(), right.clone().boxed()).boxed()).simplify();
    }
    // x / -y = -(x / y)
    if let Node::Neg(y) = right {
        return Node::Neg(Node::Div(left.clone().boxed(), y.clone()).boxed()).simplify();
    }

    // (x / a) / (y / b) = (x * b) / (a * y)
    if let (Node::Div(ll, lr), Node::Div(rl, rr)) = (left, right) {
        return Node::Div(
            Node::Mul(ll.clone(), rr.clone()).boxed(),
            Node::Mul(lr.clone(), rl.clone()).boxed(),
        )
        .simplify();
    }
    // (a / b) / x = a / (b * x)
    if let Node::Div(ll, lr) = left {
        return Node::Div(
            ll.clone(),
            Node::Mul(lr.clone(), right.clone().boxed()).boxed(),
        )
        .simplify();
    }
    // x / (a / b) = x * b / a
    if let Node::Div(rl, rr) = right {
        return Node::Div(
            Node::Mul(left.clone().boxed(), rr.clone()).boxed(),
            rl.clone(),
        )
        .simplify();
    }

    if let (Node::Mul(ll, lr), Node::Mul(rl, rr)) = (left, right) {
        // (x * a) / (x * b) = a / b
        if ll == rl {
            return Node::Div(lr.clone(), rr.clone()).simplify();
        }
        // (x * a) / (b * x) = a / b
        if ll == rr {
            return Node::Div(lr.clone(), rl.clone()).simplify();
        }
        // (a * x) / (x * b) = a / b
        if lr == rl {
            return Node::Div(ll.clone(), rr.clone()).simplify();
        }
        // (a * x) / (b * x) = a / b
        if lr == rr {
            return Node::Div(ll.clone(), rl.clone()).simplify();
        }
    }

    if let Node::Mul(ll, lr) = left {
        // (x * a) / x = a
        if ll.as_ref() == right {
            return Ok(lr.as_ref().clone());
        }
        // (a * x) / x = a
        if lr.as_ref() == right {
            return Ok(ll.as_ref().clone());
        }
        if let Node::Pow(base, exponent) = ll.as_ref() {
            // (x^b * a) / x = a * x^(b - 1)
            if base.as_ref() == right {
                return Node::Mul(
                    lr.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Sub(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // (x^b * a) / x^c = a * x^(b - c)
            if let Node::Pow(rbase, rexponent) = right {
                if base == rbase {
                    return Node::Mul(
                        lr.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Sub(exponent.clone(), rexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
        if let Node::Pow(base, exponent) = lr.as_ref() {
            // (a * x^b) / x = a * x^(b - 1)
            if base.as_ref() == right {
                return Node::Mul(
                    ll.clone(),
                    Node::Pow(
                        base.clone(),
                        Node::Sub(exponent.clone(), num(1.0).boxed()).boxed(),
                    )
                    .boxed(),
                )
                .simplify();
            }
            // (a * x^b) / x^c = a * x^(b - c)
            if let Node::Pow(rbase, rexponent) = right {
                if base == rbase {
                    return Node::Mul(
                        ll.clone(),
                        Node::Pow(
                            base.clone(),
                            Node::Sub(exponent.clone(), rexponent.clone()).boxed(),
                        )
                        .boxed(),
                    )
                    .simplify();
                }
            }
        }
    }

    if let Node::Mul(rl, rr) = right {
        // x / (x * a) = 1 / a
        if rl.as_ref() == left {
            return Node::Div(num(1.0).boxed(), rr.clone()).simplify();
        }
        // x / (a * x) = 1 / a
        if rr.as_ref() == left {
            return Node::Div(num(1.0).boxed(), rl.clone()).simplify();
        }
        if let Node::Pow(base, exponent) = rl.as_ref() {
            // x / (x^b * a) = x^(1 - b) / a
            if base.as_ref() == left {
                return Node::Div(
                    Node::Pow(
                        base.clone(),
                        Node::Sub(num(1.0).boxed(), exponent.clone()).boxed(),
                    )
                    .boxed(),
                    rr.clone(),
                )
                .simplify();
            }
            // x^c / (x^b * a) = x^(c - b) / a
            if let Node::Pow(lbase, lexponent) = left {
                if lbase == base {
                    return Node::Div(
                        Node::Pow(
                            base.clone(),
                            Node::Sub(lexponent.clone(), exponent.clone()).boxed(),
                        )
                        .boxed(),
                        rr.clone(),
                    )
                    .simplify();
                }
            }
        }
        if let Node::Pow(base, exponent) = rr.as_ref() {
            // x / (a * x^b) = x^(1 - b) / a
            if base.as_ref() == left {
                return Node::Div(
                    Node::Pow(
                        base.clone(),
                        Node::Sub(num(1.0).boxed(), exponent.clone()).boxed(),
                    )
                    .boxed(),
                    rl.clone(),
                )
                .simplify();
            }
            // x^c / (a * x^b) = x^(c - b) / a
            if let Node::Pow(lbase, lexponent) = left {
                if lbase == base {
                    return Node::Div(
                        Node::Pow(
                            base.clone(),
                            Node::Sub(lexponent.clone(), exponent.clone()).boxed(),
                        )
                        .boxed(),
                        rl.clone(),
                    )
                    .simplify();
                }
            }
        }
    }

    if let Node::Pow(base, exponent) = left {
        // x^a / x = x^(a - 1)
        if base.as_ref() == right {
            return Node::Pow(
                base.clone(),
                Node::Sub(exponent.clone(), num(1.0).boxed()).boxed(),
            )
            .simplify();
        }
        // x^a / x^b = x^(a - b)
        if let Node::Pow(rbase, rexponent) = right {
            if base == rbase {
                return Node::Pow(
                    base.clone(),
                    Node::Sub(exponent.clone(), rexponent.clone()).boxed(),
                )
                .simplify();
            }
        }
    }

    if let Node::Pow(base, exponent) = right {
        // x / x^a = x^(1 - a)
        if base.as_ref() == left {
            return Node::Pow(
                base.clone(),
                Node::Sub(num(1.0).boxed(), exponent.clone()).boxed(),
            )
            .simplify();
        }
    }

    Ok(Node::Div(left.clone().boxed(), right.clone().boxed()))
}

fn simplify_pow<T: Scalar>(left: &Node<T>, right: &Node<T>) -> Result<Node<T>, EvalError> {
    // 0^x = 0
    if is_zero(left) && !is_zero(right) {
        return Ok(left.clone());
    }
    // 1^x = 1
    if is_one(left) {
        return Ok(left.clone());
    }
    // x^1 = x
    if is_one(right) {
        return Ok(left.clone());
    }
    // x^0 = 1
    if is_zero(right) {
        return Ok(num(1.0));
    }

    // (x^a)^b = x^(a * b)
    if let Node::Pow(base, exponent) = left {
        return Node::Pow(
            base.clone(),
            Node::Mul(exponent.clone(), right.clone().boxed()).boxed(),
        )
        .simplify();
    }

    Ok(Node::Pow(left.clone().boxed(), right.clone().boxed()))
}

fn simplify_sin<T: Scalar>(arg: &Node<T>) -> Result<Node<T>, EvalError> {
    if let Node::Number(value) = arg {
        if let Some(folded) = fold_if_small(value.sin()) {
            return Ok(folded);
        }
    }
    // sin(-x) = -sin(x)
    if let Node::Neg(x) = arg {
        return Node::Neg(Node::Sin(x.clone()).boxed()).simplify();
    }
    Ok(Node::Sin(arg.clone().boxed()))
}

fn simplify_cos<T: Scalar>(arg: &Node<T>) -> Result<Node<T>, EvalError> {
    if let Node::Number(value) = arg {
        if let Some(folded) = fold_if_small(value.cos()) {
            return Ok(folded);
        }
    }
    // cos(-x) = cos(x)
    if let Node::Neg(x) = arg {
        return Node::Cos(x.clone()).simplify();
    }
    Ok(Node::Cos(arg.clone().boxed()))
}

fn simplify_exp<T: Scalar>(arg: &Node<T>) -> Result<Node<T>, EvalError> {
    if let Node::Number(value) = arg {
        if let Some(folded) = fold_if_small(value.exp()) {
            return Ok(folded);
        }
    }
    // exp(ln(x)) = x
    if let Node::Ln(x) = arg {
        return Ok(x.as_ref().clone());
    }
    if let Node::Add(al, ar) = arg {
        // exp(ln(x) + y) = x * exp(y)
        if let Node::Ln(x) = al.as_ref() {
            return Node::Mul(x.clone(), Node::Exp(ar.clone()).boxed()).simplify();
        }
        // exp(y + ln(x)) = x * exp(y)
        if let Node::Ln(x) = ar.as_ref() {
            return Node::Mul(x.clone(), Node::Exp(al.clone()).boxed()).simplify();
        }
    }
    if let Node::Sub(al, ar) = arg {
        // exp(ln(x) - y) = x / exp(y)
        if let Node::Ln(x) = al.as_ref() {
            return Node::Div(x.clone(), Node::Exp(ar.clone()).boxed()).simplify();
        }
        // exp(y - ln(x)) = exp(y) / x
        if let Node::Ln(x) = ar.as_ref() {
            return Node::Div(Node::Exp(al.clone()).boxed(), x.clone()).simplify();
        }
    }
    if let Node::Mul(al, ar) = arg {
        // exp(ln(x) * a) = x^a
        if let Node::Ln(x) = al.as_ref() {
            return Node::Pow(x.clone(), ar.clone()).simplify();
        }
        // exp(a * ln(x)) = x^a
        if let Node::Ln(x) = ar.as_ref() {
            return Node::Pow(x.clone(), al.clone()).simplify();
        }
    }
    if let Node::Div(al, ar) = arg {
        // exp(ln(x) / a) = x^(1 / a)
        if let Node::Ln(x) = al.as_ref() {
            return Node::Pow(
                x.clone(),
                Node::Div(num(1.0).boxed(), ar.clone()).boxed(),
            )
            .simplify();
        }
    }
    Ok(Node::Exp(arg.clone().boxed()))
}

fn simplify_ln<T: Scalar>(arg: &Node<T>) -> Result<Node<T>, EvalError> {
    if let Node::Number(value) = arg {
        if value.is_zero() {
            return Err(EvalError::LogarithmOfZero);
        }
        if let Some(folded) = fold_if_small(value.ln()) {
            return Ok(folded);
        }
    }
    // ln(exp(x)) = x
    if let Node::Exp(x) = arg {
        return Ok(x.as_ref().clone());
    }
    if let Node::Mul(al, ar) = arg {
        // ln(exp(x) * a) = x + ln(a)
        if let Node::Exp(x) = al.as_ref() {
            return Node::Add(x.clone(), Node::Ln(ar.clone()).boxed()).simplify();
        }
        // ln(a * exp(x)) = x + ln(a)
        if let Node::Exp(x) = ar.as_ref() {
            return Node::Add(x.clone(), Node::Ln(al.clone()).boxed()).simplify();
        }
    }
    if let Node::Div(al, ar) = arg {
        // ln(exp(x) / a) = x - ln(a)
        if let Node::Exp(x) = al.as_ref() {
            return Node::Sub(x.clone(), Node::Ln(ar.clone()).boxed()).simplify();
        }
        // ln(a / exp(x)) = ln(a) - x
        if let Node::Exp(x) = ar.as_ref() {
            return Node::Sub(Node::Ln(al.clone()).boxed(), x.clone()).simplify();
        }
    }
    Ok(Node::Ln(arg.clone().boxed()))
}
