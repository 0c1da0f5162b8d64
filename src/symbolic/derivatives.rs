use crate::symbolic::node::{num, Node};
use crate::symbolic::scalar::Scalar;

impl<T: Scalar> Node<T> {
    /// Analytical derivative with respect to `variable`.
    ///
    /// The result is built mechanically from the chain, product and
    /// quotient rules and is not simplified; `x^2` differentiates to
    /// `(2 * 1 / x + 0 * ln(x)) * x^2`. Run [`Node::simplify`] on the
    /// result to fold it down.
    ///
    /// The power rule uses the logarithmic form
    /// `(f^g)' = (g f' / f + g' ln(f)) * f^g`, which covers variable
    /// exponents; simplification collapses it to `a * x^(a - 1)` when the
    /// exponent is constant.
    pub fn differentiate(&self, variable: &str) -> Node<T> {
        match self {
            Node::Number(_) => num(0.0),
            Node::Variable(name) => {
                if name == variable {
                    num(1.0)
                } else {
                    num(0.0)
                }
            }
            Node::Neg(arg) => Node::Neg(arg.differentiate(variable).boxed()),
            Node::Add(left, right) => Node::Add(
                left.differentiate(variable).boxed(),
                right.differentiate(variable).boxed(),
            ),
            Node::Sub(left, right) => Node::Sub(
                left.differentiate(variable).boxed(),
                right.differentiate(variable).boxed(),
            ),
            Node::Mul(left, right) => Node::Add(
                Node::Mul(left.differentiate(variable).boxed(), right.clone()).boxed(),
                Node::Mul(left.clone(), right.differentiate(variable).boxed()).boxed(),
            ),
            Node::Div(left, right) => Node::Div(
                Node::Sub(
                    Node::Mul(left.differentiate(variable).boxed(), right.clone()).boxed(),
                    Node::Mul(left.clone(), right.differentiate(variable).boxed()).boxed(),
                )
                .boxed(),
                Node::Pow(right.clone(), num(2.0).boxed()).boxed(),
            ),
            Node::Pow(left, right) => Node::Mul(
                Node::Add(
                    Node::Div(
                        Node::Mul(right.clone(), left.differentiate(variable).boxed()).boxed(),
                        left.clone(),
                    )
                    .boxed(),
                    Node::Mul(
                        right.differentiate(variable).boxed(),
                        Node::Ln(left.clone()).boxed(),
                    )
                    .boxed(),
                )
                .boxed(),
                self.clone().boxed(),
            ),
            Node::Sin(arg) => Node::Mul(
                Node::Cos(arg.clone()).boxed(),
                arg.differentiate(variable).boxed(),
            ),
            Node::Cos(arg) => Node::Mul(
                Node::Neg(Node::Sin(arg.clone()).boxed()).boxed(),
                arg.differentiate(variable).boxed(),
            ),
            Node::Exp(arg) => Node::Mul(
                Node::Exp(arg.clone()).boxed(),
                arg.differentiate(variable).boxed(),
            ),
            Node::Ln(arg) => Node::Mul(
                Node::Div(num(1.0).boxed(), arg.clone()).boxed(),
                arg.differentiate(variable).boxed(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Node<f64> {
        Node::Variable(name.to_string())
    }

    #[test]
    fn test_constant_and_variable() {
        assert_eq!(Node::Number(5.0_f64).differentiate("x"), num(0.0));
        assert_eq!(var("x").differentiate("x"), num(1.0));
        assert_eq!(var("y").differentiate("x"), num(0.0));
    }

    #[test]
    fn test_sum_rule_is_termwise() {
        let tree = Node::Add(var("x").boxed(), var("y").boxed());
        assert_eq!(
            tree.differentiate("x"),
            Node::Add(num(1.0).boxed(), num(0.0).boxed())
        );
    }

    #[test]
    fn test_product_rule_shape() {
        let tree = Node::Mul(var("x").boxed(), var("y").boxed());
        assert_eq!(
            tree.differentiate("x"),
            Node::Add(
                Node::Mul(num(1.0).boxed(), var("y").boxed()).boxed(),
                Node::Mul(var("x").boxed(), num(0.0).boxed()).boxed()
            )
        );
    }

    #[test]
    fn test_sine_uses_chain_rule() {
        let tree = Node::Sin(Node::Mul(num(2.0).boxed(), var("x").boxed()).boxed());
        let inner = Node::Mul(num(2.0).boxed(), var("x").boxed());
        assert_eq!(
            tree.differentiate("x"),
            Node::Mul(
                Node::Cos(inner.clone().boxed()).boxed(),
                inner.differentiate("x").boxed()
            )
        );
    }

    #[test]
    fn test_power_rule_keeps_original_factor() {
        let tree = Node::Pow(var("x").boxed(), var("y").boxed());
        let derivative = tree.differentiate("x");
        match derivative {
            Node::Mul(_, right) => assert_eq!(*right, tree),
            other => panic!("expected a product, got {:?}", other),
        }
    }
}
