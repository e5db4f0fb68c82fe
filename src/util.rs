use std::collections::HashMap;

lazy_static! {
    /// Unary functions callable from an expression, keyed by lowercase name.
    /// All entries share the meaning of the corresponding `libm` function;
    /// `log` and `ln` are both the natural logarithm.
    pub static ref FUNCTIONS: HashMap<String, fn(f64) -> f64> = {
        let mut map = HashMap::<String, fn(f64) -> f64>::new();
        map.insert("sqrt".into(), libm::sqrt);
        map.insert("cbrt".into(), libm::cbrt);
        map.insert("sin".into(), libm::sin);
        map.insert("cos".into(), libm::cos);
        map.insert("tan".into(), libm::tan);
        map.insert("asin".into(), libm::asin);
        map.insert("acos".into(), libm::acos);
        map.insert("atan".into(), libm::atan);
        map.insert("sinh".into(), libm::sinh);
        map.insert("cosh".into(), libm::cosh);
        map.insert("tanh".into(), libm::tanh);
        map.insert("asinh".into(), libm::asinh);
        map.insert("acosh".into(), libm::acosh);
        map.insert("atanh".into(), libm::atanh);
        map.insert("floor".into(), libm::floor);
        map.insert("ceil".into(), libm::ceil);
        map.insert("abs".into(), libm::fabs);
        map.insert("exp".into(), libm::exp);
        map.insert("log".into(), libm::log);
        map.insert("ln".into(), libm::log);
        map.insert("log2".into(), libm::log2);
        map.insert("log10".into(), libm::log10);
        map.shrink_to_fit();
        map
    };

    /// Named constants, resolved while the AST is built so that constant
    /// subexpressions fold away.
    pub static ref CONSTANTS: HashMap<String, f64> = {
        let mut map = HashMap::new();
        map.insert("pi".into(), std::f64::consts::PI);
        map.insert("e".into(), std::f64::consts::E);
        map.insert("tau".into(), 2.0 * std::f64::consts::PI);
        map.shrink_to_fit();
        map
    };
}

#[cfg(test)]
mod tests {
    use super::{CONSTANTS, FUNCTIONS};

    #[test]
    fn tables() {
        assert_eq!(FUNCTIONS.get("sqrt").map(|f| f(16.0)), Some(4.0));
        assert_eq!(FUNCTIONS.get("abs").map(|f| f(-3.0)), Some(3.0));
        let ln = FUNCTIONS.get("log").map(|f| f(std::f64::consts::E)).unwrap();
        assert!((ln - 1.0).abs() < 1e-12);
        assert!(FUNCTIONS.get("frob").is_none());
        assert_eq!(CONSTANTS.get("pi"), Some(&std::f64::consts::PI));
        assert_eq!(CONSTANTS.get("tau"), Some(&(2.0 * std::f64::consts::PI)));
    }
}
