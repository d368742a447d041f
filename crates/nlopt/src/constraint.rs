use std::fmt;

type ScalarFn<'a, D> = Box<dyn Fn(&[f64], &D) -> f64 + 'a>;
type VectorFn<'a, D> = Box<dyn Fn(&mut [f64], &[f64], &D) + 'a>;

enum Function<'a, D> {
    Scalar(ScalarFn<'a, D>),
    Vector {
        outputs: usize,
        function: VectorFn<'a, D>,
    },
}

/// An inequality constraint descriptor, satisfied where its value is `<= 0`.
///
/// Vector descriptors fill several constraint values at once. The global
/// search handles scalar constraints only, so [`minimize`](crate::minimize)
/// rejects any descriptor with more than one output.
pub struct Constraint<'a, D> {
    function: Function<'a, D>,
}

impl<'a, D> Constraint<'a, D> {
    /// Creates a scalar constraint `g(x, data) <= 0`.
    pub fn scalar(g: impl Fn(&[f64], &D) -> f64 + 'a) -> Self {
        Self {
            function: Function::Scalar(Box::new(g)),
        }
    }

    /// Creates a constraint block that writes `outputs` values into its
    /// first argument.
    pub fn vector(outputs: usize, g: impl Fn(&mut [f64], &[f64], &D) + 'a) -> Self {
        Self {
            function: Function::Vector {
                outputs,
                function: Box::new(g),
            },
        }
    }

    /// Returns the number of constraint values this descriptor produces.
    #[must_use]
    pub fn outputs(&self) -> usize {
        match &self.function {
            Function::Scalar(_) => 1,
            Function::Vector { outputs, .. } => *outputs,
        }
    }

    /// Evaluates a single-output descriptor at `x`.
    pub(crate) fn value(&self, x: &[f64], data: &D) -> f64 {
        match &self.function {
            Function::Scalar(g) => g(x, data),
            Function::Vector { function, .. } => {
                let mut out = [0.0];
                function(&mut out, x, data);
                out[0]
            }
        }
    }
}

impl<D> fmt::Debug for Constraint<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("outputs", &self.outputs())
            .finish_non_exhaustive()
    }
}
