use std::{
    cell::Cell,
    io,
    sync::{Arc, Mutex},
};

use approx::assert_relative_eq;

use hoelder_nlopt::{
    Constraint, MAX_CONSTRAINTS, MAX_DIMENSION, ReturnCode, Settings, Stopping, minimize,
};

/// Counts callback invocations.
#[derive(Default)]
struct Calls {
    objective: Cell<usize>,
    constraints: Cell<usize>,
}

impl Calls {
    fn total(&self) -> usize {
        self.objective.get() + self.constraints.get()
    }
}

fn parabola(x: &[f64], calls: &Calls) -> f64 {
    calls.objective.set(calls.objective.get() + 1);
    x[0] * x[0]
}

fn linear(x: &[f64], calls: &Calls) -> f64 {
    calls.objective.set(calls.objective.get() + 1);
    x[0]
}

fn at_least_half(x: &[f64], calls: &Calls) -> f64 {
    calls.constraints.set(calls.constraints.get() + 1);
    0.5 - x[0]
}

fn precise() -> Settings {
    Settings {
        precision: 0.01,
        ..Settings::default()
    }
}

#[test]
fn unconstrained_parabola() {
    let calls = Calls::default();
    let mut x = [f64::NAN];
    let mut min_value = f64::NAN;

    let code = minimize(
        1,
        parabola,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &[-1.0],
        &[1.0],
        &Stopping::max_evals(20_000),
        &precise(),
    );

    assert_eq!(code, ReturnCode::Success);
    assert_relative_eq!(x[0], 0.0, epsilon = 0.01);
    assert_relative_eq!(min_value, 0.0, epsilon = 0.01);
    assert!(calls.objective.get() <= 20_000);
}

#[test]
fn constrained_linear_objective() {
    let calls = Calls::default();
    let constraints = [Constraint::scalar(at_least_half)];
    let mut x = [f64::NAN];
    let mut min_value = f64::NAN;

    let code = minimize(
        1,
        linear,
        &calls,
        1,
        &constraints,
        &mut x,
        &mut min_value,
        &[0.0],
        &[1.0],
        &Stopping::max_evals(20_000),
        &precise(),
    );

    assert_eq!(code, ReturnCode::Success);
    assert!(x[0] >= 0.5);
    assert_relative_eq!(x[0], 0.5, epsilon = 0.01);
    assert_relative_eq!(min_value, x[0]);
    assert!(calls.objective.get() <= calls.constraints.get());
}

#[test]
fn budget_exhaustion_writes_best_point() {
    let calls = Calls::default();
    let mut x = [f64::NAN, f64::NAN];
    let mut min_value = f64::NAN;
    let shifted = |x: &[f64], calls: &Calls| {
        calls.objective.set(calls.objective.get() + 1);
        (x[0] - 0.3).powi(2) + (x[1] + 0.6).powi(2)
    };

    let code = minimize(
        2,
        shifted,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &[-1.0, -1.0],
        &[1.0, 1.0],
        &Stopping::max_evals(7),
        &Settings::default(),
    );

    assert_eq!(code, ReturnCode::MaxEvalReached);
    assert_eq!(calls.objective.get(), 7);
    assert!(x.iter().all(|xi| (-1.0..=1.0).contains(xi)));
    assert_relative_eq!(min_value, shifted(&x, &Calls::default()));
}

#[test]
fn rejects_excess_dimension_without_evaluating() {
    let calls = Calls::default();
    let n = MAX_DIMENSION + 1;
    let mut x = vec![0.0; n];
    let mut min_value = 42.0;

    let code = minimize(
        n,
        parabola,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &vec![-1.0; n],
        &vec![1.0; n],
        &Stopping::max_evals(100),
        &Settings::default(),
    );

    assert_eq!(code, ReturnCode::InvalidArgs);
    assert_eq!(calls.total(), 0);
    assert_eq!(min_value, 42.0);
}

#[test]
fn rejects_malformed_constraints() {
    let calls = Calls::default();
    let mut x = [0.0];
    let mut min_value = 0.0;
    let run = |m: usize, constraints: &[Constraint<'_, Calls>], x: &mut [f64], v: &mut f64| {
        minimize(
            1,
            linear,
            &calls,
            m,
            constraints,
            x,
            v,
            &[0.0],
            &[1.0],
            &Stopping::max_evals(100),
            &Settings::default(),
        )
    };

    // Descriptor count differs from m.
    let one = [Constraint::scalar(at_least_half)];
    assert_eq!(
        run(2, &one, &mut x, &mut min_value),
        ReturnCode::InvalidArgs
    );

    // Multi-valued constraint block.
    let block = [Constraint::vector(2, |out: &mut [f64], x: &[f64], _: &Calls| {
        out[0] = x[0];
        out[1] = -x[0];
    })];
    assert_eq!(
        run(1, &block, &mut x, &mut min_value),
        ReturnCode::InvalidArgs
    );

    // Too many constraints.
    let many: Vec<_> = (0..=MAX_CONSTRAINTS)
        .map(|_| Constraint::scalar(at_least_half))
        .collect();
    assert_eq!(
        run(MAX_CONSTRAINTS + 1, &many, &mut x, &mut min_value),
        ReturnCode::InvalidArgs
    );

    assert_eq!(calls.total(), 0);
}

#[test]
fn rejects_bad_buffers_bounds_and_settings() {
    let calls = Calls::default();
    let mut min_value = 0.0;

    let mut short = [0.0];
    let code = minimize(
        2,
        parabola,
        &calls,
        0,
        &[],
        &mut short,
        &mut min_value,
        &[0.0, 0.0],
        &[1.0, 1.0],
        &Stopping::max_evals(10),
        &Settings::default(),
    );
    assert_eq!(code, ReturnCode::InvalidArgs);

    let mut x = [0.0];
    let code = minimize(
        1,
        parabola,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &[1.0],
        &[0.0],
        &Stopping::max_evals(10),
        &Settings::default(),
    );
    assert_eq!(code, ReturnCode::InvalidArgs);

    let loose = Settings {
        reliability: 0.5,
        ..Settings::default()
    };
    let code = minimize(
        1,
        parabola,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &[0.0],
        &[1.0],
        &Stopping::max_evals(10),
        &loose,
    );
    assert_eq!(code, ReturnCode::InvalidArgs);

    let code = minimize(
        1,
        parabola,
        &calls,
        0,
        &[],
        &mut x,
        &mut min_value,
        &[0.0],
        &[1.0],
        &Stopping::max_evals(0),
        &Settings::default(),
    );
    assert_eq!(code, ReturnCode::InvalidArgs);

    assert_eq!(calls.total(), 0);
}

#[test]
fn infeasible_problem_leaves_outputs_untouched() {
    let calls = Calls::default();
    let never = Constraint::scalar(|_: &[f64], calls: &Calls| {
        calls.constraints.set(calls.constraints.get() + 1);
        1.0
    });
    let mut x = [0.25];
    let mut min_value = 7.0;

    let code = minimize(
        1,
        linear,
        &calls,
        1,
        &[never],
        &mut x,
        &mut min_value,
        &[0.0],
        &[1.0],
        &Stopping::max_evals(50),
        &Settings::default(),
    );

    assert_eq!(code, ReturnCode::Failure);
    assert_eq!(x, [0.25]);
    assert_eq!(min_value, 7.0);
    assert_eq!(calls.objective.get(), 0);
    assert_eq!(calls.constraints.get(), 50);
}

#[test]
fn engine_error_is_a_failure() {
    let mut x = [0.25];
    let mut min_value = 7.0;

    let code = minimize(
        1,
        |_: &[f64], _: &()| f64::NAN,
        &(),
        0,
        &[],
        &mut x,
        &mut min_value,
        &[0.0],
        &[1.0],
        &Stopping::max_evals(50),
        &Settings::default(),
    );

    assert_eq!(code, ReturnCode::Failure);
    assert_eq!(x, [0.25]);
    assert_eq!(min_value, 7.0);
}

// --- Verbose diagnostics ---

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logs(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, run);
    captured.text()
}

#[test]
fn verbose_reports_statistics() {
    let calls = Calls::default();
    let never = Constraint::scalar(|_: &[f64], _: &Calls| 1.0);
    let settings = Settings {
        verbose: true,
        ..Settings::default()
    };

    let logs = captured_logs(|| {
        let code = minimize(
            1,
            linear,
            &calls,
            1,
            &[never],
            &mut [0.0],
            &mut 0.0,
            &[0.0],
            &[1.0],
            &Stopping::max_evals(20),
            &settings,
        );
        assert_eq!(code, ReturnCode::Failure);
    });

    assert!(logs.contains("calls of constraint 0: 20"), "{logs}");
    assert!(logs.contains("calls of objective: 0"), "{logs}");
    assert!(logs.contains("feasible point not found"), "{logs}");
}

#[test]
fn quiet_by_default() {
    let calls = Calls::default();

    let logs = captured_logs(|| {
        minimize(
            1,
            parabola,
            &calls,
            0,
            &[],
            &mut [0.0],
            &mut 0.0,
            &[-1.0],
            &[1.0],
            &Stopping::max_evals(20),
            &Settings::default(),
        );
    });

    assert!(logs.is_empty(), "{logs}");
}
