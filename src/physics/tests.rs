#![cfg(test)]

use std::f64::consts::PI;
use std::ops::{Add, Div, Mul};

use super::*;

/// A damped spring with unit mass, stiffness 4 and damping `c`, released from x = 2 with v = 1.
struct SpringMass {
    c: f64,
}

impl SpringMass {
    const K: f64 = 4.0;
    const X0: f64 = 2.0;
    const V0: f64 = 1.0;

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        -self.c * v - Self::K * x
    }

    fn omega_0(&self) -> f64 {
        Self::K.sqrt()
    }

    /// The analytic position at time `t`.
    fn position(&self, t: f64) -> f64 {
        let (x0, v0) = (Self::X0, Self::V0);
        let omega_0 = self.omega_0();
        let gamma = self.c / 2.0;

        if gamma < omega_0 {
            let omega_d = (omega_0 * omega_0 - gamma * gamma).sqrt();
            (-gamma * t).exp()
                * (x0 * (omega_d * t).cos() + (v0 + gamma * x0) / omega_d * (omega_d * t).sin())
        } else if gamma > omega_0 {
            let d = (gamma * gamma - omega_0 * omega_0).sqrt();
            let (r1, r2) = (-gamma - d, -gamma + d);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = (r1 * x0 - v0) / (r1 - r2);
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        } else {
            (-gamma * t).exp() * (x0 + (v0 + gamma * x0) * t)
        }
    }

    /// The RMS position error of `integrator` over seven periods, 24 steps each.
    fn rms_error(&self, integrator: NewtonIntegrator) -> f64 {
        const STEPS_PER_PERIOD: usize = 24;
        const STEPS: usize = 7 * STEPS_PER_PERIOD;
        let dt = 2.0 * PI / self.omega_0() / STEPS_PER_PERIOD as f64;

        let (mut x, mut v) = (Self::X0, Self::V0);
        let mut error = 0.0;
        for n in 0..STEPS {
            error += (x - self.position(n as f64 * dt)).powi(2);
            (x, v) = integrator.integrate(x, v, dt, |x, v| self.acceleration(x, v));
        }
        (error / STEPS as f64).sqrt()
    }
}

#[test]
fn test_runge_kutta_4_is_most_accurate() {
    for c in [0.0, 1.5, 4.0, 8.0] {
        let spring = SpringMass { c };
        let rk4 = spring.rms_error(NewtonIntegrator::RungeKutta4);
        assert!(rk4 < 2e-3, "RK4 error {rk4} too large for c = {c}");

        for integrator in NewtonIntegrator::ALL.into_iter().filter(|&i| i != NewtonIntegrator::RungeKutta4) {
            let error = spring.rms_error(integrator);
            assert!(
                rk4 < error,
                "RK4 error {rk4} should be below {integrator} error {error} for c = {c}"
            );
        }
    }
}

#[test]
fn test_undamped_euler_diverges() {
    let spring = SpringMass { c: 0.0 };
    let euler = spring.rms_error(NewtonIntegrator::Euler);
    let semi_implicit = spring.rms_error(NewtonIntegrator::SemiImplicitEuler);
    assert!(euler > 10.0, "Forward Euler should gain energy, error was {euler}");
    assert!(semi_implicit < 1.0, "Semi-implicit Euler should stay bounded, error was {semi_implicit}");
}

#[test]
fn test_constant_acceleration() {
    let gravity = |_: f64, _: f64| -9.81;
    let dt = 0.1;
    let exact_pos = 3.0 * dt - 9.81 * dt * dt / 2.0;
    let exact_vel = 3.0 - 9.81 * dt;

    for integrator in [
        NewtonIntegrator::VelocityVerlet,
        NewtonIntegrator::RungeKutta2,
        NewtonIntegrator::RungeKutta4,
    ] {
        let (pos, vel) = integrator.integrate(0.0, 3.0, dt, gravity);
        assert!((pos - exact_pos).abs() < 1e-12, "{integrator} position {pos}");
        assert!((vel - exact_vel).abs() < 1e-12, "{integrator} velocity {vel}");
    }

    let (pos, vel) = NewtonIntegrator::Euler.integrate(0.0, 3.0, dt, gravity);
    assert_eq!(pos, 3.0 * dt, "Euler moves with the old velocity.");
    assert!((vel - exact_vel).abs() < 1e-12);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2(f64, f64);

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Vec2 {
        Vec2(self.0 / rhs, self.1 / rhs)
    }
}

#[test]
fn test_vector_state() {
    // Uniform circular motion: the acceleration points at the origin.
    let centripetal = |p: Vec2, _: Vec2| p * -1.0;
    let (mut pos, mut vel) = (Vec2(1.0, 0.0), Vec2(0.0, 1.0));
    let steps = 1000;
    let dt = 2.0 * PI / steps as f64;
    let mut evaluations = 0;
    for _ in 0..steps {
        (pos, vel) = NewtonIntegrator::RungeKutta4.integrate(pos, vel, dt, |p, v| {
            evaluations += 1;
            centripetal(p, v)
        });
    }
    assert_eq!(evaluations, 4 * steps, "RK4 evaluates the acceleration four times per step.");
    assert!((pos.0 - 1.0).abs() < 1e-9 && pos.1.abs() < 1e-9, "ended at {pos:?}");
    assert!(vel.0.abs() < 1e-9 && (vel.1 - 1.0).abs() < 1e-9, "ended with {vel:?}");
}
